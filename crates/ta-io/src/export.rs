//! Reading the platform's attendance export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ta_core::RawExport;

use crate::IoError;

/// Extension of export files in the download directory.
const EXPORT_EXTENSION: &str = "csv";

/// The newest export in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestExport {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

/// Picks the most recently modified `.csv` file in `dir`.
pub fn find_latest_export(dir: &Path) -> Result<LatestExport, IoError> {
    let read_err = |source| IoError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut latest: Option<LatestExport> = None;
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let is_export = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(EXPORT_EXTENSION));
        let metadata = entry.metadata().map_err(read_err)?;
        if !is_export || !metadata.is_file() {
            continue;
        }

        let modified: DateTime<Local> = metadata.modified().map_err(read_err)?.into();
        tracing::debug!(path = %path.display(), %modified, "found export candidate");
        if latest.as_ref().is_none_or(|l| modified > l.modified) {
            latest = Some(LatestExport { path, modified });
        }
    }

    latest.ok_or_else(|| IoError::NoExports {
        dir: dir.to_path_buf(),
    })
}

/// Decodes export bytes.
///
/// Exports are UTF-16LE with a byte-order mark; a BE or UTF-8 mark is
/// honoured too. Returns `None` if the bytes are malformed.
pub fn decode_export(bytes: &[u8]) -> Option<String> {
    let (text, encoding, had_errors) = encoding_rs::UTF_16LE.decode(bytes);
    tracing::debug!(encoding = encoding.name(), "decoded export");
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// Splits decoded export text into rows of tab-separated fields.
///
/// Rows vary in width, and fields are taken literally: the platform does
/// not quote, and names may contain quote characters.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }
    Ok(rows)
}

/// Reads and splits an export file.
pub fn read_export(path: &Path) -> Result<RawExport, IoError> {
    let bytes = fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_export(&bytes).ok_or_else(|| IoError::Decode {
        path: path.to_path_buf(),
    })?;
    let rows = parse_rows(&text).map_err(|source| IoError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "read export");
    Ok(RawExport::from_rows(rows))
}
