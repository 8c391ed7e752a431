//! Loading the roster file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ta_core::{Roster, RosterEntry};

use crate::IoError;

const BOM: char = '\u{feff}';

/// Parses `full_name,group` rows. Extra columns are ignored.
///
/// `path` is only used in error messages.
pub fn parse_roster<R: Read>(reader: R, path: &Path) -> Result<Roster, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IoError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() < 2 {
            return Err(IoError::RosterRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                found: record.len(),
            });
        }
        let full_name = record[0].trim_start_matches(BOM);
        entries.push(RosterEntry::new(full_name, &record[1]));
    }

    Ok(Roster::new(entries))
}

/// Reads the roster file at `path`.
pub fn load_roster(path: &Path) -> Result<Roster, IoError> {
    let file = File::open(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(file, path)?;
    tracing::info!(path = %path.display(), entries = roster.len(), "loaded roster");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ta_core::GroupLookup;

    fn parse(text: &str) -> Result<Roster, IoError> {
        parse_roster(text.as_bytes(), Path::new("GroupsBase.csv"))
    }

    #[test]
    fn parses_name_group_pairs() {
        let roster = parse("Ivanov Ivan Ivanovich,МП-21\nPetrov Petr Petrovich,МТ-32\n").unwrap();
        assert_eq!(
            roster.entries(),
            &[
                RosterEntry::new("Ivanov Ivan Ivanovich", "МП-21"),
                RosterEntry::new("Petrov Petr Petrovich", "МТ-32"),
            ]
        );
        assert_eq!(roster.lookup_group("Petrov Petr Petrovich"), Some("МТ-32"));
    }

    #[test]
    fn strips_leading_bom() {
        let roster = parse("\u{feff}Ivanov Ivan,МП-21\n").unwrap();
        assert_eq!(roster.lookup_group("Ivanov Ivan"), Some("МП-21"));
    }

    #[test]
    fn missing_group_column_is_an_error() {
        let err = parse("Ivanov Ivan,МП-21\nPetrov Petr\n").unwrap_err();
        match err {
            IoError::RosterRow { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_roster_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("GroupsBase.csv");
        std::fs::write(&path, "A B,G1\r\nC D,G2\r\n").unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.lookup_group("C D"), Some("G2"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_roster(Path::new("/nonexistent/GroupsBase.csv")).unwrap_err();
        assert!(matches!(err, IoError::Read { .. }));
    }
}
