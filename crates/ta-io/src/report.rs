//! Writing the attendance report.

use std::io::Write;
use std::path::{Path, PathBuf};

use ta_core::{AttendanceReport, ReportHeader};

use crate::IoError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Report field delimiter; the roster uses commas.
pub const REPORT_DELIMITER: u8 = b';';

/// Column titles of the member table.
pub const MEMBER_COLUMNS: [&str; 5] = ["Group", "FullName", "Presence", "Lateness", "Duration"];

/// Characters that cannot appear in a file name on common platforms.
const UNSAFE_FILE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(REPORT_DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .flexible(true)
        .from_writer(out)
}

/// Renders the report into memory.
pub fn render_report(report: &AttendanceReport) -> Result<Vec<u8>, IoError> {
    let mut buf = UTF8_BOM.to_vec();

    let header = &report.header;
    let time_slot = header.time_slot.to_string();
    let mut writer = csv_writer(&mut buf);
    writer.write_record(["Title", header.title.as_str()])?;
    writer.write_record(["Date", header.date.as_str()])?;
    writer.write_record(["Time slot", time_slot.as_str()])?;
    writer.flush().map_err(csv::Error::from)?;
    drop(writer);

    buf.extend_from_slice(b"\r\n");

    let mut writer = csv_writer(&mut buf);
    writer.write_record(MEMBER_COLUMNS)?;
    for member in report.members.iter().filter(|m| !m.full_name.is_empty()) {
        writer.write_record([
            member.group.as_str(),
            member.full_name.as_str(),
            member.presence.as_str(),
            member.lateness_label(),
            member.duration_label(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    drop(writer);

    Ok(buf)
}

/// Renders the report and writes it to `out`.
pub fn write_report<W: Write>(mut out: W, report: &AttendanceReport) -> Result<(), IoError> {
    let bytes = render_report(report)?;
    out.write_all(&bytes).map_err(IoError::Output)?;
    Ok(())
}

/// File name for a report: `Attendance report_<title>_<date>.csv`.
pub fn report_file_name(header: &ReportHeader) -> String {
    let sanitize = |s: &str| s.replace(UNSAFE_FILE_CHARS, "-");
    format!(
        "Attendance report_{}_{}.csv",
        sanitize(&header.title),
        sanitize(&header.date)
    )
}

/// Writes the report into `dir` and returns the file path.
///
/// The content is rendered before the file is created, so a rendering
/// failure leaves nothing behind.
pub fn save_report(dir: &Path, report: &AttendanceReport) -> Result<PathBuf, IoError> {
    let bytes = render_report(report)?;
    let path = dir.join(report_file_name(&report.header));
    std::fs::write(&path, bytes).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), members = report.members.len(), "wrote report");
    Ok(path)
}
