//! File adapters for the attendance tracker.
//!
//! Three formats cross the process boundary:
//!
//! - **Export**: the platform's attendance download, tab-delimited and
//!   UTF-16 encoded with a byte-order mark. See [`export`].
//! - **Roster**: a UTF-8, comma-delimited `full_name,group` list without a
//!   header row. See [`roster`].
//! - **Report**: the generated attendance report, UTF-8 with a byte-order
//!   mark and `;`-delimited so spreadsheet software picks the right
//!   encoding and does not confuse it with the roster. See [`report`].
//!
//! Everything is read or rendered fully in memory; a report file is only
//! created once its content is complete.

use std::path::PathBuf;

use thiserror::Error;

pub mod export;
pub mod report;
pub mod roster;

pub use export::{LatestExport, find_latest_export, read_export};
pub use report::{render_report, report_file_name, save_report, write_report};
pub use roster::{load_roster, parse_roster};

/// File adapter errors.
#[derive(Debug, Error)]
pub enum IoError {
    /// A file or directory could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export is not valid UTF-16 text.
    #[error("{} is not a valid UTF-16 export", path.display())]
    Decode { path: PathBuf },

    /// Delimited content could not be parsed.
    #[error("malformed delimited data in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A roster line lacked the group column.
    #[error("roster {} line {line}: expected full name and group, found {found} field(s)", path.display())]
    RosterRow {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    /// The export directory holds no export files.
    #[error("no .csv exports found in {}; check the export directory setting", dir.display())]
    NoExports { dir: PathBuf },

    /// Rendered report bytes could not be written to the output.
    #[error("failed to write report output")]
    Output(#[source] std::io::Error),

    /// The report could not be rendered.
    #[error("failed to render report")]
    Render(#[from] csv::Error),
}
