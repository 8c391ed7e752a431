//! Core attendance types and input errors.

use std::fmt;
use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

/// Sentinel group for participants missing from the roster.
pub const GUEST_GROUP: &str = "Guest";

/// Rendering of a field that does not apply to a record.
pub const UNSET_MARKER: &str = "_";

/// Malformed export content. Any of these aborts the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A clock time did not split into `HH:MM:SS` or `MM:SS`.
    #[error("invalid time {value:?}: expected HH:MM:SS or MM:SS, got {count} part(s)")]
    ClockFormat { value: String, count: usize },

    /// A time or duration component was not a number.
    #[error("invalid number {token:?} in {value:?}")]
    Number {
        value: String,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A time or duration does not fit in a day count of seconds.
    #[error("time {value:?} is out of range")]
    ClockRange { value: String },

    /// A duration string had an unsupported number of tokens.
    #[error("invalid duration {value:?}: unexpected token count {count}")]
    DurationFormat { value: String, count: usize },

    /// A `"date, time"` field had no comma.
    #[error("invalid date/time {value:?}: expected \"date, time\"")]
    DateTime { value: String },

    /// The export preamble ended early or lacked a required field.
    #[error("export preamble is incomplete: {reason}")]
    Preamble { reason: String },

    /// A participant row had too few fields.
    #[error("participant row {row} has {found} field(s), expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Whether a participant joined after the lateness threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lateness {
    OnTime,
    Late,
}

impl Lateness {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "On time",
            Self::Late => "Late",
        }
    }
}

impl fmt::Display for Lateness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse bucket of how long a participant stayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationCategory {
    /// Under a minute.
    Minimal,
    /// Up to half an hour.
    Partial,
    /// More than half an hour.
    Full,
}

impl DurationCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Partial => "Partial",
            Self::Full => "Full",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Present,
    PartiallyPresent,
    Absent,
}

impl Presence {
    /// Presence of an observed participant.
    ///
    /// Only a full stay counts as present. `Absent` is never derived from a
    /// duration; it is reserved for roster members that never joined.
    #[must_use]
    pub const fn from_duration(duration: DurationCategory) -> Self {
        match duration {
            DurationCategory::Full => Self::Present,
            DurationCategory::Minimal | DurationCategory::Partial => Self::PartiallyPresent,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::PartiallyPresent => "Partially present",
            Self::Absent => "Absent",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    /// Group code, or [`GUEST_GROUP`].
    pub group: String,

    /// Canonical "Last First Middle" name. Empty means "do not report".
    pub full_name: String,

    /// Unset for absentees.
    pub lateness: Option<Lateness>,

    /// Unset for absentees.
    pub duration: Option<DurationCategory>,

    pub presence: Presence,
}

impl AttendanceRecord {
    /// Creates a record for a participant seen in the export.
    pub fn observed(
        group: impl Into<String>,
        full_name: impl Into<String>,
        lateness: Lateness,
        duration: DurationCategory,
    ) -> Self {
        Self {
            group: group.into(),
            full_name: full_name.into(),
            lateness: Some(lateness),
            duration: Some(duration),
            presence: Presence::from_duration(duration),
        }
    }

    /// Creates a record for a roster member who never joined.
    pub fn absent(group: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            full_name: full_name.into(),
            lateness: None,
            duration: None,
            presence: Presence::Absent,
        }
    }

    /// Lateness as shown in the report.
    pub fn lateness_label(&self) -> &'static str {
        self.lateness.as_ref().map_or(UNSET_MARKER, Lateness::as_str)
    }

    /// Duration category as shown in the report.
    pub fn duration_label(&self) -> &'static str {
        self.duration
            .as_ref()
            .map_or(UNSET_MARKER, DurationCategory::as_str)
    }
}

/// Institutional period a meeting falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    /// Periods are numbered from 1.
    Period(u8),
    /// Ad-hoc session outside every period window.
    Consultation,
}

impl TimeSlot {
    pub const fn is_consultation(&self) -> bool {
        matches!(self, Self::Consultation)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period(n) => write!(f, "Period {n}"),
            Self::Consultation => f.write_str("Consultation"),
        }
    }
}

impl Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Report header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub title: String,
    /// Meeting date exactly as the export spells it.
    pub date: String,
    pub time_slot: TimeSlot,
}

/// A fully assembled report, ready for a writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    pub header: ReportHeader,
    pub members: Vec<AttendanceRecord>,
}

/// Rows of a decoded export, split at the end of the fixed preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExport {
    pub preamble: Vec<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Number of rows before the first participant row.
pub const PREAMBLE_ROWS: usize = 8;

impl RawExport {
    /// Splits decoded rows into preamble and participant rows.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let rest = rows.split_off(rows.len().min(PREAMBLE_ROWS));
        Self {
            preamble: rows,
            rows: rest,
        }
    }
}
