//! Core domain logic for the attendance tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Time slots: mapping clock times to periods and lateness
//! - Identity: normalizing display names and spotting embedded group codes
//! - Presence: bucketing how long a participant stayed
//! - Roster: group lookup and absentee reconciliation
//! - Assembly: ordering report rows
//!
//! No file I/O happens here; see `ta-io` for the export, roster and report
//! file formats.

mod assemble;
pub mod identity;
pub mod pipeline;
pub mod presence;
pub mod roster;
pub mod time_slot;
pub mod types;

pub use assemble::{compare_members, sort_members};
pub use identity::{DEFAULT_GROUP_PREFIXES, IdentityParser, ParsedName};
pub use pipeline::{Classifier, build_report, parse_header};
pub use presence::classify_duration;
pub use roster::{GroupLookup, Roster, RosterEntry, reconcile};
pub use time_slot::{classify_lateness, classify_slot, parse_clock};
pub use types::{
    AttendanceRecord, AttendanceReport, DurationCategory, GUEST_GROUP, InputError, Lateness,
    Presence, RawExport, ReportHeader, TimeSlot,
};
