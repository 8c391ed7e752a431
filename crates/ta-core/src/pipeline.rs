//! From raw export rows to an assembled report.

use crate::assemble::sort_members;
use crate::identity::IdentityParser;
use crate::presence::classify_duration;
use crate::roster::{GroupLookup, Roster, reconcile};
use crate::time_slot::{classify_lateness, classify_slot, parse_clock};
use crate::types::{
    AttendanceRecord, AttendanceReport, InputError, PREAMBLE_ROWS, RawExport, ReportHeader,
};

/// Title the platform gives meetings nobody renamed.
pub const PLATFORM_DEFAULT_TITLE: &str = "General";

/// Title used when the export has none worth showing.
pub const PLACEHOLDER_TITLE: &str = "Untitled meeting";

/// Role values that mark the meeting organizer.
const ORGANIZER_MARKERS: [&str; 2] = ["Organizer", "Инициатор"];

const TITLE_ROW: usize = 2;
const START_ROW: usize = 3;

const NAME_FIELD: usize = 0;
const JOIN_FIELD: usize = 1;
const DURATION_FIELD: usize = 3;
const ROLE_FIELD: usize = 5;

/// Splits a `"date, time"` field into the date and the clock time in seconds.
pub fn split_date_time(value: &str) -> Result<(String, u32), InputError> {
    let Some((date, time)) = value.split_once(',') else {
        return Err(InputError::DateTime {
            value: value.to_string(),
        });
    };
    let time: String = time.chars().filter(|c| *c != ' ').collect();
    Ok((date.trim().to_string(), parse_clock(&time)?))
}

/// Reads the title and start time from the export preamble.
pub fn parse_header(preamble: &[Vec<String>]) -> Result<ReportHeader, InputError> {
    if preamble.len() < PREAMBLE_ROWS {
        return Err(InputError::Preamble {
            reason: format!("expected {PREAMBLE_ROWS} rows, found {}", preamble.len()),
        });
    }

    let title = match preamble[TITLE_ROW].get(1) {
        Some(title) if !title.is_empty() && title != PLATFORM_DEFAULT_TITLE => title.clone(),
        _ => PLACEHOLDER_TITLE.to_string(),
    };

    let start = preamble[START_ROW]
        .get(1)
        .ok_or_else(|| InputError::Preamble {
            reason: "meeting start time is missing".to_string(),
        })?;
    let (date, seconds) = split_date_time(start)?;

    Ok(ReportHeader {
        title,
        date,
        time_slot: classify_slot(seconds),
    })
}

/// Classifies participant rows against a roster.
#[derive(Debug)]
pub struct Classifier<'a, L: ?Sized> {
    parser: &'a IdentityParser,
    lookup: &'a L,
}

impl<'a, L: GroupLookup + ?Sized> Classifier<'a, L> {
    pub const fn new(parser: &'a IdentityParser, lookup: &'a L) -> Self {
        Self { parser, lookup }
    }

    /// Builds the record for one participant row.
    ///
    /// `index` is the row's position among participant rows, for error
    /// messages. Returns `Ok(None)` for the organizer and for names that
    /// cannot be parsed.
    pub fn classify_participant(
        &self,
        index: usize,
        row: &[String],
    ) -> Result<Option<AttendanceRecord>, InputError> {
        if row.len() <= ROLE_FIELD {
            return Err(InputError::ShortRow {
                row: index,
                found: row.len(),
                expected: ROLE_FIELD + 1,
            });
        }

        if ORGANIZER_MARKERS.contains(&row[ROLE_FIELD].trim()) {
            tracing::debug!(row = index, "skipping organizer");
            return Ok(None);
        }

        let raw_name = &row[NAME_FIELD];
        let Some(parsed) = self.parser.parse(raw_name) else {
            tracing::warn!(
                row = index,
                name = %raw_name,
                "dropping participant with unparseable name"
            );
            return Ok(None);
        };

        let group = match parsed.embedded_group {
            Some(group) => group,
            None => self.lookup.group_or_guest(&parsed.full_name),
        };

        let (_, joined_at) = split_date_time(&row[JOIN_FIELD])?;
        let lateness = classify_lateness(joined_at);
        let duration = classify_duration(&row[DURATION_FIELD])?;

        tracing::debug!(
            name = %parsed.full_name,
            %group,
            %lateness,
            %duration,
            "classified participant"
        );
        Ok(Some(AttendanceRecord::observed(
            group,
            parsed.full_name,
            lateness,
            duration,
        )))
    }

    /// Classifies every participant row, skipping dropped ones.
    pub fn classify_rows(&self, rows: &[Vec<String>]) -> Result<Vec<AttendanceRecord>, InputError> {
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if let Some(record) = self.classify_participant(index, row)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

/// Runs the whole classification: header, participants, absentees, ordering.
///
/// Consultations have no expected attendance, so the roster is only used
/// for group lookup there.
pub fn build_report(
    export: &RawExport,
    roster: &Roster,
    parser: &IdentityParser,
) -> Result<AttendanceReport, InputError> {
    let header = parse_header(&export.preamble)?;
    let observed = Classifier::new(parser, roster).classify_rows(&export.rows)?;
    tracing::info!(
        observed = observed.len(),
        time_slot = %header.time_slot,
        "classified export"
    );

    let members = if header.time_slot.is_consultation() {
        observed
    } else {
        let observed_count = observed.len();
        let members = reconcile(observed, roster, roster);
        tracing::info!(absent = members.len() - observed_count, "reconciled roster");
        members
    };

    Ok(AttendanceReport {
        header,
        members: sort_members(members),
    })
}
