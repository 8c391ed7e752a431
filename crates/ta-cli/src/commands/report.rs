//! Report command for generating attendance reports.
//!
//! This module implements `ta report`: locate the export, classify it
//! against the roster, then write the report file (or print it as JSON).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ta_core::{AttendanceReport, IdentityParser, Presence, build_report};

use crate::Config;

/// Per-run overrides from the command line.
#[derive(Debug, Default, Clone)]
pub struct ReportOptions {
    pub export: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub json: bool,
    pub dry_run: bool,
}

/// Counts of each presence status.
fn presence_counts(report: &AttendanceReport) -> (usize, usize, usize) {
    report
        .members
        .iter()
        .fold((0, 0, 0), |(present, partial, absent), m| match m.presence {
            Presence::Present => (present + 1, partial, absent),
            Presence::PartiallyPresent => (present, partial + 1, absent),
            Presence::Absent => (present, partial, absent + 1),
        })
}

/// Formats a short human-readable summary of a report.
pub fn format_summary(report: &AttendanceReport) -> String {
    let (present, partial, absent) = presence_counts(report);
    let header = &report.header;
    format!(
        "Title: {}\nDate: {}\nTime slot: {}\nMembers: {} \
         (present {present}, partially present {partial}, absent {absent})\n",
        header.title,
        header.date,
        header.time_slot,
        report.members.len(),
    )
}

/// Run the report command.
pub fn run<W: Write>(writer: &mut W, config: &Config, options: &ReportOptions) -> Result<()> {
    let export_path = match &options.export {
        Some(path) => path.clone(),
        None => {
            let latest = ta_io::find_latest_export(&config.export_dir)
                .context("failed to locate the latest export")?;
            tracing::info!(
                path = %latest.path.display(),
                modified = %latest.modified,
                "using latest export"
            );
            latest.path
        }
    };

    let export = ta_io::read_export(&export_path)
        .with_context(|| format!("failed to read export {}", export_path.display()))?;

    let roster_path = options.roster.as_ref().unwrap_or(&config.roster_path);
    let roster = ta_io::load_roster(roster_path)
        .with_context(|| format!("failed to load roster {}", roster_path.display()))?;

    let parser = IdentityParser::new(&config.group_prefixes);
    let report = build_report(&export, &roster, &parser)
        .with_context(|| format!("failed to process export {}", export_path.display()))?;

    if options.json {
        serde_json::to_writer_pretty(&mut *writer, &report).context("failed to serialize report")?;
        writeln!(writer)?;
        return Ok(());
    }

    write!(writer, "{}", format_summary(&report))?;

    if options.dry_run {
        tracing::info!("dry run, report not written");
        return Ok(());
    }

    let output_dir = options.output_dir.as_ref().unwrap_or(&config.report_dir);
    let path = ta_io::save_report(output_dir, &report).context("failed to save report")?;
    writeln!(writer, "Report written to {}", path.display())?;

    Ok(())
}
