//! Slot command for checking how a clock time is classified.

use std::io::Write;

use anyhow::{Context, Result};
use ta_core::time_slot::late_window;
use ta_core::{classify_lateness, classify_slot, parse_clock};

pub fn run<W: Write>(writer: &mut W, time: &str) -> Result<()> {
    let seconds = parse_clock(time.trim()).with_context(|| format!("cannot classify {time:?}"))?;

    writeln!(writer, "Time: {time} ({seconds} s)")?;
    writeln!(writer, "Time slot: {}", classify_slot(seconds))?;
    match late_window(seconds) {
        Some(window) => writeln!(
            writer,
            "Lateness: {} (period {} window {}-{})",
            classify_lateness(seconds),
            window.period,
            window.from,
            window.to
        )?,
        None => writeln!(writer, "Lateness: {}", classify_lateness(seconds))?,
    }

    Ok(())
}
