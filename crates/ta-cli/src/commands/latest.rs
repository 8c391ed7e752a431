//! Latest command for showing which export `ta report` would pick.

use std::io::Write;

use anyhow::{Context, Result};

use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let latest = ta_io::find_latest_export(&config.export_dir).with_context(|| {
        format!(
            "failed to search for exports in {}",
            config.export_dir.display()
        )
    })?;

    writeln!(writer, "{}", latest.path.display())?;
    writeln!(
        writer,
        "Modified: {}",
        latest.modified.format("%Y-%m-%d %H:%M:%S")
    )?;
    Ok(())
}
