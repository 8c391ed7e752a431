//! CLI subcommand implementations.

pub mod latest;
pub mod report;
pub mod slot;
