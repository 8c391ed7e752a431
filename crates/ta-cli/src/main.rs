use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ta_cli::commands::{latest, report, slot};
use ta_cli::{Cli, Commands, Config};

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut out = stdout().lock();

    match &cli.command {
        Some(Commands::Report {
            export,
            output_dir,
            roster,
            json,
            dry_run,
        }) => {
            let config = load_config(&cli)?;
            let options = report::ReportOptions {
                export: export.clone(),
                output_dir: output_dir.clone(),
                roster: roster.clone(),
                json: *json,
                dry_run: *dry_run,
            };
            report::run(&mut out, &config, &options)?;
        }
        Some(Commands::Slot { time }) => {
            // Slot doesn't need config - the period tables are fixed
            slot::run(&mut out, time)?;
        }
        Some(Commands::Latest) => {
            let config = load_config(&cli)?;
            latest::run(&mut out, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
