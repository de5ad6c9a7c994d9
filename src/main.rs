//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `findroot` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use findroot::initialization::init_logger_with;
use findroot::{run_extraction, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_extraction(&config) {
        Ok(report) => {
            println!(
                "✅ Saved {} root domain{} from {} line{} to {} in {:.1}s",
                report.roots_found,
                if report.roots_found == 1 { "" } else { "s" },
                report.lines_processed,
                if report.lines_processed == 1 { "" } else { "s" },
                report.output_path.display(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("findroot error: {:#}", e);
            process::exit(1);
        }
    }
}
