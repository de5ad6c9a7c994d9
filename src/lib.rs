//! findroot library: root domain extraction from free-form text
//!
//! Reads arbitrary text, finds domain-like substrings and reduces each one to
//! its registrable root using a list of known TLD and second-level TLD
//! suffixes. The distinct roots of a whole run are written to a file.
//!
//! # Example
//!
//! ```no_run
//! use findroot::{run_extraction_from, Config};
//! use std::io::Cursor;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     tld_file: PathBuf::from("tld.txt"),
//!     output: PathBuf::from("root.txt"),
//!     ..Default::default()
//! };
//!
//! let input = Cursor::new("Visit sub.example.com and www.foo.co.uk today\n");
//! let report = run_extraction_from(&config, input)?;
//! println!("Found {} root domains", report.roots_found);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod output;
pub mod suffix;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use extract::{extract, root_domain, RootExtractor, RootSet};
pub use run::{run_extraction, run_extraction_from, ExtractionReport};
pub use suffix::SuffixTable;

// Internal run module (load, extract, write)
mod run {
    use std::io::{self, BufRead};
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::print_extraction_statistics;
    use crate::config::Config;
    use crate::extract::extract;
    use crate::output::write_roots;
    use crate::suffix::SuffixTable;

    /// Results of an extraction run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Number of suffixes in the loaded table
        pub suffixes_loaded: usize,
        /// Number of input lines read
        pub lines_processed: usize,
        /// Number of domain-like tokens found in the input
        pub tokens_found: usize,
        /// Number of distinct root domains written
        pub roots_found: usize,
        /// Path the root domains were written to
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an extraction over the process's standard input.
    ///
    /// # Errors
    ///
    /// See [`run_extraction_from`].
    pub fn run_extraction(config: &Config) -> Result<ExtractionReport> {
        let stdin = io::stdin();
        run_extraction_from(config, stdin.lock())
    }

    /// Runs an extraction over `input`.
    ///
    /// The suffix table is loaded from `config.tld_file`, every line of
    /// `input` is scanned, and the distinct roots are written to
    /// `config.output`. Nothing is written unless the whole input was read.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The suffix list cannot be opened or read
    /// - Reading `input` fails
    /// - The output file cannot be created or written
    pub fn run_extraction_from<R: BufRead>(config: &Config, input: R) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        info!("Loading TLDs from {}...", config.tld_file.display());
        let table = SuffixTable::load(&config.tld_file).context("Error loading TLDs")?;
        info!("Loaded {} TLDs.", table.len());

        info!("Extracting root domains from input...");
        let (roots, stats) = extract(input, &table, config.progress_interval)
            .context("Error extracting root domains")?;
        print_extraction_statistics(&stats, roots.len());

        info!("Saving root domains to {}...", config.output.display());
        let written = write_roots(&config.output, &roots).context("Error saving root domains")?;
        info!(
            "Root domains successfully saved to {}.",
            config.output.display()
        );

        Ok(ExtractionReport {
            suffixes_loaded: table.len(),
            lines_processed: stats.lines(),
            tokens_found: stats.tokens(),
            roots_found: written,
            output_path: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
