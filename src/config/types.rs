//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_TLD_FILE, PROGRESS_INTERVAL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Only the output path is exposed on the command line. The remaining fields
/// keep their defaults when parsed from arguments and can be set directly by
/// library callers.
///
/// # Examples
///
/// ```no_run
/// use findroot::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output: PathBuf::from("roots.txt"),
///     tld_file: PathBuf::from("/usr/share/findroot/tld.txt"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "findroot",
    about = "Extracts root domains from text read on stdin",
    version
)]
pub struct Config {
    /// File to save the extracted root domains
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Suffix list, one TLD or second-level TLD per line
    #[arg(skip = PathBuf::from(DEFAULT_TLD_FILE))]
    pub tld_file: PathBuf,

    /// Log level
    #[arg(skip = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(skip = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Lines between progress reports (0 disables them)
    #[arg(skip = PROGRESS_INTERVAL)]
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            tld_file: PathBuf::from(DEFAULT_TLD_FILE),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
