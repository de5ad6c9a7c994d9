//! Error type definitions.
//!
//! Each stage of a run has its own error enum so callers can tell a bad suffix
//! list apart from a broken input stream or an unwritable output path.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while loading the suffix table.
///
/// A failed load never yields a partial table.
#[derive(Error, Debug)]
pub enum SuffixTableError {
    /// The suffix list could not be opened.
    #[error("failed to open TLD file {}: {source}", path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A read failed part-way through the suffix list.
    #[error("error reading TLD file {}: {source}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Errors raised while scanning the input stream.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Reading the input failed; no partial result set is returned.
    #[error("error reading input at line {line}: {source}")]
    Read {
        /// 1-based number of the line that could not be read
        line: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Errors raised while saving the result set.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output file could not be created.
    #[error("failed to create output file {}: {source}", path.display())]
    Create {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output file failed.
    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
