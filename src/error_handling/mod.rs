//! Error handling.
//!
//! This module provides one error type per stage of a run:
//! - [`SuffixTableError`] for loading the suffix list
//! - [`ExtractionError`] for reading the input stream
//! - [`OutputError`] for writing the result set
//!
//! All of them are fatal; the run layer adds context with `anyhow` and the
//! binary exits non-zero.

mod types;

// Re-export public API
pub use types::{ExtractionError, InitializationError, OutputError, SuffixTableError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_suffix_table_error_mentions_path() {
        let err = SuffixTableError::Open {
            path: PathBuf::from("missing/tld.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/tld.txt"), "got: {msg}");
        assert!(msg.contains("not found"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_extraction_error_mentions_line() {
        let err = ExtractionError::Read {
            line: 42,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert_eq!(
            err.to_string(),
            "error reading input at line 42: pipe closed"
        );
    }

    #[test]
    fn test_output_error_variants() {
        let create = OutputError::Create {
            path: PathBuf::from("out/root.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let write = OutputError::Write {
            path: PathBuf::from("out/root.txt"),
            source: io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        };
        assert!(create.to_string().starts_with("failed to create output file"));
        assert!(write.to_string().starts_with("failed to write output file"));
    }
}
