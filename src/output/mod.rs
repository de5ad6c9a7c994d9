//! Result set output.
//!
//! Writes one root domain per line, newline-terminated. The set is written in
//! its own (sorted) iteration order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error_handling::OutputError;
use crate::extract::RootSet;

/// Writes `roots` to `path`, replacing any existing file.
///
/// Returns the number of domains written.
///
/// # Errors
///
/// Returns `OutputError::Create` if the file cannot be created and
/// `OutputError::Write` if writing or the final flush fails.
pub fn write_roots(path: &Path, roots: &RootSet) -> Result<usize, OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, roots).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    debug!("Wrote {} root domains to {}", roots.len(), path.display());
    Ok(roots.len())
}

fn write_lines<W: Write>(writer: &mut W, roots: &RootSet) -> std::io::Result<()> {
    for root in roots {
        writeln!(writer, "{root}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roots(items: &[&str]) -> RootSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_roots_one_per_line() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("root.txt");

        let written = write_roots(&path, &roots(&["foo.co.uk", "example.com"])).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let mut lines: Vec<&str> = content.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["example.com", "foo.co.uk"]);
    }

    #[test]
    fn test_write_empty_set_creates_empty_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("root.txt");
        assert_eq!(write_roots(&path, &RootSet::new()).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("root.txt");
        std::fs::write(&path, "stale.com\nold.net\nleftover.org\n").unwrap();

        write_roots(&path, &roots(&["fresh.com"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh.com\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails_on_create() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("no-such-dir").join("root.txt");
        let err = write_roots(&path, &roots(&["example.com"])).unwrap_err();
        assert!(matches!(err, OutputError::Create { .. }));
    }
}
