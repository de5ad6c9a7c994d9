// Shared test helpers for suffix lists and run configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use findroot::{Config, LogFormat, LogLevel};
use tempfile::TempDir;

/// Writes a suffix list into `dir` and returns its path.
pub fn write_tld_file(dir: &TempDir, suffixes: &[&str]) -> PathBuf {
    let path = dir.path().join("tld.txt");
    let mut content = suffixes.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("Failed to write TLD file");
    path
}

/// Builds a quiet config pointing at `tld_file` and `output`.
#[allow(dead_code)] // Not every test file builds a config
pub fn test_config(tld_file: &Path, output: &Path) -> Config {
    Config {
        output: output.to_path_buf(),
        tld_file: tld_file.to_path_buf(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        progress_interval: 0,
    }
}

/// Reads an output file back as a sorted list of lines.
#[allow(dead_code)] // Not every test file reads output back
pub fn read_roots(path: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(path).expect("Failed to read output file");
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.sort();
    lines
}
