//! Root domain extraction.
//!
//! Scans text line by line, pulls out domain-like tokens and reduces each one
//! to its registrable root: the matched public suffix plus exactly one label
//! above it. Roots are collected into a set for the whole run.

mod stats;

use std::collections::BTreeSet;
use std::io::BufRead;
use std::sync::LazyLock;
use std::time::Instant;

use log::trace;
use regex::Regex;

use crate::app::log_progress;
use crate::config::DOMAIN_TOKEN_PATTERN;
use crate::error_handling::ExtractionError;
use crate::suffix::{simple_lowercase, SuffixTable};

pub use stats::{DiscardReason, ExtractionStats};

/// Distinct root domains found during a run.
pub type RootSet = BTreeSet<String>;

static DOMAIN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOMAIN_TOKEN_PATTERN).expect("domain token pattern is a valid regex")
});

/// Outcome of reducing a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The registrable root of the token.
    Root(String),
    /// The token contributes nothing.
    Discarded(DiscardReason),
}

/// Finds the non-overlapping domain-like tokens of `line`, left to right.
///
/// The line is matched as given; callers lowercase it first.
pub fn domain_tokens(line: &str) -> impl Iterator<Item = &str> {
    DOMAIN_TOKEN.find_iter(line).map(|m| m.as_str())
}

/// Reduces `token` to its root domain using the best matching suffix.
///
/// A suffix of depth `D` spans `D + 1` labels, so the root is the last
/// `D + 2` labels of the token: the suffix plus the one label registered
/// under it. A token with no label left above the suffix is discarded.
pub fn resolve_token(table: &SuffixTable, token: &str) -> Resolution {
    let Some(matched) = table.best_match(token) else {
        return Resolution::Discarded(DiscardReason::NoSuffix);
    };

    let labels: Vec<&str> = token.split('.').collect();
    let keep = matched.depth + 2;
    if labels.len() < keep {
        return Resolution::Discarded(DiscardReason::NoLabelAboveSuffix);
    }
    Resolution::Root(labels[labels.len() - keep..].join("."))
}

/// Convenience wrapper around [`resolve_token`].
pub fn root_domain(table: &SuffixTable, token: &str) -> Option<String> {
    match resolve_token(table, token) {
        Resolution::Root(root) => Some(root),
        Resolution::Discarded(_) => None,
    }
}

/// Accumulates root domains over a stream of lines.
pub struct RootExtractor<'a> {
    table: &'a SuffixTable,
    roots: RootSet,
    stats: ExtractionStats,
    progress_interval: usize,
    start_time: Instant,
}

impl<'a> RootExtractor<'a> {
    /// Creates an extractor without progress reporting.
    pub fn new(table: &'a SuffixTable) -> Self {
        Self {
            table,
            roots: RootSet::new(),
            stats: ExtractionStats::new(),
            progress_interval: 0,
            start_time: Instant::now(),
        }
    }

    /// Logs progress every `interval` lines; 0 disables it.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Lowercases `line` and adds the roots of all its tokens.
    pub fn process_line(&mut self, line: &str) {
        let line = simple_lowercase(line);
        for token in domain_tokens(&line) {
            match resolve_token(self.table, token) {
                Resolution::Root(root) => {
                    self.stats.record_root();
                    self.roots.insert(root);
                }
                Resolution::Discarded(reason) => {
                    trace!("Discarding token {token}: {}", reason.as_str());
                    self.stats.record_discard(reason);
                }
            }
        }

        self.stats.record_line();
        if self.progress_interval > 0 && self.stats.lines() % self.progress_interval == 0 {
            log_progress(self.start_time, self.stats.lines(), self.roots.len());
        }
    }

    /// Roots collected so far.
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Hands over the collected roots and counters.
    pub fn finish(self) -> (RootSet, ExtractionStats) {
        (self.roots, self.stats)
    }
}

/// Reads `reader` to the end and collects the root domains of every line.
///
/// Lines are split on `\n`; a trailing `\r` is dropped and invalid UTF-8 is
/// replaced, which cannot change the result since tokens are ASCII-only.
///
/// # Errors
///
/// Returns `ExtractionError::Read` on the first read failure. Nothing
/// collected before the failure is returned.
pub fn extract<R: BufRead>(
    reader: R,
    table: &SuffixTable,
    progress_interval: usize,
) -> Result<(RootSet, ExtractionStats), ExtractionError> {
    let mut extractor = RootExtractor::new(table).with_progress_interval(progress_interval);

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let mut bytes = chunk.map_err(|source| ExtractionError::Read {
            line: index + 1,
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        extractor.process_line(&String::from_utf8_lossy(&bytes));
    }

    Ok(extractor.finish())
}
