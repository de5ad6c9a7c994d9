//! Suffix table loading and best-suffix selection.
//!
//! The table maps every known public suffix (`com`, `co.uk`, ...) to its label
//! depth, the number of dots it contains. It is built once at startup and is
//! read-only afterwards.
//!
//! Matching is a plain trailing-substring test (`token.ends_with(suffix)`), not
//! a label-boundary test. Entries are bucketed by their last byte so a lookup
//! only scans suffixes that could possibly end the token.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error_handling::SuffixTableError;

/// Number of `.` characters in a suffix.
pub fn depth(suffix: &str) -> usize {
    suffix.bytes().filter(|&b| b == b'.').count()
}

/// Lowercases `text` one character at a time using simple case mapping.
///
/// Full mapping turns `İ` into `i` plus a combining dot, which would split a
/// token in two; here every character maps to exactly one character.
pub fn simple_lowercase(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// A suffix selected for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    /// The matched suffix as stored in the table
    pub suffix: &'a str,
    /// Its label depth
    pub depth: usize,
}

/// Known public suffixes keyed by their lowercase, trimmed text.
#[derive(Debug, Default, Clone)]
pub struct SuffixTable {
    depths: HashMap<String, usize>,
    by_last_byte: HashMap<u8, Vec<(String, usize)>>,
}

impl SuffixTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a suffix table from a file, one suffix per line.
    ///
    /// # Errors
    ///
    /// Returns `SuffixTableError::Open` if the file cannot be opened and
    /// `SuffixTableError::Read` if a read fails part-way through.
    pub fn load(path: &Path) -> Result<Self, SuffixTableError> {
        let file = File::open(path).map_err(|source| SuffixTableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file)).map_err(|source| {
            SuffixTableError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            "Loaded {} suffixes from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Builds a table from any line source.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut table = Self::new();
        for line in reader.lines() {
            table.insert(&line?);
        }
        Ok(table)
    }

    /// Inserts one raw suffix line.
    ///
    /// Returns `false` when the line is blank or the suffix is already
    /// present; the table is left unchanged in both cases. A duplicate needs
    /// no update since its depth is a function of the string alone.
    pub fn insert(&mut self, raw: &str) -> bool {
        let suffix = simple_lowercase(raw.trim());
        let Some(&last) = suffix.as_bytes().last() else {
            return false;
        };
        if self.depths.contains_key(&suffix) {
            return false;
        }
        let label_depth = depth(&suffix);
        self.by_last_byte
            .entry(last)
            .or_default()
            .push((suffix.clone(), label_depth));
        self.depths.insert(suffix, label_depth);
        true
    }

    /// Depth of a stored suffix.
    pub fn get(&self, suffix: &str) -> Option<usize> {
        self.depths.get(suffix).copied()
    }

    /// Number of distinct suffixes.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Whether the table holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Iterates over `(suffix, depth)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.depths.iter().map(|(s, &d)| (s.as_str(), d))
    }

    /// Selects the best suffix for `token`.
    ///
    /// Every suffix the token ends with is a candidate. The deepest candidate
    /// wins; among equally deep candidates the longest string wins. Two
    /// distinct candidates of the same length cannot both end the same token,
    /// so the result is deterministic.
    pub fn best_match(&self, token: &str) -> Option<SuffixMatch<'_>> {
        let last = token.as_bytes().last()?;
        let candidates = self.by_last_byte.get(last)?;

        let mut best: Option<SuffixMatch<'_>> = None;
        for (suffix, depth) in candidates {
            if !token.ends_with(suffix.as_str()) {
                continue;
            }
            let depth = *depth;
            let better = match best {
                None => true,
                Some(current) => {
                    depth > current.depth
                        || (depth == current.depth && suffix.len() > current.suffix.len())
                }
            };
            if better {
                best = Some(SuffixMatch {
                    suffix: suffix.as_str(),
                    depth,
                });
            }
        }
        best
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for raw in iter {
            table.insert(raw.as_ref());
        }
        table
    }
}
