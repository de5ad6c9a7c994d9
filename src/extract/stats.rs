//! Extraction statistics.
//!
//! Counts input lines and the fate of every candidate token. The counters are
//! reporting only; they never influence which roots are collected.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// Why a candidate token contributed no root domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DiscardReason {
    /// The token ends with no known suffix.
    NoSuffix,
    /// The token has no label left above its matched suffix.
    NoLabelAboveSuffix,
}

impl DiscardReason {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscardReason::NoSuffix => "No known suffix",
            DiscardReason::NoLabelAboveSuffix => "No label above suffix",
        }
    }
}

/// Per-run counters.
#[derive(Debug, Clone)]
pub struct ExtractionStats {
    lines: usize,
    tokens: usize,
    roots_emitted: usize,
    discards: HashMap<DiscardReason, usize>,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut discards = HashMap::new();
        for reason in DiscardReason::iter() {
            discards.insert(reason, 0);
        }
        ExtractionStats {
            lines: 0,
            tokens: 0,
            roots_emitted: 0,
            discards,
        }
    }

    pub(crate) fn record_line(&mut self) {
        self.lines += 1;
    }

    pub(crate) fn record_root(&mut self) {
        self.tokens += 1;
        self.roots_emitted += 1;
    }

    pub(crate) fn record_discard(&mut self, reason: DiscardReason) {
        self.tokens += 1;
        *self.discards.entry(reason).or_insert(0) += 1;
    }

    /// Lines read from the input.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Candidate tokens matched by the domain pattern.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Tokens that produced a root domain, duplicates included.
    pub fn roots_emitted(&self) -> usize {
        self.roots_emitted
    }

    /// Tokens discarded for `reason`.
    pub fn discard_count(&self, reason: DiscardReason) -> usize {
        self.discards.get(&reason).copied().unwrap_or(0)
    }

    /// Tokens discarded for any reason.
    pub fn total_discards(&self) -> usize {
        self.discards.values().sum()
    }
}
