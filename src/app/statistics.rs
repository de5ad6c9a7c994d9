//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::extract::{DiscardReason, ExtractionStats};

/// Logs the end-of-extraction summary.
///
/// Discard counts are only listed when at least one token was discarded.
pub fn print_extraction_statistics(stats: &ExtractionStats, distinct_roots: usize) {
    info!(
        "Processing complete. Read {} lines, matched {} candidate tokens, found {} root domains.",
        stats.lines(),
        stats.tokens(),
        distinct_roots
    );

    let total_discards = stats.total_discards();
    if total_discards > 0 {
        info!("Discarded Tokens ({} total):", total_discards);
        for reason in DiscardReason::iter() {
            let count = stats.discard_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_extraction_statistics_empty() {
        // Should not panic with nothing recorded
        print_extraction_statistics(&ExtractionStats::new(), 0);
    }

    #[test]
    fn test_print_extraction_statistics_with_discards() {
        let mut stats = ExtractionStats::new();
        stats.record_line();
        stats.record_root();
        stats.record_discard(DiscardReason::NoSuffix);
        stats.record_discard(DiscardReason::NoLabelAboveSuffix);
        print_extraction_statistics(&stats, 1);
    }
}
