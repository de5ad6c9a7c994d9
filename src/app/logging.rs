//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many lines have been read and how many distinct roots were found.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `lines` - Lines processed so far
/// * `roots` - Distinct root domains found so far
pub fn log_progress(start_time: Instant, lines: usize, roots: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Processed {} lines in {:.2} seconds (~{:.2} lines/sec). Root domains found: {}",
        lines,
        elapsed_secs,
        lines_per_sec(lines, elapsed_secs),
        roots
    );
}

/// Throughput in lines per second; 0.0 until any time has elapsed.
fn lines_per_sec(lines: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        lines as f64 / elapsed_secs
    } else {
        0.0
    }
}
