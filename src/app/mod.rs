//! Main application modules.
//!
//! Progress logging and end-of-run statistics used while a run is in flight.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_extraction_statistics;
