//! Application initialization.
//!
//! Sets up process-wide state before a run starts. The suffix table itself is
//! loaded by the run layer so that a bad list aborts before any input is read.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
