//! Configuration constants.

/// Suffix list read at startup, one TLD or second-level TLD per line.
pub const DEFAULT_TLD_FILE: &str = "tld.txt";

/// Output file written when `-o` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "root.txt";

/// Number of input lines between progress reports.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Domain-like token shape: a label, a dot, then any run of label characters and dots.
///
/// Matches are not anchored to word boundaries, so a token may start or end
/// wherever the surrounding characters fall outside this class.
pub const DOMAIN_TOKEN_PATTERN: &str = r"[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+";
