//! Constants used throughout osenv.
//!
//! Centralizes format strings and unit tables.

/// Name of the default timestamp format in configuration files.
pub const RFC3339: &str = "rfc3339";

/// Nanoseconds per duration unit, keyed by the unit suffix.
///
/// Both the micro sign (U+00B5) and the Greek mu (U+03BC) spell microseconds.
pub const DURATION_UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Literals accepted as boolean `true`.
pub const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Literals accepted as boolean `false`.
pub const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];
