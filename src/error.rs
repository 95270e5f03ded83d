//! Error types for environment value parsing.
//!
//! These errors never reach callers of `value`/`secret`, which fall back to
//! the supplied default. They are surfaced by [`FromEnv::from_env_str`] and
//! logged on fallback. No variant carries the raw value, so they are safe to
//! log even when the variable held a secret.
//!
//! [`FromEnv::from_env_str`]: crate::core::parse::FromEnv::from_env_str

use thiserror::Error;

/// Reasons a raw environment value could not be parsed as the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid boolean literal")]
    Bool,

    #[error("invalid integer: {0}")]
    Int(#[from] std::num::ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] std::num::ParseFloatError),

    #[error("float out of range")]
    FloatRange,

    #[error("invalid duration: {0}")]
    Duration(#[from] DurationError),

    #[error("duration must not be negative")]
    NegativeDuration,

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("timestamp does not match the RFC 3339 layout")]
    TimestampLayout,

    #[error("value is not valid unicode")]
    NotUnicode,
}

/// Failures of the compact duration notation (`"1h30m"`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty input")]
    Empty,

    #[error("expected a number")]
    MissingNumber,

    #[error("missing unit")]
    MissingUnit,

    #[error("unknown unit")]
    UnknownUnit,

    #[error("out of range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, ParseError>;
