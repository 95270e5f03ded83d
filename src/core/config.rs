//! Resolver configuration.
//!
//! Carries the settings that change how raw values are parsed. The struct is
//! serde-friendly so host applications can embed it in their own config file:
//!
//! ```toml
//! timestamp_format = "rfc3339"
//! # or
//! timestamp_format = { custom = "%Y-%m-%d %H:%M:%S" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants;

/// Textual format used to parse timestamp values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// RFC 3339, e.g. `2021-03-26T13:47:34Z`.
    #[default]
    Rfc3339,
    /// A chrono `strftime`-style format string.
    ///
    /// Formats without an offset are read as UTC. Formats without a time of
    /// day are read as midnight UTC.
    Custom(String),
}

impl TimestampFormat {
    /// Create a custom format from a `strftime`-style string.
    pub fn custom(format: impl Into<String>) -> Self {
        Self::Custom(format.into())
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc3339 => f.write_str(constants::RFC3339),
            Self::Custom(format) => f.write_str(format),
        }
    }
}

/// Settings applied by an [`EnvResolver`](crate::EnvResolver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Format for timestamp values.
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

impl ResolverConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the timestamp format.
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}
