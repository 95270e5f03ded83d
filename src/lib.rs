//! osenv - Typed access to environment variables.
//!
//! Look a variable up, parse it as the type of a default, and fall back to
//! that default when the variable is absent or malformed:
//!
//! ```
//! use chrono::TimeDelta;
//!
//! let workers = osenv::value("OSENV_DOC_WORKERS", 4);
//! let timeout = osenv::value("OSENV_DOC_TIMEOUT", TimeDelta::seconds(30));
//! let token = osenv::secret("OSENV_DOC_TOKEN", String::new());
//! # assert_eq!(workers, 4);
//! # assert_eq!(timeout, TimeDelta::seconds(30));
//! # assert!(token.is_empty());
//! ```
//!
//! `secret` also removes the variable from the environment once it has been
//! read, so other code in the process can no longer see it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/
//! │   ├── config        # ResolverConfig, timestamp format
//! │   ├── constants     # Unit tables and literals
//! │   ├── duration      # Compact duration notation ("1h30m")
//! │   ├── parse         # FromEnv: the supported types
//! │   ├── resolver      # EnvResolver: value / secret
//! │   ├── source        # EnvSource trait, ProcessEnv, MapEnv
//! │   └── timestamp     # Timestamp parsing
//! └── error             # ParseError
//! ```
//!
//! # Supported types
//!
//! `String`, `bool`, `i32`, `isize`, `i64`, `f64`, `chrono::TimeDelta`,
//! `std::time::Duration`, `chrono::DateTime<Utc>` and
//! `chrono::DateTime<FixedOffset>`. Any other default type is a compile
//! error.
//!
//! # Concurrency
//!
//! There is no internal locking. `secret` reads and then erases in two
//! steps, so concurrent callers on the same key need external
//! synchronization.

pub mod core;
pub mod error;

pub use crate::core::config::{ResolverConfig, TimestampFormat};
pub use crate::core::duration::parse_duration;
pub use crate::core::parse::FromEnv;
pub use crate::core::resolver::EnvResolver;
pub use crate::core::source::{EnvSource, MapEnv, ProcessEnv};
pub use crate::error::{DurationError, ParseError};

/// Resolve `key` from the process environment as the type of `default`.
///
/// Uses the default configuration (RFC 3339 timestamps). See
/// [`EnvResolver::value`].
pub fn value<T: FromEnv>(key: &str, default: T) -> T {
    EnvResolver::new().value(key, default)
}

/// Resolve `key` from the process environment, then remove it.
///
/// Uses the default configuration (RFC 3339 timestamps). See
/// [`EnvResolver::secret`].
pub fn secret<T: FromEnv>(key: &str, default: T) -> T {
    EnvResolver::new().secret(key, default)
}
