//! Per-type parsing of raw environment values.
//!
//! [`FromEnv`] is implemented for a closed set of types. The static type of
//! the default handed to `value`/`secret` picks the parser, so asking for an
//! unsupported type fails to compile.
//!
//! | Type | Accepted input |
//! |------|----------------|
//! | `String` | anything, returned verbatim |
//! | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `i32`, `isize`, `i64` | base-10 integer with optional sign |
//! | `f64` | decimal or scientific notation within range, or `inf`/`nan` |
//! | `chrono::TimeDelta` | compact duration such as `1h30m` |
//! | `std::time::Duration` | compact duration, non-negative |
//! | `DateTime<Utc>`, `DateTime<FixedOffset>` | the configured timestamp format |

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use crate::core::config::ResolverConfig;
use crate::core::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::core::{duration, timestamp};
use crate::error::{ParseError, Result};

mod sealed {
    pub trait Sealed {}
}

/// A type that can be parsed from a raw environment value.
pub trait FromEnv: Sized + sealed::Sealed {
    /// Parse a raw environment value.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `raw` is not a valid representation of `Self`.
    /// The empty string is invalid for every type except `String`.
    fn from_env_str(raw: &str, config: &ResolverConfig) -> Result<Self>;
}

impl sealed::Sealed for String {}

impl FromEnv for String {
    fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
        Ok(raw.to_owned())
    }
}

impl sealed::Sealed for bool {}

impl FromEnv for bool {
    fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
        if TRUE_LITERALS.iter().any(|lit| *lit == raw) {
            Ok(true)
        } else if FALSE_LITERALS.iter().any(|lit| *lit == raw) {
            Ok(false)
        } else {
            Err(ParseError::Bool)
        }
    }
}

macro_rules! from_str_impl {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromEnv for $ty {
                fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
                    Ok(raw.parse::<$ty>()?)
                }
            }
        )*
    };
}

from_str_impl!(i32, isize, i64);

/// Spellings for which a non-finite result is intended rather than overflow.
const NON_FINITE_LITERALS: &[&str] = &["inf", "infinity", "nan"];

impl sealed::Sealed for f64 {}

impl FromEnv for f64 {
    fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
        let parsed = raw.parse::<f64>()?;
        if parsed.is_finite() {
            return Ok(parsed);
        }

        let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if NON_FINITE_LITERALS
            .iter()
            .any(|lit| lit.eq_ignore_ascii_case(unsigned))
        {
            Ok(parsed)
        } else {
            Err(ParseError::FloatRange)
        }
    }
}

impl sealed::Sealed for TimeDelta {}

impl FromEnv for TimeDelta {
    fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
        Ok(duration::parse_duration(raw)?)
    }
}

impl sealed::Sealed for std::time::Duration {}

impl FromEnv for std::time::Duration {
    fn from_env_str(raw: &str, _config: &ResolverConfig) -> Result<Self> {
        let nanos = duration::parse_nanos(raw)?;
        let nanos = u64::try_from(nanos).map_err(|_| ParseError::NegativeDuration)?;
        Ok(std::time::Duration::from_nanos(nanos))
    }
}

impl sealed::Sealed for DateTime<FixedOffset> {}

impl FromEnv for DateTime<FixedOffset> {
    fn from_env_str(raw: &str, config: &ResolverConfig) -> Result<Self> {
        Ok(timestamp::parse_timestamp(raw, &config.timestamp_format)?)
    }
}

impl sealed::Sealed for DateTime<Utc> {}

impl FromEnv for DateTime<Utc> {
    fn from_env_str(raw: &str, config: &ResolverConfig) -> Result<Self> {
        let ts = timestamp::parse_timestamp(raw, &config.timestamp_format)?;
        Ok(ts.with_timezone(&Utc))
    }
}
