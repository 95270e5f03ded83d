//! Compact duration notation.
//!
//! Parses strings such as `"1h"`, `"35s"`, `"1h30m"`, `"1.5h"` or `"-300ms"`:
//! an optional sign followed by one or more `<number><unit>` pairs. Numbers
//! may carry a decimal fraction. Recognized units are `ns`, `us` (also `µs`
//! and `μs`), `ms`, `s`, `m` and `h`. The bare string `"0"` is zero and needs
//! no unit. The total must fit in a signed 64-bit count of nanoseconds.

use chrono::TimeDelta;

use crate::core::constants::DURATION_UNITS;
use crate::error::DurationError;

/// Largest magnitude a negative duration may have, in nanoseconds.
const NEGATIVE_LIMIT: u64 = 1 << 63;

/// Fraction digits beyond this many cannot change the result.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration in compact notation.
///
/// # Errors
///
/// Returns `DurationError` if the input is empty, a number or unit is
/// missing, the unit is unknown, or the total overflows.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
///
/// let d = osenv::parse_duration("1h30m").unwrap();
/// assert_eq!(d, TimeDelta::minutes(90));
/// ```
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    parse_nanos(input).map(TimeDelta::nanoseconds)
}

/// Parse a duration in compact notation into signed nanoseconds.
pub(crate) fn parse_nanos(input: &str) -> Result<i64, DurationError> {
    let (negative, mut rest) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    if rest == "0" {
        return Ok(0);
    }
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    if rest.is_empty() {
        return Err(DurationError::MissingNumber);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::MissingNumber);
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let scale = unit_nanos(unit).ok_or(DurationError::UnknownUnit)?;

        let mut nanos = leading_int(whole)
            .and_then(|v| v.checked_mul(scale))
            .ok_or(DurationError::Overflow)?;
        if !fraction.is_empty() {
            nanos = nanos
                .checked_add(fraction_nanos(fraction, scale))
                .ok_or(DurationError::Overflow)?;
        }
        total = total.checked_add(nanos).ok_or(DurationError::Overflow)?;
        rest = tail;
    }

    if negative {
        if total > NEGATIVE_LIMIT {
            return Err(DurationError::Overflow);
        }
        // 1 << 63 reinterprets as i64::MIN, which is already negative.
        Ok((total as i64).wrapping_neg())
    } else {
        i64::try_from(total).map_err(|_| DurationError::Overflow)
    }
}

/// Split off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

fn leading_int(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    let value = leading_int(digits).unwrap_or(0);
    let denominator = 10f64.powi(digits.len() as i32);
    (value as f64 * (scale as f64 / denominator)) as u64
}

fn unit_nanos(unit: &str) -> Option<u64> {
    DURATION_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, nanos)| *nanos)
}
