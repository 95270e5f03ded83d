//! Timestamp parsing.

use chrono::format::ParseErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::config::TimestampFormat;
use crate::error::{ParseError, Result};

/// Byte offset of the date-time separator in an RFC 3339 timestamp.
const SEPARATOR_INDEX: usize = 10;

/// Parse `raw` as a calendar timestamp using `format`.
///
/// Custom formats that carry no offset are read as UTC, and formats that
/// carry no time of day are read as midnight UTC.
pub(crate) fn parse_timestamp(raw: &str, format: &TimestampFormat) -> Result<DateTime<FixedOffset>> {
    match format {
        TimestampFormat::Rfc3339 => {
            if !is_strict_rfc3339(raw) {
                return Err(ParseError::TimestampLayout);
            }
            Ok(DateTime::parse_from_rfc3339(raw)?)
        }
        TimestampFormat::Custom(format) => Ok(parse_custom(raw, format)?),
    }
}

/// chrono also takes a space or a lowercase `t` as the date-time separator
/// and a lowercase `z` for UTC. Only the uppercase forms are accepted here.
fn is_strict_rfc3339(raw: &str) -> bool {
    raw.as_bytes().get(SEPARATOR_INDEX) == Some(&b'T') && !raw.ends_with('z')
}

fn parse_custom(
    raw: &str,
    format: &str,
) -> std::result::Result<DateTime<FixedOffset>, chrono::ParseError> {
    match DateTime::parse_from_str(raw, format) {
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {}
        result => return result,
    }

    let naive = match NaiveDateTime::parse_from_str(raw, format) {
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            NaiveDate::parse_from_str(raw, format)?.and_time(NaiveTime::default())
        }
        result => result?,
    };
    Ok(naive.and_utc().fixed_offset())
}
