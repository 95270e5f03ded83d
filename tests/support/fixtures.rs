//! Test fixtures and constants.

use chrono::{DateTime, TimeZone, Utc};

/// Default date used by timestamp tests.
pub fn default_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 9, 16, 5, 6, 7).unwrap()
}

/// Boolean values written to the environment for fallback tests.
pub const BOOL_VARS: &[(&str, &str)] = &[
    ("TESTENVTRUE", "true"),
    ("TESTENVFALSE", "false"),
    ("TESTENVINVALID", "invalid"),
    ("TESTENVNOTSET", ""),
];

/// Duration values written to the environment.
pub const DURATION_VARS: &[(&str, &str)] = &[
    ("TEST1H", "1h"),
    ("TEST35S", "35s"),
    ("TESTDURINVALID", "some value"),
];

/// Timestamp values written to the environment.
pub const TIME_VARS: &[(&str, &str)] = &[
    ("TESTTIME", "2021-03-26T13:47:34Z"),
    ("INVALIDTIME", "xxxx-xx-xx"),
    ("UNSUPPORTEDTIME", "2021-03-26 13:47:34Z"),
    ("LOWERCASETIME", "2021-03-26t13:47:34z"),
];
