//! Typed resolution of environment variables.
//!
//! [`EnvResolver`] looks a variable up, parses it as the type of the
//! supplied default and falls back to the default when the variable is
//! absent or malformed. It never reports an error to the caller.
//!
//! There is no internal locking. In [`EnvResolver::secret`] the read and the
//! erase are two separate table operations, so concurrent callers touching
//! the same key must synchronize externally.

use std::ffi::OsString;

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::config::ResolverConfig;
use crate::core::parse::FromEnv;
use crate::core::source::{EnvSource, ProcessEnv};
use crate::error::ParseError;

/// Resolves typed values from an environment table.
#[derive(Debug, Clone, Default)]
pub struct EnvResolver<S = ProcessEnv> {
    source: S,
    config: ResolverConfig,
}

impl EnvResolver<ProcessEnv> {
    /// Resolver over the process environment with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver over the process environment with the given settings.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_source(ProcessEnv, config)
    }
}

impl<S: EnvSource> EnvResolver<S> {
    /// Resolver over an arbitrary environment table.
    pub fn with_source(source: S, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    /// Settings in effect.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The underlying environment table.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `key` as the type of `default`.
    ///
    /// Returns the parsed value if the variable is set and well-formed,
    /// otherwise `default`. The environment is not modified.
    ///
    /// # Example
    ///
    /// ```
    /// use osenv::{EnvResolver, MapEnv, ResolverConfig};
    ///
    /// let env = MapEnv::from_pairs([("WORKERS", "8"), ("VERBOSE", "maybe")]);
    /// let resolver = EnvResolver::with_source(env, ResolverConfig::default());
    ///
    /// assert_eq!(resolver.value("WORKERS", 1), 8);
    /// assert_eq!(resolver.value("VERBOSE", false), false);
    /// assert_eq!(resolver.value("MISSING", "none".to_string()), "none");
    /// ```
    pub fn value<T: FromEnv>(&self, key: &str, default: T) -> T {
        match self.source.get(key) {
            Some(raw) => self.resolve(key, raw, default),
            None => {
                trace!(key, "environment variable not set, using default");
                default
            }
        }
    }

    /// Resolve `key` like [`value`](Self::value), then erase it.
    ///
    /// The variable is removed whenever it was present, including when its
    /// value failed to parse and `default` was returned. An absent variable
    /// leaves the table untouched.
    pub fn secret<T: FromEnv>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.source.get(key) else {
            trace!(key, "secret variable not set, using default");
            return default;
        };

        let resolved = self.resolve(key, raw, default);
        self.source.unset(key);
        debug!(key, "erased secret variable from environment");
        resolved
    }

    fn resolve<T: FromEnv>(&self, key: &str, raw: OsString, default: T) -> T {
        let Some(raw) = into_utf8(raw) else {
            return fallback(key, ParseError::NotUnicode, default);
        };

        match T::from_env_str(&raw, &self.config) {
            Ok(parsed) => parsed,
            Err(err) => fallback(key, err, default),
        }
    }
}

/// Convert a raw value to UTF-8, wiping the bytes if the conversion fails.
fn into_utf8(raw: OsString) -> Option<Zeroizing<String>> {
    match raw.into_string() {
        Ok(raw) => Some(Zeroizing::new(raw)),
        Err(raw) => {
            drop(Zeroizing::new(raw.into_encoded_bytes()));
            None
        }
    }
}

fn fallback<T>(key: &str, err: ParseError, default: T) -> T {
    debug!(key, error = %err, "malformed environment value, using default");
    default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TimestampFormat;
    use crate::core::source::MapEnv;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn resolver(pairs: &[(&str, &str)]) -> EnvResolver<MapEnv> {
        EnvResolver::with_source(
            MapEnv::from_pairs(pairs.iter().copied()),
            ResolverConfig::default(),
        )
    }

    #[test]
    fn test_absent_returns_default() {
        let r = resolver(&[]);
        assert_eq!(r.value("BRISBANE", "Brisbane".to_string()), "Brisbane");
        assert!(r.value("FLAG", true));
        assert_eq!(r.value("N", 7i64), 7);
        assert_eq!(r.value("D", TimeDelta::seconds(5)), TimeDelta::seconds(5));
    }

    #[test]
    fn test_present_values_parse() {
        let r = resolver(&[
            ("TESTENVSTRING", "go test"),
            ("TESTENVTRUE", "true"),
            ("TEST1H", "1h"),
            ("RATIO", "0.25"),
            ("COUNT", "-3"),
        ]);
        assert_eq!(r.value("TESTENVSTRING", "someval".to_string()), "go test");
        assert!(r.value("TESTENVTRUE", false));
        assert_eq!(r.value("TEST1H", TimeDelta::hours(42)), TimeDelta::hours(1));
        assert_eq!(r.value("RATIO", 1.0), 0.25);
        assert_eq!(r.value("COUNT", 0i32), -3);
    }

    #[test]
    fn test_malformed_returns_default() {
        let r = resolver(&[("TESTENVINVALID", "invalid"), ("EMPTY", "")]);
        assert!(!r.value("TESTENVINVALID", false));
        assert!(r.value("TESTENVINVALID", true));
        assert_eq!(r.value("TESTENVINVALID", 9i32), 9);
        assert!(r.value("EMPTY", true));
        assert_eq!(r.value("EMPTY", 2.5), 2.5);
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let r = resolver(&[("EMPTY", "")]);
        assert_eq!(r.value("EMPTY", "default".to_string()), "");
    }

    #[test]
    fn test_value_does_not_modify_table() {
        let r = resolver(&[("KEEP", "1")]);
        assert_eq!(r.value("KEEP", 0i32), 1);
        assert!(r.source().contains("KEEP"));
    }

    #[test]
    fn test_timestamp_follows_config() {
        let env = MapEnv::from_pairs([("WHEN", "2021-03-26 13:47:34")]);
        let config = ResolverConfig::new()
            .with_timestamp_format(TimestampFormat::custom("%Y-%m-%d %H:%M:%S"));
        let r = EnvResolver::with_source(env, config);

        let default = Utc.with_ymd_and_hms(2019, 9, 16, 5, 6, 7).unwrap();
        let got: DateTime<Utc> = r.value("WHEN", default);
        assert_eq!(got, Utc.with_ymd_and_hms(2021, 3, 26, 13, 47, 34).unwrap());
    }

    #[test]
    fn test_secret_erases_after_read() {
        let r = resolver(&[("TEST_SECRET", "blah")]);
        assert_eq!(r.secret("TEST_SECRET", "fail".to_string()), "blah");
        assert!(!r.source().contains("TEST_SECRET"));
    }

    #[test]
    fn test_secret_erases_malformed() {
        let r = resolver(&[("TOKEN_TTL", "forever")]);
        assert_eq!(
            r.secret("TOKEN_TTL", TimeDelta::minutes(5)),
            TimeDelta::minutes(5)
        );
        assert!(!r.source().contains("TOKEN_TTL"));
    }

    #[test]
    fn test_secret_absent_leaves_table() {
        let r = resolver(&[("OTHER", "x")]);
        assert_eq!(r.secret("MISSING", 3i64), 3);
        assert_eq!(r.source().len(), 1);
        assert!(r.source().contains("OTHER"));
    }

    #[test]
    fn test_into_utf8() {
        let raw = into_utf8(OsString::from("s3cr3t")).unwrap();
        assert_eq!(raw.as_str(), "s3cr3t");
    }

    #[cfg(unix)]
    #[test]
    fn test_into_utf8_rejects_non_unicode() {
        use std::os::unix::ffi::OsStringExt;

        assert!(into_utf8(OsString::from_vec(vec![0xff, 0xfe])).is_none());
    }

    #[test]
    fn test_config_is_kept() {
        let config = ResolverConfig::new()
            .with_timestamp_format(TimestampFormat::custom("%Y-%m-%d"));
        let r = EnvResolver::with_source(MapEnv::new(), config.clone());
        assert_eq!(r.config(), &config);
        assert_eq!(EnvResolver::new().config(), &ResolverConfig::default());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_is_malformed() {
        use std::os::unix::ffi::OsStringExt;

        let env = MapEnv::new();
        env.set("BYTES", OsString::from_vec(vec![0x66, 0x6f, 0x80]));
        let r = EnvResolver::with_source(env, ResolverConfig::default());

        assert_eq!(r.value("BYTES", "fallback".to_string()), "fallback");
        assert_eq!(r.secret("BYTES", "fallback".to_string()), "fallback");
        assert!(!r.source().contains("BYTES"));
    }
}
