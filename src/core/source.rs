//! Environment table access.
//!
//! The resolver reads and erases variables through the [`EnvSource`] trait so
//! the same logic runs against the real process environment or an in-memory
//! table.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `EnvSource` trait
//! 2. Pass it to [`EnvResolver::with_source`](crate::EnvResolver::with_source)
//!
//! ## Example
//!
//! ```ignore
//! struct Overlay { /* ... */ }
//!
//! impl EnvSource for Overlay {
//!     fn get(&self, key: &str) -> Option<OsString> {
//!         // Check overrides, then the process environment
//!     }
//!     fn unset(&self, key: &str) {
//!         // Remove from both layers
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A string-keyed environment table.
///
/// Individual `get` and `unset` calls are expected to be atomic with respect
/// to each other. A `get` followed by `unset` is not.
pub trait EnvSource {
    /// Look up a variable.
    ///
    /// # Returns
    ///
    /// The raw value, or `None` if the variable is not set.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Remove a variable. Removing an absent variable is a no-op.
    fn unset(&self, key: &str);
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Names the platform can never hold: empty, or containing `=` or NUL.
    fn is_representable(key: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0'])
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        if !Self::is_representable(key) {
            return None;
        }
        std::env::var_os(key)
    }

    fn unset(&self, key: &str) {
        if Self::is_representable(key) {
            std::env::remove_var(key);
        }
    }
}

/// An in-memory environment table.
///
/// Useful in tests and for resolving values from a captured environment.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: Mutex<BTreeMap<String, OsString>>,
}

impl MapEnv {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from key-value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Mutex::new(vars),
        }
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars().insert(key.into(), value.into());
    }

    /// Whether a variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.vars().contains_key(key)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.vars().len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vars().is_empty()
    }

    fn vars(&self) -> MutexGuard<'_, BTreeMap<String, OsString>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars().get(key).cloned()
    }

    fn unset(&self, key: &str) {
        self.vars().remove(key);
    }
}
