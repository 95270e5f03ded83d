//! Test support utilities for osenv integration tests.
//!
//! Every test gets its own variable namespace so tests can mutate the real
//! process environment and still run in parallel.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::cell::RefCell;

/// A namespace of process environment variables owned by one test.
///
/// Variables set through it are removed when it is dropped.
pub struct Vars {
    prefix: String,
    keys: RefCell<Vec<String>>,
}

impl Vars {
    /// Create a fresh namespace.
    pub fn new() -> Self {
        let id = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
        Self {
            prefix: format!("OSENV_TEST_{id}_"),
            keys: RefCell::new(Vec::new()),
        }
    }

    /// Full variable name for `name` within this namespace.
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Set `name` in the process environment and return its full key.
    pub fn set(&self, name: &str, value: &str) -> String {
        let key = self.key(name);
        std::env::set_var(&key, value);
        self.keys.borrow_mut().push(key.clone());
        key
    }

    /// Set every pair in `pairs`.
    pub fn set_all(&self, pairs: &[(&str, &str)]) {
        for (name, value) in pairs {
            self.set(name, value);
        }
    }

    /// Whether `name` is currently present in the process environment.
    pub fn is_set(&self, name: &str) -> bool {
        std::env::var_os(self.key(name)).is_some()
    }
}

impl Drop for Vars {
    fn drop(&mut self) {
        for key in self.keys.borrow().iter() {
            std::env::remove_var(key);
        }
    }
}
