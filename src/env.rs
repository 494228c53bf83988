//! Environment variable access for the config layer.
//!
//! [`Env::real()`] reads the process environment. [`Env::from_pairs()`]
//! serves a fixed set of values, so config tests never touch
//! [`std::env::set_var`].

use std::collections::HashMap;
use std::str::FromStr;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Serve only the given key-value pairs.
    pub fn from_pairs(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up a variable. Empty and whitespace-only values count as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Look up and parse a variable.
    ///
    /// Unparseable values are reported with a warning and treated as unset.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.get(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(variable = name, value = %raw, "ignoring invalid environment value");
                None
            }
        }
    }
}
