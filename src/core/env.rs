//! Explicit environment snapshot passed into the resolver.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Compiler override variable.
pub const CC_VAR: &str = "CC";

/// Existing C header search path list.
pub const C_INCLUDE_PATH_VAR: &str = "C_INCLUDE_PATH";

/// A captured set of environment variables.
///
/// The resolver never reads the real process environment; callers build a
/// `ProbeEnv` up front so tests can hand in arbitrary values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeEnv {
    vars: BTreeMap<String, String>,
}

impl ProbeEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        ProbeEnv::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        ProbeEnv::from_os_pairs(std::env::vars_os())
    }

    /// Build an environment from raw OS strings.
    ///
    /// Names or values that are not valid UTF-8 are converted lossily and
    /// logged, so a variable such as `C_INCLUDE_PATH` is never lost.
    pub fn from_os_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| {
                let key = k.to_string_lossy().into_owned();
                let value = match v.into_string() {
                    Ok(value) => value,
                    Err(raw) => {
                        let lossy = raw.to_string_lossy().into_owned();
                        tracing::warn!("{} is not valid UTF-8, using `{}`", key, lossy);
                        lossy
                    }
                };
                (key, value)
            })
            .collect();
        ProbeEnv { vars }
    }

    /// Build an environment from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ProbeEnv {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a variable.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Get a variable, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Get a variable only if it is set and non-empty.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
