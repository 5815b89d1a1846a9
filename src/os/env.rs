use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Owned snapshot of environmental variables.
///
/// Lookups never go back to the process, so an [`Env`] built with [`Env::new_from`] (or collected
/// from pairs) behaves like a pure key-value mapping. Use [`Env::new`] to capture the current
/// process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

/// Returned by [`Env::require`] when the variable is not set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("there is no environmental variable `${}`", .0.to_string_lossy())]
pub struct MissingVar(pub OsString);

impl Env {
    /// Capture [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `vars` as existing environmental variables.
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        Self { vars }
    }

    /// Set `key` to `value` in this snapshot. The process environment is not touched.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove `key` from this snapshot. The process environment is not touched.
    pub fn unset(&mut self, key: impl AsRef<OsStr>) {
        self.vars.remove(key.as_ref());
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// A variable that is set to the empty string is still [`Some`].
    ///
    /// # Examples
    /// ```rust
    /// use basedir::os::env::Env;
    ///
    /// let env: Env = [("FOO", "bar")].into_iter().collect();
    /// assert_eq!(env.get_os("FOO"), Some("bar".as_ref()));
    /// assert_eq!(env.get_os("BAZ"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Like [`Env::get_os`], but a missing variable is an error.
    pub fn require(&self, key: impl AsRef<OsStr>) -> Result<&OsStr, MissingVar> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| MissingVar(key.to_os_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
