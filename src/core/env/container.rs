// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable set handed to `ProcessBuilder::env`.

use super::types::EnvKey;
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// A complete set of environment variables for a child process.
///
/// A process started with an `Env` sees exactly these variables and nothing
/// inherited, so start from [`super::current_env`] to extend the parent's.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v))
                .collect(),
        }
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = EnvKey::new(key.into());
        // keep the spelling of an existing key on Windows
        self.vars.remove(&key);
        self.vars.insert(key, value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Prepends a directory to `PATH`.
    pub fn prepend_path(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        let dir = dir.as_ref().to_string_lossy().into_owned();
        let value = match self.get("PATH") {
            Some(current) if !current.is_empty() => format!("{dir}{PATH_SEPARATOR}{current}"),
            _ => dir,
        };
        self.set("PATH", value)
    }

    /// Makes a Python virtual environment the active one.
    ///
    /// Mirrors what the venv `activate` script does: `VIRTUAL_ENV` points at
    /// the environment, its script directory leads `PATH`, and `PYTHONHOME`
    /// is dropped.
    pub fn activate_venv(&mut self, venv: &Path, bin_dir: &Path) -> &mut Self {
        self.set("VIRTUAL_ENV", venv.to_string_lossy().into_owned());
        self.remove("PYTHONHOME");
        self.prepend_path(bin_dir)
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
