// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable inputs of the two pipelines.
//!
//! Both contexts are built once at the CLI boundary. Paths are made
//! absolute against the current directory there, so later steps never
//! depend on where the process happens to be.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the variable `meson dist` sets to the staging root.
pub const DIST_ROOT_VAR: &str = "MESON_DIST_ROOT";

/// Name of the variable `meson dist` sets to the build directory.
pub const BUILD_ROOT_VAR: &str = "MESON_BUILD_ROOT";

fn absolute(name: &str, path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|e| ConfigError::Configuration {
        name: name.to_string(),
        message: format!("cannot resolve '{}': {e}", path.display()),
    })
}

fn require_dir(name: &str, path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::Configuration {
            name: name.to_string(),
            message: format!("'{}' is not an existing directory", path.display()),
        })
    }
}

/// Inputs of `mkenv`: where the project lives and where the environment goes.
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    base_dir: PathBuf,
    env_dir: PathBuf,
    dry_run: bool,
}

impl ProvisionContext {
    /// Creates a context from the two positional paths.
    ///
    /// Neither path has to exist yet: a missing manifest is reported by the
    /// install step, and `env_dir` is created by the interpreter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Configuration` if a path is empty or cannot be
    /// made absolute.
    pub fn new(base_dir: &Path, env_dir: &Path) -> Result<Self, ConfigError> {
        for (name, path) in [("BASE_DIR", base_dir), ("ENV_DIR", env_dir)] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Configuration {
                    name: name.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }

        Ok(Self {
            base_dir: absolute("BASE_DIR", base_dir)?,
            env_dir: absolute("ENV_DIR", env_dir)?,
            dry_run: false,
        })
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    /// Returns whether steps are only logged.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Inputs of `dist`: the staging tree and the build tree it is filled from.
#[derive(Debug, Clone)]
pub struct DistContext {
    dist_root: PathBuf,
    build_root: PathBuf,
    venv: Option<PathBuf>,
    dry_run: bool,
}

impl DistContext {
    /// Validates the staging and build roots.
    ///
    /// `dist_root` is the value of `MESON_DIST_ROOT`. `build_root` defaults
    /// to the current directory, which is where `meson dist` runs scripts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Configuration` if `dist_root` is unset, empty
    /// or not an existing directory, or if the build root is not one.
    pub fn new(dist_root: Option<&Path>, build_root: Option<&Path>) -> Result<Self, ConfigError> {
        let dist_root = match dist_root {
            Some(p) if !p.as_os_str().is_empty() => absolute(DIST_ROOT_VAR, p)?,
            _ => {
                return Err(ConfigError::Configuration {
                    name: DIST_ROOT_VAR.to_string(),
                    message: "not set; run from `meson dist` or pass --dist-root".to_string(),
                });
            }
        };
        require_dir(DIST_ROOT_VAR, &dist_root)?;

        let build_root = match build_root {
            Some(p) if !p.as_os_str().is_empty() => absolute(BUILD_ROOT_VAR, p)?,
            _ => std::env::current_dir().map_err(|e| ConfigError::Configuration {
                name: BUILD_ROOT_VAR.to_string(),
                message: format!("cannot determine current directory: {e}"),
            })?,
        };
        require_dir(BUILD_ROOT_VAR, &build_root)?;

        Ok(Self {
            dist_root,
            build_root,
            venv: None,
            dry_run: false,
        })
    }

    /// Sets the environment to activate for the documentation build.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Configuration` if `venv` is not a directory.
    pub fn with_venv(mut self, venv: Option<&Path>) -> Result<Self, ConfigError> {
        self.venv = match venv {
            Some(p) => {
                let p = absolute("--venv", p)?;
                require_dir("--venv", &p)?;
                Some(p)
            }
            None => None,
        };
        Ok(self)
    }

    #[must_use]
    pub fn dist_root(&self) -> &Path {
        &self.dist_root
    }

    #[must_use]
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    #[must_use]
    pub fn venv(&self) -> Option<&Path> {
        self.venv.as_deref()
    }

    /// Returns whether steps are only logged.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
