// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for docdist.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. docdist.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. DOCDIST_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOCDIST_GLOBAL__DRY=true          → global.dry = true
//! DOCDIST_TOOLS__PYTHON=python3.12  → tools.python = "python3.12"
//! DOCDIST_DIST__DOC_BUILD_COMMAND=ninja,html
//!                                   → dist.doc_build_command = ["ninja", "html"]
//! ```
//!
//! `MESON_DIST_ROOT` and `MESON_BUILD_ROOT` are not configuration: they are
//! read once by the CLI and turned into a `DistContext`.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{DistConfig, GlobalConfig, MkenvConfig, ToolsConfig};

/// Name of the optional project-local configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "docdist.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Environment provisioning.
    pub mkenv: MkenvConfig,
    /// Distribution assembly.
    pub dist: DistConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docdist::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("docdist.toml")
    ///     .with_env_prefix("DOCDIST")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for the first offending key.
    pub fn resolve_and_validate(&self) -> std::result::Result<(), ConfigError> {
        types::validate_relative("mkenv", "requirements", &self.mkenv.requirements)?;
        if self.tools.python.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "tools".to_string(),
                key: "python".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        self.dist.validate()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_mkenv_options(&mut options);
        self.format_dist_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "tools.python".into(),
            self.tools.python.display().to_string(),
        );
    }

    fn format_mkenv_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "mkenv.requirements".into(),
            self.mkenv.requirements.display().to_string(),
        );
    }

    fn format_dist_options(&self, options: &mut BTreeMap<String, String>) {
        let join = |paths: &[std::path::PathBuf]| {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        options.insert("dist.strip_files".into(), join(&self.dist.strip_files));
        options.insert("dist.strip_dirs".into(), join(&self.dist.strip_dirs));
        options.insert(
            "dist.doc_build_command".into(),
            self.dist.doc_build_command.join(" "),
        );
        options.insert(
            "dist.html_dir".into(),
            self.dist.html_dir.display().to_string(),
        );
        options.insert(
            "dist.doc_dest".into(),
            self.dist.doc_dest.display().to_string(),
        );
        options.insert(
            "dist.doctrees_dir".into(),
            self.dist.doctrees_dir.display().to_string(),
        );
    }
}
