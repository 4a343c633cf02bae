// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -c/--config FILE  <- Additional config files (can repeat)
//! --dry             <- Log steps without running them
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (falls back to --log-level)
//! --log-file FILE   <- Also log to FILE
//!
//! Precedence: CLI flags > DOCDIST_* env > --config > docdist.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;

/// Prefix of configuration environment variables (`DOCDIST_DIST__HTML_DIR`).
pub const ENV_PREFIX: &str = "DOCDIST";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Logs every step instead of performing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Does not load `docdist.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Creates the loader for all configuration sources these options name.
    #[must_use]
    pub fn config_loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        loader.with_env_prefix(ENV_PREFIX)
    }

    /// Applies the command-line flags as top-priority overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.to_string_lossy().into_owned())?;
        }

        if self.dry {
            loader = loader.set("global.dry", true)?;
        }

        Ok(loader)
    }

    /// Loads the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file is missing, a source cannot be parsed,
    /// or the merged configuration is invalid.
    pub fn load_config(&self) -> Result<Config> {
        self.apply_overrides(self.config_loader())?.build()
    }
}
