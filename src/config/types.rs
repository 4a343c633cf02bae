// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for docdist.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, MkenvConfig, DistConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log each step instead of performing it.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// External tool locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Interpreter used to create virtual environments (`<python> -m venv`).
    pub python: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python3"),
        }
    }
}

/// Environment provisioning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MkenvConfig {
    /// Requirements manifest, relative to the project base directory.
    pub requirements: PathBuf,
}

impl Default for MkenvConfig {
    fn default() -> Self {
        Self {
            requirements: PathBuf::from("doc/requirements.txt"),
        }
    }
}

/// Distribution assembly options.
///
/// Every path here is relative: staging entries to the dist root, `html_dir`
/// to the build root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistConfig {
    /// Files that must exist in the staging tree and are deleted from it.
    pub strip_files: Vec<PathBuf>,
    /// Directories that must exist in the staging tree and are deleted from it.
    pub strip_dirs: Vec<PathBuf>,
    /// Documentation build command, program first.
    pub doc_build_command: Vec<String>,
    /// Rendered HTML output produced by the documentation build.
    pub html_dir: PathBuf,
    /// Where the rendered HTML lands inside the staging tree.
    pub doc_dest: PathBuf,
    /// Doctree cache directory name inside the copied HTML tree.
    pub doctrees_dir: PathBuf,
}

impl Default for DistConfig {
    fn default() -> Self {
        Self {
            strip_files: vec![PathBuf::from(".gitignore")],
            strip_dirs: vec![PathBuf::from(".github")],
            doc_build_command: vec!["meson".into(), "compile".into(), "html".into()],
            html_dir: PathBuf::from("html"),
            doc_dest: PathBuf::from("doc/html"),
            doctrees_dir: PathBuf::from(".doctrees"),
        }
    }
}

impl DistConfig {
    /// Validates the command and every relative path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty build command or a
    /// path that is empty, absolute, or climbs out with `..`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.doc_build_command.first() {
            Some(program) if !program.trim().is_empty() => {}
            _ => {
                return Err(invalid(
                    "dist",
                    "doc_build_command",
                    "must name at least a program",
                ));
            }
        }

        for path in &self.strip_files {
            validate_relative("dist", "strip_files", path)?;
        }
        for path in &self.strip_dirs {
            validate_relative("dist", "strip_dirs", path)?;
        }
        validate_relative("dist", "html_dir", &self.html_dir)?;
        validate_relative("dist", "doc_dest", &self.doc_dest)?;
        validate_relative("dist", "doctrees_dir", &self.doctrees_dir)?;
        Ok(())
    }
}

/// Ensures `path` is non-empty, relative and free of `..` components.
pub(super) fn validate_relative(section: &str, key: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(invalid(section, key, "path must not be empty"));
    }
    if path.is_absolute() || path.has_root() {
        return Err(invalid(
            section,
            key,
            &format!("'{}' must be relative", path.display()),
        ));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid(
            section,
            key,
            &format!("'{}' must not contain '..'", path.display()),
        ));
    }
    Ok(())
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
