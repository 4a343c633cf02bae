// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Error (command handlers, main)
//!     ^
//!     | ? (typed errors stay downcastable)
//!     |
//!   Provision EnvironmentCreation, DependencyInstall
//!   Assembly  MissingArtifact, RemoveFailed, DocBuild, Copy, Cleanup
//!   Config    ReadError, ParseError, InvalidValue, Configuration
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit, Io
//!   Fs        NotFound, AlreadyExists, IoError
//! ```
//!
//! Every failure is fatal. Step errors carry the path or command line
//! they were working on and keep the lower-level error as `source`, so
//! `{:#}` formatting shows the whole chain.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Formats a path for error messages.
pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}

// --- Provision Errors ---

/// Environment provisioning errors.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The isolated environment could not be created.
    #[error("failed to create environment at '{path}': {message}")]
    EnvironmentCreation {
        path: String,
        message: String,
        #[source]
        source: Option<ProcessError>,
    },

    /// Dependencies could not be installed into the environment.
    #[error("failed to install dependencies from '{manifest}': {message}")]
    DependencyInstall {
        manifest: String,
        message: String,
        #[source]
        source: Option<ProcessError>,
    },
}

// --- Assembly Errors ---

/// Distribution assembly errors.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A file or directory the staging tree must contain is absent.
    #[error("expected {kind} '{path}' in staging tree is missing")]
    MissingArtifact { kind: &'static str, path: String },

    /// Removing a required staging artifact failed.
    #[error("failed to remove '{path}'")]
    RemoveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The documentation build command failed.
    #[error("documentation build failed: {message}")]
    DocBuild {
        message: String,
        #[source]
        source: Option<ProcessError>,
    },

    /// Copying the rendered documentation into the staging tree failed.
    #[error("failed to copy '{from}' to '{to}'")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: FsError,
    },

    /// The doctree cache exists but could not be deleted.
    #[error("failed to clean up '{path}'")]
    Cleanup {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Required runtime configuration (environment variable or argument) is
    /// missing or unusable.
    #[error("{name}: {message}")]
    Configuration { name: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a code outside the success set.
    #[error("process '{command}' exited with code {code}{}", stderr_suffix(.stderr_tail))]
    NonZeroExit {
        command: String,
        code: i32,
        stderr_tail: Vec<String>,
    },

    /// Waiting on the process or feeding its stdin failed.
    #[error("i/o error while running '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn stderr_suffix(tail: &[String]) -> String {
    if tail.is_empty() {
        String::new()
    } else {
        format!("\n  stderr: {}", tail.join("\n  stderr: "))
    }
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Destination already exists.
    #[error("destination already exists: {0}")]
    AlreadyExists(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it occurred on.
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: display_path(path),
            source,
        }
    }
}
