// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Requirements manifest (`doc/requirements.txt`) validation.
//!
//! ```text
//! line                                   entry
//! ------------------------------------   -----------------
//! (blank) / # comment                    skipped
//! -r other.txt / --index-url ...         PipOption
//! ./wheels/x.whl / git+https://...       Reference
//! name @ https://...                     Reference
//! sphinx[docs]>=7,<9 ; python_version>"3"
//!   (trailing --hash=... allowed)        Requirement
//! anything else                          malformed
//! ```
//!
//! The manifest is only validated here; pip reads the file itself.

use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::{ProvisionError, display_path};

/// `name[extras] (op version)(, op version)* (; marker)?`
const REQUIREMENT_PATTERN: &str = r"(?x)
    ^
    [A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?
    \s*
    (?:\[\s*[A-Za-z0-9._-]+(?:\s*,\s*[A-Za-z0-9._-]+)*\s*\])?
    \s*
    (?:
        \(?\s*
        (?:===|~=|==|!=|<=|>=|<|>)\s*[A-Za-z0-9.*+!_-]+
        (?:\s*,\s*(?:===|~=|==|!=|<=|>=|<|>)\s*[A-Za-z0-9.*+!_-]+)*
        \s*\)?
    )?
    \s*
    (?:;.*)?
    $
";

/// `name[extras] @ url`
const DIRECT_REFERENCE_PATTERN: &str =
    r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?\s*(?:\[[^\]]*\])?\s*@\s*\S+";

const ARCHIVE_SUFFIXES: [&str; 5] = [".whl", ".tar.gz", ".tar.bz2", ".zip", ".tgz"];

/// One meaningful line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    /// A dependency specifier such as `sphinx>=7`.
    Requirement(String),
    /// An installer option line such as `-r base.txt`.
    PipOption(String),
    /// A URL, path or `name @ url` reference.
    Reference(String),
}

impl ManifestEntry {
    /// Returns the line text as pip will see it (comments removed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Requirement(s) | Self::PipOption(s) | Self::Reference(s) => s,
        }
    }
}

/// A validated requirements manifest.
#[derive(Debug, Clone)]
pub struct RequirementsManifest {
    path: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl RequirementsManifest {
    /// Reads and validates the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::DependencyInstall` if the file cannot be read
    /// or contains a malformed line.
    pub async fn load(path: &Path) -> Result<Self, ProvisionError> {
        let content = tokio::fs::read(path).await.map_err(|e| {
            let message = if e.kind() == std::io::ErrorKind::NotFound {
                "manifest not found".to_string()
            } else {
                format!("cannot read manifest: {e}")
            };
            malformed(path, message)
        })?;

        let content = String::from_utf8(content)
            .map_err(|_| malformed(path, "manifest is not valid UTF-8".to_string()))?;

        Self::parse(path, &content)
    }

    /// Validates manifest text; `path` is used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::DependencyInstall` naming the first
    /// malformed line.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ProvisionError> {
        let requirement = Regex::new(REQUIREMENT_PATTERN)
            .map_err(|e| malformed(path, format!("invalid requirement pattern: {e}")))?;
        let direct_reference = Regex::new(DIRECT_REFERENCE_PATTERN)
            .map_err(|e| malformed(path, format!("invalid reference pattern: {e}")))?;

        let mut entries = Vec::new();
        for (line_no, line) in logical_lines(content) {
            let line = strip_comment(&line).trim();
            if line.is_empty() {
                continue;
            }

            let entry = if line.starts_with('-') {
                ManifestEntry::PipOption(line.to_string())
            } else if is_reference(line) || direct_reference.is_match(line) {
                ManifestEntry::Reference(line.to_string())
            } else if requirement.is_match(specifier_part(line)) {
                ManifestEntry::Requirement(line.to_string())
            } else {
                return Err(malformed(
                    path,
                    format!("line {line_no}: '{line}' is not a requirement specifier"),
                ));
            };
            entries.push(entry);
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Returns the dependency specifiers, in file order.
    pub fn requirements(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            ManifestEntry::Requirement(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Returns true if no line names anything to install.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn malformed(path: &Path, message: String) -> ProvisionError {
    ProvisionError::DependencyInstall {
        manifest: display_path(path),
        message,
        source: None,
    }
}

/// Joins `\` continuations; yields each logical line with its first line number.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let (start, mut text) = pending.take().unwrap_or((idx + 1, String::new()));
        if let Some(head) = raw.strip_suffix('\\') {
            text.push_str(head);
            pending = Some((start, text));
        } else {
            text.push_str(raw);
            lines.push((start, text));
        }
    }
    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

/// Removes a full-line or whitespace-preceded trailing comment.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    line.char_indices()
        .find(|&(i, c)| c == '#' && i > 0 && line[..i].ends_with(char::is_whitespace))
        .map_or(line, |(i, _)| &line[..i])
}

/// The specifier without trailing per-requirement options (`--hash=...`).
fn specifier_part(line: &str) -> &str {
    line.find(" --").map_or(line, |i| line[..i].trim_end())
}

fn is_reference(line: &str) -> bool {
    line.contains("://")
        || line.starts_with(['.', '/', '~'])
        || line.starts_with("file:")
        || ARCHIVE_SUFFIXES.iter().any(|s| line.ends_with(s))
}
