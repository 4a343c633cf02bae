// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::FsError;

/// What a walked entry is, without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
}

/// One entry below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the walk root.
    relative: PathBuf,
    kind: EntryKind,
}

impl TreeEntry {
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Lists everything below `root` in a stable, parent-first order.
///
/// Hidden files and ignore files are not filtered: a rendered HTML tree is
/// taken as-is. Symbolic links are reported, never followed.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `root` is not a directory, or
/// `FsError::IoError` if any entry cannot be read.
pub fn walk_tree(root: &Path) -> Result<Vec<TreeEntry>, FsError> {
    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = result.map_err(|e| {
            let message = e.to_string();
            FsError::io(
                root,
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(message)),
            )
        })?;

        if entry.depth() == 0 {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        let kind = match entry.file_type() {
            Some(ft) if ft.is_symlink() => EntryKind::Symlink,
            Some(ft) if ft.is_dir() => EntryKind::Dir,
            _ => EntryKind::File,
        };

        trace!(path = %relative.display(), ?kind, "walked");
        entries.push(TreeEntry {
            relative: relative.to_path_buf(),
            kind,
        });
    }

    Ok(entries)
}
