// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tree copy that preserves symbolic links.
//!
//! ```text
//! copy_tree(src, dst)
//!   dst exists?          --> AlreadyExists
//!   staging = tempdir_in(dst.parent)
//!   walk_tree(src)       dirs, files, symlinks (not followed)
//!     Dir     --> create_dir
//!     File    --> copy
//!     Symlink --> read_link + symlink (same target text)
//!   rename(staging, dst) --> dst appears complete or not at all
//! ```

use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::walk::{EntryKind, walk_tree};
use crate::error::FsError;

/// Counts of what a tree copy created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub symlinks: usize,
}

/// Copies the directory `src` to the new path `dst`.
///
/// Symbolic links are recreated with their original target text rather
/// than dereferenced. Missing parents of `dst` are created. The copy is
/// staged next to `dst` and renamed into place, so a failure leaves no
/// partial `dst` behind.
///
/// # Errors
///
/// - `FsError::AlreadyExists` if `dst` exists (even as a dangling link).
/// - `FsError::NotFound` if `src` is not a directory.
/// - `FsError::IoError` for any other I/O failure.
pub async fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats, FsError> {
    if fs::symlink_metadata(dst).await.is_ok() {
        return Err(FsError::AlreadyExists(dst.display().to_string()));
    }

    let src_meta = fs::metadata(src)
        .await
        .map_err(|_| FsError::NotFound(src.display().to_string()))?;
    if !src_meta.is_dir() {
        return Err(FsError::NotFound(src.display().to_string()));
    }

    let parent = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .await
        .map_err(|e| FsError::io(parent, e))?;

    let staging = tempfile::Builder::new()
        .prefix(".docdist-staging-")
        .tempdir_in(parent)
        .map_err(|e| FsError::io(parent, e))?;

    let entries = walk_tree(src)?;
    let mut stats = CopyStats::default();

    for entry in &entries {
        let from = src.join(entry.relative());
        let to = staging.path().join(entry.relative());

        match entry.kind() {
            EntryKind::Dir => {
                fs::create_dir(&to).await.map_err(|e| FsError::io(&to, e))?;
                stats.dirs += 1;
            }
            EntryKind::File => {
                fs::copy(&from, &to)
                    .await
                    .map_err(|e| FsError::io(&from, e))?;
                stats.files += 1;
            }
            EntryKind::Symlink => {
                copy_symlink(&from, &to).await?;
                stats.symlinks += 1;
            }
        }
    }

    // tempdirs are created owner-only; the result should look like its source
    fs::set_permissions(staging.path(), src_meta.permissions())
        .await
        .map_err(|e| FsError::io(staging.path(), e))?;

    fs::rename(staging.path(), dst)
        .await
        .map_err(|e| FsError::io(dst, e))?;

    debug!(
        from = %src.display(),
        to = %dst.display(),
        files = stats.files,
        dirs = stats.dirs,
        symlinks = stats.symlinks,
        "copied tree"
    );

    Ok(stats)
}

/// Recreates the link at `from` as `to`, pointing at the same target text.
async fn copy_symlink(from: &Path, to: &Path) -> Result<(), FsError> {
    let target = fs::read_link(from)
        .await
        .map_err(|e| FsError::io(from, e))?;

    #[cfg(unix)]
    fs::symlink(&target, to)
        .await
        .map_err(|e| FsError::io(to, e))?;

    #[cfg(windows)]
    {
        let points_to_dir = fs::metadata(from).await.is_ok_and(|m| m.is_dir());
        if points_to_dir {
            fs::symlink_dir(&target, to).await
        } else {
            fs::symlink_file(&target, to).await
        }
        .map_err(|e| FsError::io(to, e))?;
    }

    Ok(())
}
