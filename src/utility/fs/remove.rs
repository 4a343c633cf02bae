// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::Path;
use tokio::fs;

/// Deletes a single file.
///
/// Returns `Ok(false)` when nothing exists at `path`.
///
/// # Errors
///
/// Returns the underlying I/O error for any failure other than absence,
/// including `path` being a directory.
pub async fn remove_file(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Deletes a directory and everything below it.
///
/// A symbolic link is unlinked; its target is left alone.
/// Returns `Ok(false)` when nothing exists at `path`.
///
/// # Errors
///
/// Returns the underlying I/O error for any failure other than absence,
/// including `path` being a regular file.
pub async fn remove_dir(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path).await {
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
        Ok(meta) if meta.file_type().is_symlink() => {
            unlink(path).await?;
            return Ok(true);
        }
        Ok(meta) if !meta.is_dir() => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a directory", path.display()),
            ));
        }
        Ok(_) => {}
    }

    fs::remove_dir_all(path).await?;
    Ok(true)
}

/// Removes a symbolic link itself.
async fn unlink(path: &Path) -> io::Result<()> {
    // directory links are directories to the Windows API
    #[cfg(windows)]
    {
        if fs::remove_dir(path).await.is_ok() {
            return Ok(());
        }
    }
    fs::remove_file(path).await
}
