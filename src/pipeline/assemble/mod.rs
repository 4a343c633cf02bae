// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Distribution assembly (`docdist dist`).
//!
//! ```text
//! assemble(ctx, config)                  each step gates the next
//!   1. rm  <dist_root>/.gitignore        --> MissingArtifact / RemoveFailed
//!   2. rm -r <dist_root>/.github         --> MissingArtifact / RemoveFailed
//!   3. meson compile html  (cwd build_root, optional venv)
//!                                        --> DocBuild (incl. tool not found)
//!   4. copy_tree(<build_root>/html, <dist_root>/doc/html)
//!                                        --> Copy
//!   5. rm -r <dist_root>/doc/html/.doctrees
//!                                        absent: warn, else --> Cleanup
//! ```
//!
//! Nothing is rolled back: a failing step leaves the tree as the previous
//! steps made it.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::context::DistContext;
use super::provision::venv_bin_dir;
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{AssemblyError, display_path};
use crate::utility::fs::copy::{CopyStats, copy_tree};
use crate::utility::fs::remove::{remove_dir, remove_file};

/// What a successful assembly did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblySummary {
    /// Metadata entries removed from the staging root.
    pub stripped: Vec<PathBuf>,
    /// What the documentation copy created.
    pub copy: CopyStats,
    /// Whether a doctree cache was found and deleted.
    pub doctrees_removed: bool,
}

/// Turns the staging tree at `ctx.dist_root()` into a distributable tree.
///
/// # Errors
///
/// Returns the `AssemblyError` of the first failing step; later steps do
/// not run.
pub async fn assemble(ctx: &DistContext, config: &Config) -> Result<AssemblySummary, AssemblyError> {
    let mut summary = AssemblySummary::default();

    strip_metadata(ctx, config, &mut summary).await?;
    build_docs(ctx, config).await?;
    embed_html(ctx, config, &mut summary).await?;
    remove_doctrees(ctx, config, &mut summary).await?;

    info!(
        dist_root = %ctx.dist_root().display(),
        files = summary.copy.files,
        dirs = summary.copy.dirs,
        symlinks = summary.copy.symlinks,
        doctrees_removed = summary.doctrees_removed,
        "distribution tree assembled"
    );
    Ok(summary)
}

/// Steps 1 and 2: files first, then directories, each in configured order.
async fn strip_metadata(
    ctx: &DistContext,
    config: &Config,
    summary: &mut AssemblySummary,
) -> Result<(), AssemblyError> {
    let files = config.dist.strip_files.iter().map(|p| (p, false));
    let dirs = config.dist.strip_dirs.iter().map(|p| (p, true));

    for (relative, is_dir) in files.chain(dirs) {
        let path = ctx.dist_root().join(relative);
        let kind = if is_dir { "directory" } else { "file" };

        info!(path = %path.display(), "removing VCS metadata");

        if ctx.is_dry_run() {
            if path.symlink_metadata().is_err() {
                return Err(missing(kind, &path));
            }
            info!(path = %path.display(), "[DRY-RUN] would remove {kind}");
            continue;
        }

        let removed = if is_dir {
            remove_dir(&path).await
        } else {
            remove_file(&path).await
        }
        .map_err(|source| AssemblyError::RemoveFailed {
            path: display_path(&path),
            source,
        })?;

        if !removed {
            return Err(missing(kind, &path));
        }
        summary.stripped.push(relative.clone());
    }

    Ok(())
}

fn missing(kind: &'static str, path: &Path) -> AssemblyError {
    AssemblyError::MissingArtifact {
        kind,
        path: display_path(path),
    }
}

/// Step 3.
async fn build_docs(ctx: &DistContext, config: &Config) -> Result<(), AssemblyError> {
    let Some((program, args)) = config.dist.doc_build_command.split_first() else {
        return Err(AssemblyError::DocBuild {
            message: "no build command configured".to_string(),
            source: None,
        });
    };

    let not_found = |source| AssemblyError::DocBuild {
        message: format!("build tool '{program}' not found"),
        source: Some(source),
    };

    // resolved against the PATH the build will run with
    let build = match ctx.venv() {
        Some(venv) => {
            let mut env = current_env();
            env.activate_venv(venv, &venv_bin_dir(venv));
            ProcessBuilder::which_in(program, &env, ctx.build_root())
                .map_err(not_found)?
                .env(env)
        }
        None => ProcessBuilder::which(program).map_err(not_found)?,
    }
    .args(args)
    .cwd(ctx.build_root())
    .name("doc-build");

    info!(
        cmd = %build.command_line(),
        build_root = %ctx.build_root().display(),
        "building documentation"
    );

    if ctx.is_dry_run() {
        info!("[DRY-RUN] would run documentation build");
        return Ok(());
    }

    let command = build.command_line();
    build.run().await.map_err(|e| AssemblyError::DocBuild {
        message: format!("'{command}' failed"),
        source: Some(e),
    })?;

    let html = ctx.build_root().join(&config.dist.html_dir);
    if !html.is_dir() {
        return Err(AssemblyError::DocBuild {
            message: format!("'{command}' succeeded but '{}' was not produced", html.display()),
            source: None,
        });
    }

    Ok(())
}

/// Step 4.
async fn embed_html(
    ctx: &DistContext,
    config: &Config,
    summary: &mut AssemblySummary,
) -> Result<(), AssemblyError> {
    let from = ctx.build_root().join(&config.dist.html_dir);
    let to = ctx.dist_root().join(&config.dist.doc_dest);

    info!(from = %from.display(), to = %to.display(), "embedding HTML documentation");

    if ctx.is_dry_run() {
        info!("[DRY-RUN] would copy documentation tree");
        return Ok(());
    }

    summary.copy = copy_tree(&from, &to)
        .await
        .map_err(|source| AssemblyError::Copy {
            from: display_path(&from),
            to: display_path(&to),
            source,
        })?;

    Ok(())
}

/// Step 5.
async fn remove_doctrees(
    ctx: &DistContext,
    config: &Config,
    summary: &mut AssemblySummary,
) -> Result<(), AssemblyError> {
    let doctrees = ctx
        .dist_root()
        .join(&config.dist.doc_dest)
        .join(&config.dist.doctrees_dir);

    if ctx.is_dry_run() {
        info!(path = %doctrees.display(), "[DRY-RUN] would remove doctree cache");
        return Ok(());
    }

    let removed = remove_dir(&doctrees)
        .await
        .map_err(|source| AssemblyError::Cleanup {
            path: display_path(&doctrees),
            source,
        })?;

    if removed {
        info!(path = %doctrees.display(), "removed doctree cache");
    } else {
        warn!(path = %doctrees.display(), "no doctree cache to remove");
    }
    summary.doctrees_removed = removed;

    Ok(())
}
