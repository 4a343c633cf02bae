// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment provisioning (`docdist mkenv`).
//!
//! ```text
//! provision(ctx, config)
//!   1. <python> -m venv <env_dir>            --> EnvironmentCreation
//!      installer present in env_dir?         --> EnvironmentCreation
//!   2. RequirementsManifest::load(manifest)  --> DependencyInstall
//!      <env_dir>/bin/pip install --force-reinstall -r <manifest>
//!                                            --> DependencyInstall
//! ```
//!
//! The installer is always the one inside the new environment.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::context::ProvisionContext;
use super::manifest::RequirementsManifest;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProvisionError, display_path};

/// Directory holding executables inside a virtual environment.
#[must_use]
pub fn venv_bin_dir(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts")
    } else {
        env_dir.join("bin")
    }
}

/// Path of the package installer inside a virtual environment.
#[must_use]
pub fn installer_path(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_bin_dir(env_dir).join("pip.exe")
    } else {
        venv_bin_dir(env_dir).join("pip")
    }
}

/// Arguments passed to the installer for `manifest`.
#[must_use]
pub fn install_args(manifest: &Path) -> Vec<String> {
    vec![
        "install".to_string(),
        "--force-reinstall".to_string(),
        "-r".to_string(),
        manifest.to_string_lossy().into_owned(),
    ]
}

/// Creates the environment and installs the manifest into it.
///
/// # Errors
///
/// - `ProvisionError::EnvironmentCreation` if the interpreter is missing or
///   fails, or leaves no installer behind.
/// - `ProvisionError::DependencyInstall` if the manifest is missing or
///   malformed, or the installer fails.
pub async fn provision(ctx: &ProvisionContext, config: &Config) -> Result<(), ProvisionError> {
    create_environment(ctx, config).await?;
    install_requirements(ctx, config).await
}

async fn create_environment(ctx: &ProvisionContext, config: &Config) -> Result<(), ProvisionError> {
    let env_dir = ctx.env_dir();
    let python = &config.tools.python;

    info!(path = %env_dir.display(), "creating virtual environment");

    let failed = |source| ProvisionError::EnvironmentCreation {
        path: display_path(env_dir),
        message: format!("'{} -m venv' failed", python.display()),
        source: Some(source),
    };

    let venv = ProcessBuilder::which(python)
        .map_err(failed)?
        .arg("-m")
        .arg("venv")
        .arg(env_dir)
        .name("venv");

    if ctx.is_dry_run() {
        info!(cmd = %venv.command_line(), "[DRY-RUN] would create virtual environment");
        return Ok(());
    }

    venv.run().await.map_err(failed)?;

    let installer = installer_path(env_dir);
    if !installer.is_file() {
        return Err(ProvisionError::EnvironmentCreation {
            path: display_path(env_dir),
            message: format!("installer '{}' is missing", installer.display()),
            source: None,
        });
    }

    debug!(installer = %installer.display(), "environment ready");
    Ok(())
}

async fn install_requirements(
    ctx: &ProvisionContext,
    config: &Config,
) -> Result<(), ProvisionError> {
    let manifest_path = ctx.base_dir().join(&config.mkenv.requirements);
    let manifest = RequirementsManifest::load(&manifest_path).await?;

    info!(
        manifest = %manifest.path().display(),
        requirements = manifest.requirements().count(),
        "installing documentation dependencies"
    );

    let pip = ProcessBuilder::new(installer_path(ctx.env_dir()))
        .args(install_args(manifest.path()))
        .name("pip");

    if ctx.is_dry_run() {
        info!(cmd = %pip.command_line(), "[DRY-RUN] would install dependencies");
        return Ok(());
    }

    pip.run()
        .await
        .map_err(|e| ProvisionError::DependencyInstall {
            manifest: display_path(manifest.path()),
            message: "installer failed".to_string(),
            source: Some(e),
        })?;

    info!(env = %ctx.env_dir().display(), "environment provisioned");
    Ok(())
}

#[cfg(test)]
mod tests;
