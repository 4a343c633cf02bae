// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of `docdist dist`.
//!
//! Normally run by `meson dist` through `meson.add_dist_script()`, which
//! exports both roots; the flags exist for running it by hand.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the dist command.
#[derive(Debug, Clone, Default, Args)]
pub struct DistArgs {
    /// Staging tree to assemble.
    #[arg(long = "dist-root", value_name = "DIR", env = "MESON_DIST_ROOT")]
    pub dist_root: Option<PathBuf>,

    /// Build tree the documentation is built in (default: current directory).
    #[arg(long = "build-root", value_name = "DIR", env = "MESON_BUILD_ROOT")]
    pub build_root: Option<PathBuf>,

    /// Virtual environment to activate for the documentation build.
    #[arg(long, value_name = "DIR")]
    pub venv: Option<PathBuf>,
}
