// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;
use std::path::PathBuf;

/// Arguments for the mkenv command.
#[derive(Debug, Clone, Args)]
pub struct MkenvArgs {
    /// Project root; the manifest is read from `<BASE_DIR>/doc/requirements.txt`.
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: PathBuf,

    /// Where to create the virtual environment.
    #[arg(value_name = "ENV_DIR")]
    pub env_dir: PathBuf,
}
