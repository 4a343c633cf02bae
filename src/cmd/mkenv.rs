// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::mkenv::MkenvArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::context::ProvisionContext;
use crate::pipeline::provision::provision;

/// Run the mkenv command.
///
/// # Errors
///
/// Returns an error if a path is unusable or any provisioning step fails.
pub async fn run_mkenv_command(args: &MkenvArgs, config: &Config) -> Result<()> {
    let ctx = ProvisionContext::new(&args.base_dir, &args.env_dir)?.with_dry_run(config.global.dry);
    provision(&ctx, config).await?;
    Ok(())
}
