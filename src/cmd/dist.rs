// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::debug;

use crate::cli::dist::DistArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::assemble::assemble;
use crate::pipeline::context::DistContext;

/// Run the dist command.
///
/// The staging root is validated before anything on disk is touched.
///
/// # Errors
///
/// Returns a configuration error if the roots are unusable, or the error of
/// the first failing assembly step.
pub async fn run_dist_command(args: &DistArgs, config: &Config) -> Result<()> {
    let ctx = DistContext::new(args.dist_root.as_deref(), args.build_root.as_deref())?
        .with_venv(args.venv.as_deref())?
        .with_dry_run(config.global.dry);

    let summary = assemble(&ctx, config).await?;
    debug!(?summary, "dist finished");
    Ok(())
}
