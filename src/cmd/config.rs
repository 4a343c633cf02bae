// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for docdist.

use anyhow::Context;

use crate::cli::OptionsArgs;
use crate::config::Config;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized as JSON.
pub fn run_options_command(args: &OptionsArgs, config: &Config) -> Result<()> {
    if args.json {
        let json =
            serde_json::to_string_pretty(config).context("failed to serialize configuration")?;
        println!("{json}");
    } else {
        for line in config.format_options() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Display loaded configuration files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
