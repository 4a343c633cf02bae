// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for docdist using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! docdist [global options] <command>
//! mkenv <BASE_DIR> <ENV_DIR>
//! dist [--dist-root DIR] [--build-root DIR] [--venv DIR]
//! options [--json]
//! configs
//! version
//! ```

pub mod dist;
pub mod global;
pub mod mkenv;

#[cfg(test)]
mod tests;

use crate::cli::dist::DistArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::mkenv::MkenvArgs;
use clap::{Args, Parser, Subcommand};

/// Documentation environment and dist tooling.
#[derive(Debug, Parser)]
#[command(
    name = "docdist",
    author,
    version,
    about = "Documentation environment and dist tooling",
    long_about = "docdist Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Provisions the Python environment the documentation is built\n\
                  with, and turns a `meson dist` staging tree into a release\n\
                  tree with the rendered HTML documentation embedded.",
    after_help = "CONFIGURATION:\n\n\
                  docdist reads `docdist.toml` from the current directory if it\n\
                  exists (disable with --no-default-config), then every file given\n\
                  with --config in order, then DOCDIST_<SECTION>__<KEY> environment\n\
                  variables. Command-line flags override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options(OptionsArgs),

    /// Lists the configuration files that were loaded.
    Configs,

    /// Creates a virtual environment and installs the documentation requirements.
    Mkenv(MkenvArgs),

    /// Assembles a distribution tree (run from `meson dist`).
    Dist(DistArgs),
}

/// Arguments for the options command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
