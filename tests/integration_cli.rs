// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use docdist::cli::global::GlobalOptions;
use docdist::cli::{Cli, Command};
use std::path::{Path, PathBuf};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["docdist", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["docdist", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// mkenv Command
// =============================================================================

#[test]
fn cli_mkenv_as_called_from_meson() {
    // run_command(docdist, 'mkenv', meson.project_source_root(), env_dir)
    let cli = Cli::try_parse_from([
        "docdist",
        "mkenv",
        "/src/project",
        "/src/project/build/doc/env",
    ])
    .unwrap();

    let Some(Command::Mkenv(args)) = cli.command else {
        panic!("expected mkenv");
    };
    assert_eq!(args.base_dir, PathBuf::from("/src/project"));
    assert_eq!(args.env_dir, PathBuf::from("/src/project/build/doc/env"));
}

#[test]
fn cli_mkenv_extra_argument_rejected() {
    let result = Cli::try_parse_from(["docdist", "mkenv", "a", "b", "c"]);
    assert!(result.is_err());
}

// =============================================================================
// dist Command
// =============================================================================

#[test]
fn cli_dist_explicit_roots() {
    let cli = Cli::try_parse_from([
        "docdist",
        "--dry",
        "dist",
        "--dist-root=/tmp/dist/project-1.0",
        "--build-root=/tmp/build",
    ])
    .unwrap();

    assert!(cli.global.dry);
    let Some(Command::Dist(args)) = cli.command else {
        panic!("expected dist");
    };
    assert_eq!(
        args.dist_root.as_deref(),
        Some(Path::new("/tmp/dist/project-1.0"))
    );
    assert_eq!(args.build_root.as_deref(), Some(Path::new("/tmp/build")));
    assert!(args.venv.is_none());
}

#[test]
fn cli_dist_unknown_flag_rejected() {
    let result = Cli::try_parse_from(["docdist", "dist", "--archive", "zip"]);
    assert!(result.is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_defaults() {
    let cli = Cli::try_parse_from(["docdist", "options"]).unwrap();
    let GlobalOptions {
        configs,
        dry,
        log_level,
        file_log_level,
        log_file,
        no_default_config,
    } = cli.global;

    assert!(configs.is_empty());
    assert!(!dry);
    assert!(log_level.is_none());
    assert!(file_log_level.is_none());
    assert!(log_file.is_none());
    assert!(!no_default_config);
}

#[test]
fn cli_global_options_after_subcommand_rejected() {
    // global options belong before the subcommand
    let result = Cli::try_parse_from(["docdist", "dist", "--log-level", "4"]);
    assert!(result.is_err());
}

#[test]
fn cli_file_log_level_independent() {
    let cli =
        Cli::try_parse_from(["docdist", "-l", "1", "--file-log-level", "6", "configs"]).unwrap();
    assert_eq!(cli.global.log_level, Some(1));
    assert_eq!(cli.global.file_log_level, Some(6));
}
