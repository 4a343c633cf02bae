// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::logging::LogLevel;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["docdist", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_mkenv() {
    let cli = Cli::try_parse_from(["docdist", "mkenv", ".", "build/doc-env"]).unwrap();
    let Some(Command::Mkenv(args)) = cli.command else {
        panic!("expected mkenv");
    };
    insta::assert_debug_snapshot!(args, @r#"
    MkenvArgs {
        base_dir: ".",
        env_dir: "build/doc-env",
    }
    "#);
}

#[test]
fn test_parse_mkenv_requires_both_paths() {
    assert!(Cli::try_parse_from(["docdist", "mkenv", "."]).is_err());
    assert!(Cli::try_parse_from(["docdist", "mkenv"]).is_err());
}

#[test]
fn test_parse_dist_flags() {
    let cli = Cli::try_parse_from([
        "docdist",
        "dist",
        "--dist-root",
        "/tmp/dist",
        "--build-root",
        "/tmp/build",
        "--venv",
        "/tmp/build/doc-env",
    ])
    .unwrap();
    let Some(Command::Dist(args)) = cli.command else {
        panic!("expected dist");
    };
    assert_eq!(args.dist_root.as_deref(), Some(Path::new("/tmp/dist")));
    assert_eq!(args.build_root.as_deref(), Some(Path::new("/tmp/build")));
    assert_eq!(args.venv.as_deref(), Some(Path::new("/tmp/build/doc-env")));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "docdist",
        "-l",
        "5",
        "--dry",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--log-file",
        "docdist.log",
        "options",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_file.as_deref(), Some(Path::new("docdist.log")));
    assert!(matches!(cli.command, Some(Command::Options(ref o)) if o.json));
}

#[test]
fn test_log_level_out_of_range() {
    let err = Cli::try_parse_from(["docdist", "-l", "7", "version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["docdist"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_overrides_reach_config() {
    let cli = Cli::try_parse_from([
        "docdist",
        "--no-default-config",
        "-l",
        "4",
        "--dry",
        "--log-file",
        "out/docdist.log",
        "configs",
    ])
    .unwrap();

    let config = cli.global.load_config().unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    // file level follows the console level
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, PathBuf::from("out/docdist.log"));
}

#[test]
fn test_missing_config_file_is_error() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("missing.toml");
    let missing = missing.to_string_lossy();
    let cli = Cli::try_parse_from([
        "docdist",
        "--no-default-config",
        "-c",
        &*missing,
        "configs",
    ])
    .unwrap();

    assert!(cli.global.load_config().is_err());
    assert_eq!(cli.global.config_loader().format_loaded_files().len(), 1);
}
