// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (files, env, flags) --> Logging --> Command Dispatch
//!   Version | Options | Configs | Mkenv | Dist
//! ```

use std::process::ExitCode;

use docdist::cli::{self, Command};
use docdist::cmd::config::{run_configs_command, run_options_command};
use docdist::cmd::dist::run_dist_command;
use docdist::cmd::mkenv::run_mkenv_command;
use docdist::config::Config;
use docdist::logging::init_logging;
use docdist::logging::{LogConfig, LogGuard};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Configs) => {
            run_configs_command(&cli.global.config_loader().format_loaded_files());
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        _ => {}
    }

    let config = match cli.global.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn start_logging(config: &Config) -> docdist::error::Result<LogGuard> {
    let log_file = &config.global.log_file;
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            (!log_file.as_os_str().is_empty()).then(|| log_file.display().to_string()),
        )
        .build();

    init_logging(&log_config)
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options(args)) => run_options_command(args, config),
        Some(Command::Mkenv(args)) => run_mkenv_command(args, config).await,
        Some(Command::Dist(args)) => run_dist_command(args, config).await,
        Some(Command::Version | Command::Configs) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
