// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning with exit-code checking.
//!
//! ```text
//! ProcessBuilder::which("meson")?
//!   .args() .cwd() .env()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr into the log
//!       --> Ok(ProcessOutput { exit_code, stderr_tail })
//!       --> Err(ProcessError::NonZeroExit { command, code, stderr_tail })
//! ```

pub mod builder;
mod io;
mod runner;
