// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   mkenv   ProvisionContext --> pipeline::provision
//!   dist    DistContext      --> pipeline::assemble
//!   config  options, configs
//! ```

pub mod config;
pub mod dist;
pub mod mkenv;
