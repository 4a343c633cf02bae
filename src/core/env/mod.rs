// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management for child processes.
//!
//! ```text
//! Env (BTreeMap<EnvKey, String>, deterministic order)
//! Sources: current_env(), Env::from_map()
//! Ops: set/get/remove/prepend_path, activate_venv()
//! ```
//!
//! Keys compare case-insensitively on Windows only (`PATH == Path`).

pub mod container;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars().collect();
    container::Env::from_map(vars)
}
