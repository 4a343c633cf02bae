// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The two pipelines and their inputs.
//!
//! ```text
//! context    ProvisionContext { base_dir, env_dir }
//!            DistContext      { dist_root, build_root, venv }
//! manifest   RequirementsManifest::load / parse
//! provision  provision()  venv --> pip install --force-reinstall -r
//! assemble   assemble()   strip --> build --> copy --> drop doctrees
//! ```
//!
//! Steps run one after another; the first failure ends the pipeline.

pub mod assemble;
pub mod context;
pub mod manifest;
pub mod provision;

#[cfg(test)]
mod test_utils;
