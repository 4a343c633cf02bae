// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for staging trees.
//!
//! ```text
//! walk:    walk_tree()    ignore::WalkBuilder, links reported not followed
//! copy:    copy_tree()    staged copy, symlinks recreated, CopyStats
//! remove:  remove_file()  Ok(false) when absent
//!          remove_dir()   recursive, Ok(false) when absent
//! ```

pub mod copy;
pub mod remove;
pub mod walk;
