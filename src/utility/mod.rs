// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:    walk_tree(), TreeEntry, EntryKind
//!   copy:    copy_tree(), CopyStats
//!   remove:  remove_file(), remove_dir()
//! ```

pub mod fs;
