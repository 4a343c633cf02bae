// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use docdist::config::Config;
use docdist::config::loader::ConfigLoader;
use docdist::logging::LogLevel;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_project_file() {
    let toml = r#"
[global]
output_log_level = 2
log_file = "build/docdist.log"

[tools]
python = "python3.12"

[mkenv]
requirements = "doc/requirements-pinned.txt"

[dist]
doc_build_command = ["ninja", "html"]
doc_dest = "share/doc/html"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.log_file, PathBuf::from("build/docdist.log"));
    assert_eq!(config.tools.python, PathBuf::from("python3.12"));
    assert_eq!(
        config.mkenv.requirements,
        PathBuf::from("doc/requirements-pinned.txt")
    );
    assert_eq!(config.dist.doc_build_command, ["ninja", "html"]);
    assert_eq!(config.dist.doc_dest, PathBuf::from("share/doc/html"));
    assert_eq!(config.dist.strip_files, [PathBuf::from(".gitignore")]);
}

#[test]
fn config_parse_unknown_section_rejected() {
    let toml = r#"
[paths]
prefix = "/build"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Config::parse("[dist\nhtml_dir = 1").is_err());
}

#[test]
fn config_json_round_trip_keeps_defaults() {
    let config = Config::default();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["dist"]["doc_build_command"][0], "meson");
    assert_eq!(json["global"]["output_log_level"], 3);
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("docdist.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(
        &project,
        "[dist]\nstrip_dirs = [\".github\", \".gitlab\"]\nhtml_dir = \"doc/html\"\n",
    )
    .unwrap();
    std::fs::write(&local, "[dist]\nhtml_dir = \"html\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&project)
        .add_toml_file(&local);
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.dist.strip_dirs.len(), 2);
    assert_eq!(config.dist.html_dir, PathBuf::from("html"));
}

#[test]
fn config_invalid_value_in_file_reported() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("docdist.toml");
    std::fs::write(&path, "[dist]\ndoctrees_dir = \"\"\n").unwrap();

    let err = ConfigLoader::new().add_toml_file(&path).build().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("doctrees_dir"), "{message}");
}
