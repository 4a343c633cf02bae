// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for `docdist mkenv`.
//!
//! A shell script stands in for the interpreter; the environment it
//! creates holds a fake installer that records how it was called.

#![cfg(unix)]

use docdist::cli::mkenv::MkenvArgs;
use docdist::cmd::mkenv::run_mkenv_command;
use docdist::config::Config;
use docdist::error::ProvisionError;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn fake_python(path: &Path) -> PathBuf {
    write(
        path,
        r#"#!/bin/sh
mkdir -p "$3/bin"
printf '#!/bin/sh\nprintf "%%s\\n" "$@" > "%s/installer.log"\n' "$3" > "$3/bin/pip"
chmod +x "$3/bin/pip"
"#,
    );
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

#[tokio::test]
async fn mkenv_installs_manifest_into_new_environment() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("libfoo");
    let env = temp.path().join("libfoo/build/doc-env");
    write(
        &base.join("doc/requirements.txt"),
        "# pinned for reproducible docs\nsphinx==8.1.3\nhawkmoth==0.18.0\n",
    );

    let mut config = Config::default();
    config.tools.python = fake_python(&temp.path().join("bin/python3"));

    let args = MkenvArgs {
        base_dir: base.clone(),
        env_dir: env.clone(),
    };
    run_mkenv_command(&args, &config).await.unwrap();

    let log = std::fs::read_to_string(env.join("installer.log")).unwrap();
    let manifest = base.join("doc/requirements.txt");
    let manifest = manifest.to_string_lossy().into_owned();
    let expected = ["install", "--force-reinstall", "-r", manifest.as_str()];
    assert_eq!(log.lines().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn mkenv_missing_manifest() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.python = fake_python(&temp.path().join("bin/python3"));

    let args = MkenvArgs {
        base_dir: temp.path().join("empty-project"),
        env_dir: temp.path().join("env"),
    };
    let err = run_mkenv_command(&args, &config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProvisionError>(),
        Some(ProvisionError::DependencyInstall { .. })
    ));
    assert!(format!("{err:#}").contains("manifest not found"));
}

#[tokio::test]
async fn mkenv_missing_interpreter() {
    let temp = tempfile::tempdir().unwrap();
    write(&temp.path().join("doc/requirements.txt"), "sphinx\n");
    let mut config = Config::default();
    config.tools.python = temp.path().join("bin/python-does-not-exist");

    let args = MkenvArgs {
        base_dir: temp.path().to_path_buf(),
        env_dir: temp.path().join("env"),
    };
    let err = run_mkenv_command(&args, &config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProvisionError>(),
        Some(ProvisionError::EnvironmentCreation { .. })
    ));
    assert!(!temp.path().join("env").exists());
}
