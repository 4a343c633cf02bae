// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{install_args, installer_path, venv_bin_dir};

#[test]
fn test_installer_lives_inside_environment() {
    let env_dir = Path::new("/work/doc-env");
    let installer = installer_path(env_dir);
    assert!(installer.starts_with(env_dir));
    assert!(installer.starts_with(venv_bin_dir(env_dir)));

    if cfg!(windows) {
        assert!(installer.ends_with("Scripts/pip.exe"));
    } else {
        assert_eq!(installer, Path::new("/work/doc-env/bin/pip"));
    }
}

#[test]
fn test_install_args() {
    let args = install_args(Path::new("/src/project/doc/requirements.txt"));
    insta::assert_debug_snapshot!(args, @r#"
    [
        "install",
        "--force-reinstall",
        "-r",
        "/src/project/doc/requirements.txt",
    ]
    "#);
}

#[cfg(unix)]
mod stubbed {
    use std::path::{Path, PathBuf};

    use super::super::provision;
    use crate::config::Config;
    use crate::error::{ProcessError, ProvisionError};
    use crate::pipeline::context::ProvisionContext;
    use crate::pipeline::test_utils::{run_with_logs, write_file, write_script};

    /// A fake interpreter whose `-m venv DIR` creates `DIR/bin/pip`.
    /// The fake pip records its arguments in `DIR/pip-args.txt` and
    /// exits with `pip_exit`.
    fn fake_python(dir: &Path, pip_exit: i32) -> PathBuf {
        write_script(
            &dir.join("python3"),
            &format!(
                r#"[ "$1" = "-m" ] && [ "$2" = "venv" ] || exit 64
mkdir -p "$3/bin"
printf '#!/bin/sh\necho "$@" > "%s/pip-args.txt"\necho "pip says no" >&2\nexit {pip_exit}\n' "$3" > "$3/bin/pip"
chmod +x "$3/bin/pip""#
            ),
        )
    }

    struct Fixture {
        _temp: tempfile::TempDir,
        base: PathBuf,
        env: PathBuf,
        tools: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path().join("project");
        let env = temp.path().join("doc-env");
        let tools = temp.path().join("tools");
        write_file(
            &base.join("doc/requirements.txt"),
            "sphinx>=7\nhawkmoth==0.18.0\n",
        );
        Fixture {
            _temp: temp,
            base,
            env,
            tools,
        }
    }

    fn config_with_python(python: PathBuf) -> Config {
        let mut config = Config::default();
        config.tools.python = python;
        config
    }

    #[tokio::test]
    async fn test_provision_installs_with_inner_installer() {
        let fx = fixture();
        let config = config_with_python(fake_python(&fx.tools, 0));
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        provision(&ctx, &config).await.unwrap();

        let recorded = std::fs::read_to_string(fx.env.join("pip-args.txt")).unwrap();
        assert_eq!(
            recorded.trim(),
            format!(
                "install --force-reinstall -r {}",
                fx.base.join("doc/requirements.txt").display()
            )
        );
    }

    #[tokio::test]
    async fn test_provision_missing_interpreter() {
        let fx = fixture();
        let config = config_with_python(fx.tools.join("no-such-python"));
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config).await.unwrap_err();
        assert!(
            matches!(
                err,
                ProvisionError::EnvironmentCreation {
                    source: Some(ProcessError::ExecutableNotFound { .. }),
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_provision_interpreter_fails() {
        let fx = fixture();
        let python = write_script(&fx.tools.join("python3"), "echo 'Error: dir exists' >&2\nexit 1");
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config_with_python(python))
            .await
            .unwrap_err();
        let ProvisionError::EnvironmentCreation {
            source: Some(ProcessError::NonZeroExit { code, stderr_tail, .. }),
            ..
        } = &err
        else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(*code, 1);
        assert_eq!(stderr_tail, &["Error: dir exists"]);
    }

    #[tokio::test]
    async fn test_provision_environment_without_installer() {
        let fx = fixture();
        let python = write_script(&fx.tools.join("python3"), r#"mkdir -p "$3/bin""#);
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config_with_python(python))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ProvisionError::EnvironmentCreation { source: None, .. }),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().contains("is missing"));
    }

    #[tokio::test]
    async fn test_provision_missing_manifest_skips_installer() {
        let fx = fixture();
        std::fs::remove_file(fx.base.join("doc/requirements.txt")).unwrap();
        let config = config_with_python(fake_python(&fx.tools, 0));
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config).await.unwrap_err();
        assert!(matches!(err, ProvisionError::DependencyInstall { source: None, .. }));
        // environment exists, installer never ran
        assert!(fx.env.join("bin/pip").is_file());
        assert!(!fx.env.join("pip-args.txt").exists());
    }

    #[tokio::test]
    async fn test_provision_malformed_manifest() {
        let fx = fixture();
        write_file(&fx.base.join("doc/requirements.txt"), "sphinx\n!!!\n");
        let config = config_with_python(fake_python(&fx.tools, 0));
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config).await.unwrap_err();
        assert!(err.to_string().contains("line 2: '!!!'"), "{err}");
        assert!(!fx.env.join("pip-args.txt").exists());
    }

    #[tokio::test]
    async fn test_provision_installer_fails() {
        let fx = fixture();
        let config = config_with_python(fake_python(&fx.tools, 1));
        let ctx = ProvisionContext::new(&fx.base, &fx.env).unwrap();

        let err = provision(&ctx, &config).await.unwrap_err();
        let ProvisionError::DependencyInstall {
            source: Some(ProcessError::NonZeroExit { stderr_tail, .. }),
            ..
        } = &err
        else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(stderr_tail, &["pip says no"]);
    }

    #[tokio::test]
    async fn test_provision_dry_run() {
        let fx = fixture();
        let config = config_with_python(fake_python(&fx.tools, 0));
        let ctx = ProvisionContext::new(&fx.base, &fx.env)
            .unwrap()
            .with_dry_run(true);

        let (result, logs) = run_with_logs(|| provision(&ctx, &config)).await;
        result.unwrap();

        assert!(!fx.env.exists());
        assert!(logs.contains("[DRY-RUN] would create virtual environment"), "{logs}");
        assert!(logs.contains("[DRY-RUN] would install dependencies"), "{logs}");
    }
}
