//! End-to-end tests driving the binary against throwaway project directories.
//!
//! A stub interpreter on a private PATH stands in for CPython, so the suite
//! never depends on a real Python install or the network.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEMPLATE_BODY: &str =
    "telegram:\n  token: \"YOUR_TOKEN\"\nnotion:\n  api_key: \"FILL_ME\"\n";

/// Lay out a deployment directory: manifest plus config template.
fn project_dir() -> TempDir {
    let dir = TempDir::new().expect("project tempdir");
    fs::write(
        dir.path().join("requirements_prod.txt"),
        "aiogram==3.4.1\nnotion-client>=2.2\nopenai\n",
    )
    .expect("write manifest");
    fs::create_dir(dir.path().join("config_prod")).expect("create config dir");
    fs::write(
        dir.path().join("config_prod").join("app.yaml.example"),
        TEMPLATE_BODY,
    )
    .expect("write template");
    dir
}

fn bootstrap_cmd(project: &Path, path_env: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bootstrap").expect("binary under test");
    cmd.current_dir(project).env("PATH", path_env);
    cmd
}

#[test]
fn version_flag_prints_build_info() {
    Command::cargo_bin("bootstrap")
        .expect("binary under test")
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap-kit"));
}

#[test]
fn fails_before_any_side_effect_when_no_runtime_resolves() {
    let project = project_dir();
    let empty_path = TempDir::new().expect("empty PATH dir");

    bootstrap_cmd(project.path(), empty_path.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no Python runtime found"));

    // Runtime discovery is step one; nothing later may have run.
    assert!(!project.path().join("venv").exists());
    assert!(!project.path().join("config_prod").join("app.yaml").exists());
}

#[cfg(unix)]
mod with_stub_interpreter {
    use super::*;

    use std::os::unix::fs::PermissionsExt;

    /// Shell script that answers the three invocations the bootstrapper
    /// makes: `--version`, `-m venv <dir>`, and `-m pip ...`. The venv branch
    /// installs a copy of itself as the environment's private interpreter.
    fn write_stub(dir: &Path, version_banner: &str, pip_script: &str) {
        let body = format!(
            r#"#!/bin/sh
# The bootstrapper runs us with a stripped-down PATH; restore the usual
# locations so mkdir/cp resolve.
PATH="/usr/bin:/bin:$PATH"
if [ "$1" = "--version" ]; then
    {version_banner}
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin"
    cp "$0" "$3/bin/python"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    {pip_script}
fi
exit 2
"#
        );
        let path = dir.join("python3");
        fs::write(&path, body).expect("write stub interpreter");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }

    fn healthy_stub(dir: &Path) {
        write_stub(dir, r#"echo "Python 3.12.1""#, "exit 0");
    }

    #[test]
    fn full_pipeline_provisions_env_and_seeds_config() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        healthy_stub(bin.path());

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Found python3 3.12"))
            .stdout(predicate::str::contains("Virtual environment ready"))
            .stdout(predicate::str::contains("Dependencies installed"))
            .stdout(predicate::str::contains("Bootstrap complete"));

        assert!(project.path().join("venv").join("bin").join("python").exists());
        let seeded =
            fs::read(project.path().join("config_prod").join("app.yaml")).expect("read config");
        assert_eq!(seeded, TEMPLATE_BODY.as_bytes(), "exact template copy");
    }

    #[test]
    fn second_run_leaves_existing_config_untouched() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        healthy_stub(bin.path());

        bootstrap_cmd(project.path(), bin.path()).assert().success();

        // Operator fills in real secrets between runs.
        let live = project.path().join("config_prod").join("app.yaml");
        let edited = "telegram:\n  token: \"live-secret\"\n";
        fs::write(&live, edited).expect("edit live config");

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));

        let after = fs::read(&live).expect("read live config");
        assert_eq!(after, edited.as_bytes(), "byte-identical after rerun");
    }

    #[test]
    fn rejects_interpreter_below_version_floor() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        write_stub(bin.path(), r#"echo "Python 3.9.7""#, "exit 0");

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("at least 3.10 is required"));

        assert!(!project.path().join("venv").exists());
    }

    #[test]
    fn accepts_version_banner_on_stderr() {
        // CPython < 3.4 printed the banner to stderr.
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        write_stub(bin.path(), r#"echo "Python 3.11.2" >&2"#, "exit 0");

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Found python3 3.11"));
    }

    #[test]
    fn accepts_version_without_patch_component() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        write_stub(bin.path(), r#"echo "Python 3.10""#, "exit 0");

        bootstrap_cmd(project.path(), bin.path()).assert().success();
    }

    #[test]
    fn missing_manifest_fails_after_environment_creation() {
        let project = project_dir();
        fs::remove_file(project.path().join("requirements_prod.txt")).expect("drop manifest");
        let bin = TempDir::new().expect("stub PATH dir");
        healthy_stub(bin.path());

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("dependency manifest not found"));

        // Environment creation precedes the manifest check and is kept.
        assert!(project.path().join("venv").exists());
        assert!(!project.path().join("config_prod").join("app.yaml").exists());
    }

    #[test]
    fn missing_template_fails_regardless_of_earlier_steps() {
        let project = project_dir();
        fs::remove_file(project.path().join("config_prod").join("app.yaml.example"))
            .expect("drop template");
        let bin = TempDir::new().expect("stub PATH dir");
        healthy_stub(bin.path());

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("configuration template not found"));

        assert!(!project.path().join("config_prod").join("app.yaml").exists());
    }

    #[test]
    fn surfaces_pip_diagnostics_unmodified() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        write_stub(
            bin.path(),
            r#"echo "Python 3.12.1""#,
            r#"echo "ERROR: No matching distribution found for aiogram==3.4.1" >&2
    exit 1"#,
        );

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("dependency installation failed"))
            .stderr(predicate::str::contains(
                "ERROR: No matching distribution found for aiogram==3.4.1",
            ));
    }

    #[test]
    fn honors_runtime_override_from_bootstrap_toml() {
        let project = project_dir();
        let bin = TempDir::new().expect("stub PATH dir");
        healthy_stub(bin.path());
        // The stub only exists as `python3`; point the override at it.
        fs::write(project.path().join("bootstrap.toml"), "runtime = \"python3\"\n")
            .expect("write override");

        bootstrap_cmd(project.path(), bin.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Bootstrap complete"));
    }
}
