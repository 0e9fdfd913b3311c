//! Integration tests for the nbcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn nbcheck() -> Command {
    let mut cmd = Command::new(cargo_bin("nbcheck"));
    cmd.env_remove("NBCHECK_CONFIG")
        .env_remove("NBCHECK_PYTHON")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_manifest(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("manifest.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jupyter widgets tutorial"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_config_shows_builtin_manifest() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# built-in manifest"))
        .stdout(predicate::str::contains("widgets-tutorial"))
        .stdout(predicate::str::contains("ipyvolume"));
    Ok(())
}

#[test]
fn cli_config_json_parses() -> Result<(), Box<dyn std::error::Error>> {
    let output = nbcheck().args(["config", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["tools"][0]["name"], "voila");
    Ok(())
}

#[test]
fn cli_unparseable_manifest_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let manifest = write_manifest(temp.path(), "requirements: [");

    nbcheck()
        .arg("--config")
        .arg(&manifest)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_missing_manifest_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .args(["check", "--config", "/nonexistent/nbcheck.yml"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn cli_missing_interpreter_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .args(["--python", "nbcheck-no-such-python"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nbcheck-no-such-python"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    nbcheck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nbcheck"));
    Ok(())
}

#[cfg(unix)]
mod audit {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    // Stands in for `python -c SCRIPT ARGS...`: $2 is the probe script,
    // $3 onwards its arguments.
    const FAKE_PYTHON: &str = r#"#!/bin/sh
M='@@nbcheck-reply@@'
case "$2" in
  *find_kernel_specs*) echo "$M[\"python3\", \"widgets-tutorial\"]" ;;
  *check_extension*) echo "$M{\"status\": \"available\", \"present\": [\"jupyter-leaflet\"]}" ;;
  *)
    case "$3" in
      ipywidgets) printf 'loading widgets'; echo "$M{\"status\": \"ok\", \"version\": \"7.5.1\"}" ;;
      notebook) echo "$M{\"status\": \"ok\", \"version\": \"5.7.8\"}"; printf 'bye' ;;
      *) echo "$M{\"status\": \"missing\", \"reason\": \"No module named '$3'\"}" ;;
    esac
    ;;
esac
"#;

    const HEALTHY: &str = r#"
tutorial_name: Demo
requirements: [ipywidgets]
version_rules:
  - package: ipywidgets
    acceptable_prefixes: ["7.5"]
kernel:
  name: widgets-tutorial
lab_extensions: [jupyter-leaflet]
"#;

    const BROKEN: &str = r#"
tutorial_name: Demo
requirements: [ipywidgets, notebook, bqplot]
version_rules:
  - package: notebook
    acceptable_prefixes: ["6"]
tools:
  - name: nbcheck-missing-tool
    install_commands: ["pip install nbcheck-missing-tool"]
kernel:
  name: demo-kernel
  install_command: ipython kernel install --name demo-kernel
lab_extensions: [jupyter-leaflet, bqplot]
"#;

    fn setup(manifest: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, FAKE_PYTHON).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
        let manifest = write_manifest(temp.path(), manifest);
        (temp, python, manifest)
    }

    #[test]
    fn healthy_environment_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp, python, manifest) = setup(HEALTHY);

        nbcheck()
            .arg("--config")
            .arg(&manifest)
            .arg("--python")
            .arg(&python)
            .assert()
            .success()
            .stdout(predicate::str::contains("Checking requirements for Demo."))
            .stdout(predicate::str::contains("All required packages installed"))
            .stdout(predicate::str::contains("ipywidgets version is good!"))
            .stdout(predicate::str::contains("Custom kernel is correctly installed"))
            .stdout(predicate::str::contains("All extensions are installed!"))
            .stdout(predicate::str::contains("----->").not());
        Ok(())
    }

    #[test]
    fn failed_checks_exit_one_with_fix_lines() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp, python, manifest) = setup(BROKEN);

        nbcheck()
            .arg("check")
            .arg("--config")
            .arg(&manifest)
            .arg("--python")
            .arg(&python)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "-----> Please install these missing packages for the tutorial \"Demo\":",
            ))
            .stdout(predicate::str::contains("bqplot"))
            .stdout(predicate::str::contains(
                "-----> nbcheck-missing-tool is not installed!",
            ))
            .stdout(predicate::str::contains("pip install notebook==6"))
            .stdout(predicate::str::contains(concat!(
                "-----> Please create custom kernel with: ",
                "ipython kernel install --name demo-kernel",
            )))
            .stdout(predicate::str::contains(
                "-----> These lab extensions are missing: bqplot",
            ));
        Ok(())
    }

    #[test]
    fn no_fail_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp, python, manifest) = setup(BROKEN);

        nbcheck()
            .args(["check", "--no-fail", "--config"])
            .arg(&manifest)
            .arg("--python")
            .arg(&python)
            .assert()
            .success()
            .stdout(predicate::str::contains("----->"));
        Ok(())
    }

    #[test]
    fn quiet_shows_only_fix_lines() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp, python, manifest) = setup(BROKEN);

        nbcheck()
            .args(["--quiet", "--config"])
            .arg(&manifest)
            .arg("--python")
            .arg(&python)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("----->"))
            .stdout(predicate::str::contains("Checking requirements").not());
        Ok(())
    }

    #[test]
    fn json_report_parses() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp, python, manifest) = setup(BROKEN);

        let output = nbcheck()
            .args(["check", "--json", "--config"])
            .arg(&manifest)
            .arg("--python")
            .arg(&python)
            .output()?;

        assert_eq!(output.status.code(), Some(1));
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(parsed["healthy"], false);
        assert_eq!(parsed["packages"]["bqplot"]["status"], "absent");
        assert_eq!(parsed["packages"]["notebook"]["version"], "5.7.8");
        assert_eq!(parsed["versions"][0]["verdict"], "upgrade");
        assert_eq!(parsed["versions"][0]["recommended"], "6");
        assert_eq!(parsed["kernel"]["present"], false);
        assert_eq!(parsed["extensions"]["missing"][0], "bqplot");
        Ok(())
    }
}
