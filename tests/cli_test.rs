//! Integration tests for the chef-wrapper binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GEM_MANIFEST: &str = r#"{
    "chef": ["18.2.7"],
    "inspec": ["5.22.3"],
    "chef-cli": ["5.6.14"],
    "test-kitchen": ["3.5.0"],
    "cookstyle": ["7.32.2"]
}"#;

const VERSION_MANIFEST: &str = r#"{
    "build_version": "23.7.1042",
    "software": {"hab": {"locked_version": "1.6.826"}}
}"#;

fn setup_install(gems: &str, versions: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gem-version-manifest.json"), gems).unwrap();
    fs::write(temp.path().join("version-manifest.json"), versions).unwrap();
    temp
}

fn wrapper() -> Command {
    let mut cmd = Command::new(cargo_bin("chef-wrapper"));
    cmd.env_remove("CHEF_WRAPPER_INSTALL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    wrapper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chef Workstation"));
    Ok(())
}

#[test]
fn cli_uninstalled_binary_is_not_packaged() -> Result<(), Box<dyn std::error::Error>> {
    // The test binary lives in target/, which has no version manifest.
    wrapper()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "ERROR: Chef Workstation has not been installed via the platform-specific package",
        ));
    Ok(())
}

#[test]
fn cli_version_flag_prints_report() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install(GEM_MANIFEST, VERSION_MANIFEST);
    wrapper()
        .arg("--install-root")
        .arg(install.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(
            "Chef Workstation version: 23.7.1042\n\
             Chef Infra Client version: 18.2.7\n\
             Chef InSpec version: 5.22.3\n\
             Chef CLI version: 5.6.14\n\
             Chef Habitat version: 1.6.826\n\
             Test Kitchen version: 3.5.0\n\
             Cookstyle version: 7.32.2\n",
        );
    Ok(())
}

#[test]
fn cli_install_root_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install("{}", r#"{"build_version": "5.2.1"}"#);
    wrapper()
        .env("CHEF_WRAPPER_INSTALL_ROOT", install.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chef Workstation version: 5.2.1"))
        .stdout(predicate::str::contains("Cookstyle version: unknown"));
    Ok(())
}

#[test]
fn cli_version_json() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install(GEM_MANIFEST, VERSION_MANIFEST);
    let output = wrapper()
        .arg("--install-root")
        .arg(install.path())
        .args(["version", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["product"], "Chef Workstation");
    assert_eq!(value["components"][0]["version"], "18.2.7");
    Ok(())
}

#[test]
fn cli_malformed_manifest_exits_4() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install("{ not json", VERSION_MANIFEST);
    wrapper()
        .arg("--install-root")
        .arg(install.path())
        .arg("-v")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gem-version-manifest.json"));
    Ok(())
}

#[test]
fn cli_missing_gem_manifest_exits_4() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("version-manifest.json"), VERSION_MANIFEST)?;
    wrapper()
        .arg("--install-root")
        .arg(temp.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to read manifest"));
    Ok(())
}

#[test]
fn cli_check_reads_ruby_env_from_home() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install(GEM_MANIFEST, VERSION_MANIFEST);
    let home = TempDir::new()?;
    fs::create_dir_all(home.path().join(".chef"))?;
    fs::write(
        home.path().join(".chef/ruby-env.json"),
        r#"{"build_version": "23.7.1042"}"#,
    )?;

    wrapper()
        .env("HOME", home.path())
        .env("PATH", "")
        .arg("--install-root")
        .arg(install.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ruby environment matches Chef Workstation 23.7.1042: yes",
        ))
        .stdout(predicate::str::contains(
            "Default ruby is /opt/chef-workstation/embedded/bin/ruby: no",
        ));
    Ok(())
}

#[test]
fn cli_check_without_ruby_env_is_no_match() -> Result<(), Box<dyn std::error::Error>> {
    let install = setup_install(GEM_MANIFEST, VERSION_MANIFEST);
    let home = TempDir::new()?;

    wrapper()
        .env("HOME", home.path())
        .arg("--install-root")
        .arg(install.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("23.7.1042: no"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    wrapper()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chef-wrapper"));
    Ok(())
}
