//! CLI integration tests for spinver.
//!
//! Every test points `SPINVER_STORE` at its own temporary directory, so no
//! test touches the real store or the network. Versions are faked by planting
//! directories (or small shell scripts, for activation) in the store.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated test environment with its own store root and working directory.
struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  fn store_root(&self) -> PathBuf {
    self.temp.path().join("versions")
  }

  fn cwd(&self) -> PathBuf {
    let dir = self.temp.path().join("work");
    fs::create_dir_all(&dir).unwrap();
    dir
  }

  /// Plant a version directory with an inert binary file.
  fn add_version(&self, name: &str) {
    let dir = self.store_root().join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("spin"), b"binary").unwrap();
  }

  /// Plant a fake spin that answers `--version` with the given line.
  #[cfg(unix)]
  fn add_fake_binary(&self, name: &str, version_line: &str) {
    use std::os::unix::fs::PermissionsExt;

    let dir = self.store_root().join(name);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("spin");
    fs::write(&path, format!("#!/bin/sh\necho \"{}\"\n", version_line)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
  }

  /// A pre-configured command for the spinver binary.
  fn spinver(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("spinver");
    cmd.env("SPINVER_STORE", self.store_root());
    cmd.current_dir(self.cwd());
    cmd
  }
}

fn write_rc(dir: &Path, content: &str) {
  fs::write(dir.join(".spinrc"), content).unwrap();
}

// =============================================================================
// Help & version
// =============================================================================

#[test]
fn help_flag_works() {
  let env = TestEnv::new();
  env
    .spinver()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  let env = TestEnv::new();
  env
    .spinver()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("spinver"));
}

#[test]
fn subcommand_help_works() {
  let env = TestEnv::new();
  for cmd in &["set", "get", "list", "list-remote", "remove", "alias", "update"] {
    env
      .spinver()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// List
// =============================================================================

#[test]
fn list_on_empty_store_points_at_get() {
  let env = TestEnv::new();
  env
    .spinver()
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("No versions of spin"));
}

#[test]
fn list_shows_versions_but_not_the_pointer_dir() {
  let env = TestEnv::new();
  env.add_version("v1.0.0");
  env.add_version("canary");
  env.add_version("current_version");

  env
    .spinver()
    .arg("ls")
    .assert()
    .success()
    .stdout(predicate::str::contains("v1.0.0"))
    .stdout(predicate::str::contains("canary"))
    .stdout(predicate::str::contains("current_version").not());
}

#[test]
fn list_json_outputs_an_array() {
  let env = TestEnv::new();
  env.add_version("v1.0.0");

  let output = env.spinver().args(["list", "--json"]).assert().success();
  let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
  let entries: Vec<String> = serde_json::from_str(&stdout).unwrap();
  assert_eq!(entries, vec!["v1.0.0"]);
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn remove_missing_version_succeeds_with_message() {
  let env = TestEnv::new();
  env
    .spinver()
    .args(["remove", "9.9.9"])
    .assert()
    .success()
    .stderr(predicate::str::contains("nothing to remove"));
}

#[test]
fn remove_accepts_unprefixed_versions() {
  let env = TestEnv::new();
  env.add_version("v1.2.3");

  env
    .spinver()
    .args(["rm", "1.2.3"])
    .assert()
    .success()
    .stdout(predicate::str::contains("v1.2.3"));
  assert!(!env.store_root().join("v1.2.3").exists());
}

#[test]
fn remove_all_refuses_without_confirmation() {
  let env = TestEnv::new();
  env.add_version("v1.0.0");

  env
    .spinver()
    .args(["remove", "all"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--yes"));
  assert!(env.store_root().join("v1.0.0").exists());
}

#[test]
fn remove_all_with_yes_empties_the_store() {
  let env = TestEnv::new();
  env.add_version("v1.0.0");
  env.add_version("v2.0.0");
  env.add_version("current_version");

  env.spinver().args(["remove", "all", "--yes"]).assert().success();

  assert!(!env.store_root().join("v1.0.0").exists());
  assert!(!env.store_root().join("v2.0.0").exists());
  assert!(!env.store_root().join("current_version").exists());
}

// =============================================================================
// Resolver behavior through `set`
// =============================================================================

#[test]
fn set_without_version_or_rc_file_fails() {
  let env = TestEnv::new();
  env
    .spinver()
    .arg("set")
    .assert()
    .failure()
    .stderr(predicate::str::contains("version"));
}

#[test]
fn set_falls_back_to_the_rc_file() {
  let env = TestEnv::new();
  // Invalid content proves the file was read: the error names it before any
  // network or store access happens.
  write_rc(&env.cwd(), "not-a-version\n");

  env
    .spinver()
    .arg("set")
    .assert()
    .failure()
    .stderr(predicate::str::contains("not-a-version"));
}

#[test]
fn explicit_version_wins_over_the_rc_file() {
  let env = TestEnv::new();
  write_rc(&env.cwd(), "9.9.9");

  env
    .spinver()
    .args(["set", "also-not-a-version"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("also-not-a-version"));
}

#[test]
fn set_custom_without_alias_names_the_fix() {
  let env = TestEnv::new();
  env
    .spinver()
    .args(["set", "custom"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("alias"));
}

// =============================================================================
// Activation end to end (cache hit, no network)
// =============================================================================

#[test]
#[cfg(unix)]
fn set_activates_a_locally_cached_version() {
  let env = TestEnv::new();
  env.add_fake_binary("v1.0.0", "spin 1.0.0 (aaaa 2023-01-01)");

  let path = format!(
    "{}:{}",
    env.store_root().join("current_version").display(),
    std::env::var("PATH").unwrap_or_default()
  );

  env
    .spinver()
    .env("PATH", path)
    .args(["set", "1.0.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("v1.0.0"));

  let link = env.store_root().join("current_version").join("spin");
  let resolved = fs::read_link(link).unwrap();
  assert_eq!(resolved, env.store_root().join("v1.0.0").join("spin"));
}

#[test]
fn get_reports_cached_versions() {
  let env = TestEnv::new();
  env.add_version("v2.0.0");

  env
    .spinver()
    .args(["get", "2.0.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("found locally"));
}

// =============================================================================
// Alias
// =============================================================================

#[test]
#[cfg(unix)]
fn alias_creates_a_symlink() {
  let env = TestEnv::new();
  let target = env.cwd().join("local-spin");
  fs::write(&target, b"binary").unwrap();

  env
    .spinver()
    .args(["alias", "dev", target.to_str().unwrap()])
    .assert()
    .success()
    .stdout(predicate::str::contains("dev"));

  let link = env.store_root().join("dev").join("spin");
  assert_eq!(fs::read_link(link).unwrap(), target);
}
