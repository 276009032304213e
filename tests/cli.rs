// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end CLI tests.
//!
//! Each test runs the binary inside a fresh repository with the home
//! directory pointed at the same sandbox, so no user configuration leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn git_file(&self, name: &str) -> PathBuf {
        self.path().join(".git").join(name)
    }

    fn write_message(&self, content: &str) {
        fs::write(self.git_file("COMMIT_EDITMSG"), content).unwrap();
    }

    #[allow(deprecated)]
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("CLICOLOR", "0")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn valid_text_is_silent() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "fix($compile): something"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn invalid_text_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "not correct format"])
        .assert()
        .code(1)
        .stderr("INVALID COMMIT MSG: does not match \"<type>(<scope>): <subject>\" !\n")
        .stdout("not correct format\n");
}

#[test]
fn default_source_is_commit_editmsg() {
    let sandbox = Sandbox::new();
    sandbox.write_message("weird($filter): something\n");

    sandbox
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"weird\" is not allowed type !"));
}

#[test]
fn empty_message_aborts() {
    let sandbox = Sandbox::new();
    sandbox.write_message("# Please enter the commit message\n");

    sandbox
        .cmd()
        .assert()
        .code(1)
        .stdout("Aborting commit due to empty commit message.\n");
}

#[test]
fn merge_commit_is_accepted() {
    let sandbox = Sandbox::new();
    sandbox.write_message("Merge branch 'master' into feature\n");

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout("Merge commit detected.\n");
}

#[test]
fn autofix_rewrites_header_only() {
    let sandbox = Sandbox::new();
    sandbox.write_message("Chore(build): A something Z\n\nBody stays As Is\n# comment\n");

    sandbox
        .cmd()
        .args(["validate", "--auto-fix"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(sandbox.git_file("COMMIT_EDITMSG")).unwrap(),
        "chore(build): a something Z\n\nBody stays As Is\n# comment\n"
    );
}

#[test]
fn latin1_message_file_is_checked() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.git_file("COMMIT_EDITMSG"), b"fix: caf\xe9\n").unwrap();

    sandbox.cmd().assert().success();
}

#[test]
fn latin1_message_file_is_not_rewritten() {
    let sandbox = Sandbox::new();
    let original = b"Fix: Caf\xe9\n".to_vec();
    fs::write(sandbox.git_file("COMMIT_EDITMSG"), &original).unwrap();

    sandbox
        .cmd()
        .args(["validate", "--auto-fix"])
        .assert()
        .success();

    assert_eq!(fs::read(sandbox.git_file("COMMIT_EDITMSG")).unwrap(), original);
}

#[test]
fn rejected_message_is_logged() {
    let sandbox = Sandbox::new();
    sandbox.write_message("not correct format\n");

    sandbox.cmd().assert().code(1);

    let log = fs::read_to_string(sandbox.git_file("logs/incorrect-commit-msgs")).unwrap();
    assert_eq!(log, "not correct format\n\n");
}

#[test]
fn no_log_skips_rejected_log() {
    let sandbox = Sandbox::new();
    sandbox.write_message("not correct format\n");

    sandbox.cmd().args(["validate", "--no-log"]).assert().code(1);

    assert!(!sandbox.git_file("logs/incorrect-commit-msgs").exists());
}

#[test]
fn warn_on_fail_accepts() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "--warn-on-fail", "not correct format"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("INVALID COMMIT MSG: "));
}

#[test]
fn stdin_source() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "-"])
        .write_stdin("feat(cli): read from stdin\n")
        .assert()
        .success();
}

#[test]
fn vcmrc_is_discovered() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path().join(".vcmrc"), r#"{ "types": ["custom"] }"#).unwrap();

    sandbox
        .cmd()
        .args(["validate", "custom: something"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["validate", "feat: something"])
        .assert()
        .code(1);
}

#[test]
fn package_json_section_is_discovered() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path().join("package.json"),
        r#"{ "name": "demo", "config": { "validate-commit-msg": { "maxSubjectLength": 10 } } }"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["validate", "feat: something long"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is longer than 10 characters !"));
}

#[test]
fn missing_explicit_config_is_fatal() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "--config", "nope.json", "feat: x"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn json_format() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["validate", "--format", "json", "weird: something"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["violations"][0]["code"], "type-not-allowed");
}

#[test]
fn hook_install_and_status() {
    let sandbox = Sandbox::new();

    sandbox.cmd().args(["hook", "install"]).assert().success();
    let script = fs::read_to_string(sandbox.git_file("hooks/commit-msg")).unwrap();
    assert!(script.contains("vcm validate"));

    sandbox
        .cmd()
        .args(["hook", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ commit-msg"));

    sandbox.cmd().args(["hook", "uninstall"]).assert().success();
    assert!(!sandbox.git_file("hooks/commit-msg").exists());
}

#[test]
fn init_refuses_to_overwrite() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["init", "--preset", "strict"])
        .assert()
        .success();
    let written = fs::read_to_string(sandbox.path().join(".vcmrc")).unwrap();
    assert!(written.contains("\"maxSubjectLength\": 72"));

    sandbox.cmd().arg("init").assert().code(2);
    sandbox.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn types_lists_catalog() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("feat"))
        .stdout(predicate::str::contains("revert"));
}
