//! Integration tests for the wisp-term binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::temp_config;

/// Command with an isolated (missing) config file.
fn wisp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wisp-term").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_refuses_without_a_terminal() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn replay_prints_one_line_per_step() {
    let dir = TempDir::new().unwrap();
    let output = wisp(&dir)
        .args(["replay", "visible", "+400", "+600", "+1000", "hover:1", "activate:1", "back"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[1].contains("prefix=\"w\""));
    assert!(lines[2].contains("prefix=\"wisp\""));
    assert!(lines[3].contains("2000ms") && lines[3].contains("menu"));
    assert!(lines[5].contains("monitor"));
    assert!(lines[6].contains("menu") && lines[6].ends_with("selected=1"));
}

#[test]
fn replay_json_emits_state_objects() {
    let dir = TempDir::new().unwrap();
    let output = wisp(&dir)
        .args(["replay", "--json", "visible", "+2000", "activate:1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let frames: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1]["at_ms"], 2000);
    assert_eq!(frames[1]["state"]["typed_prefix"], "wisp");
    assert_eq!(frames[2]["state"]["phase"], "monitor");
    assert!(frames[2].get("rejected").is_none());
}

#[test]
fn replay_reports_rejected_index_and_continues() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .args(["replay", "visible", "+2000", "hover:7", "hover:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected: Menu index 7 out of range"))
        .stdout(predicate::str::contains("selected=2"));
}

#[test]
fn replay_rejects_unknown_step() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .args(["replay", "visible", "jump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step 'jump'"));
}

#[test]
fn replay_uses_configured_timing() {
    let (_dir, path) = temp_config("[timing]\nstart_delay_ms = 0\nper_char_ms = 10\ncompletion_delay_ms = 10\n");
    Command::cargo_bin("wisp-term")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .args(["replay", "visible", "+50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"));
}

#[test]
fn config_path_honors_flag() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(dir.path().join("config.toml").exists());

    wisp(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    wisp(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[timing]"))
        .stdout(predicate::str::contains("per_char_ms = 150"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    wisp(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wisp-term"));
}
