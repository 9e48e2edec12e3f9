//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tempo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tempo").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd.env_remove("TEMPO_DATA_DIR");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("tempo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}

#[test]
fn task_add_and_list_roundtrip() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["task", "add", "write", "the", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task: write the report"));

    tempo(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[todo] write the report"));
}

#[test]
fn task_lifecycle_updates_stats() {
    let dir = TempDir::new().unwrap();

    tempo(&dir).args(["task", "add", "ship it"]).assert().success();
    tempo(&dir)
        .args(["task", "start", "ship it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now doing: ship it"));
    tempo(&dir)
        .args(["task", "done", "ship it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: ship it"));

    tempo(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks done:      1"));
}

#[test]
fn starting_unknown_task_fails() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["task", "start", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn theme_set_persists_between_invocations() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    tempo(&dir)
        .args(["theme", "set", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    tempo(&dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn theme_set_rejects_unknown_value() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sepia"));
}

#[test]
fn theme_toggle_flips_twice_back_to_dark() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
    tempo(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn state_add_and_list_roundtrip() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .args(["state", "add", "deep", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created state: deep work"));

    tempo(&dir)
        .args(["state", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deep work — 0s"));
}

#[test]
fn no_subcommand_lists_tasks_when_not_interactive() {
    let dir = TempDir::new().unwrap();

    tempo(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks for"));
}

#[test]
fn completions_print_a_script() {
    Command::cargo_bin("tempo")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}
