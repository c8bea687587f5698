//! Integration tests for the myfc-favorites binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const JAWLINE: &str = r#"{
    "id": "w1",
    "title": "Jawline Basics",
    "type": "strength",
    "duration": 600,
    "difficulty": "beginner",
    "instructor": "Coach Dana",
    "thumbnailUrl": "https://cdn.example.com/w1.jpg",
    "videoUrl": "https://cdn.example.com/w1.mp4",
    "publishedDate": "2024-01-15"
}"#;

const CHIN_TUCK: &str = r#"{
    "id": "m1",
    "title": "Chin Tuck",
    "category": "posture",
    "instructor": "Coach Sam",
    "thumbnailUrl": "https://cdn.example.com/m1.jpg",
    "videoUrl": "https://cdn.example.com/m1.mp4",
    "dateAdded": "2024-02-01"
}"#;

/// A command isolated from the user's real home and environment.
fn favorites(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("myfc-favorites"));
    cmd.env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("MYFC_DATA_DIR")
        .env_remove("MYFC_SCOPE")
        .env_remove("MYFC_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(temp.path().join("favorites"));
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("myfc-favorites"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("workouts and movements"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("myfc-favorites"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_empty_favorites() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    favorites(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workouts (0)"))
        .stdout(predicate::str::contains("Movements (0)"));
    Ok(())
}

#[test]
fn cli_toggle_then_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["toggle", "workout", "--record", JAWLINE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added workout \"Jawline Basics\""));

    favorites(&temp)
        .args(["check", "workout", "w1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is favorited"));

    favorites(&temp)
        .args(["check", "movement", "w1"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_toggle_twice_unfavorites() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    for _ in 0..2 {
        favorites(&temp)
            .args(["toggle", "workout", "--record", JAWLINE])
            .assert()
            .success();
    }

    favorites(&temp)
        .args(["check", "workout", "w1"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_add_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["add", "movement", "--file", "-"])
        .write_stdin(CHIN_TUCK)
        .assert()
        .success();

    favorites(&temp)
        .args(["list", "--kind", "movement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movements (1)"))
        .stdout(predicate::str::contains("Chin Tuck"));
    Ok(())
}

#[test]
fn cli_add_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let record = temp.path().join("w1.json");
    fs::write(&record, JAWLINE)?;

    favorites(&temp)
        .args(["add", "workout", "--file"])
        .arg(&record)
        .assert()
        .success();

    favorites(&temp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": 1"))
        .stdout(predicate::str::contains("\"id\": \"w1\""));
    Ok(())
}

#[test]
fn cli_invalid_record_fails_without_change() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["toggle", "workout", "--record", r#"{"id": "w1", "title": "No media"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid workout record"));

    favorites(&temp)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 0"));
    Ok(())
}

#[test]
fn cli_remove_absent_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    favorites(&temp)
        .args(["remove", "workout", "w9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not favorited"));
    Ok(())
}

#[test]
fn cli_users_are_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["--user", "alice", "toggle", "workout", "--record", JAWLINE])
        .assert()
        .success();

    favorites(&temp)
        .args(["--user", "bob", "check", "workout", "w1"])
        .assert()
        .code(1);

    favorites(&temp)
        .args(["check", "workout", "w1"])
        .assert()
        .code(1);

    favorites(&temp)
        .args(["--user", "alice", "check", "workout", "w1"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_scope_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .env("MYFC_SCOPE", "alice")
        .args(["toggle", "workout", "--record", JAWLINE])
        .assert()
        .success();

    favorites(&temp)
        .args(["--user", "alice", "check", "workout", "w1"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_clear_requires_force() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["--user", "alice", "add", "workout", "--record", JAWLINE])
        .assert()
        .success();

    favorites(&temp)
        .args(["--user", "alice", "clear"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    favorites(&temp)
        .args(["--user", "alice", "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 favorites for user:alice"));

    favorites(&temp)
        .args(["--user", "alice", "check", "workout", "w1"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_corrupt_snapshot_loads_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["add", "workout", "--record", JAWLINE])
        .assert()
        .success();

    let data_dir = temp.path().join("favorites");
    for entry in fs::read_dir(&data_dir)? {
        fs::write(entry?.path(), "{ not json")?;
    }

    favorites(&temp)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stored\": \"unreadable\""))
        .stdout(predicate::str::contains("\"total\": 0"));
    Ok(())
}

#[test]
fn cli_config_file_sets_scope() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("config.yml");
    fs::write(&config, "scope: carol\n")?;

    favorites(&temp)
        .arg("--config")
        .arg(&config)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"scope\": \"user:carol\""));
    Ok(())
}

#[test]
fn cli_missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    favorites(&temp)
        .args(["--config", "/nonexistent/config.yml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    favorites(&temp)
        .args(["--quiet", "add", "workout", "--record", JAWLINE])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    favorites(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("myfc-favorites"));
    Ok(())
}
