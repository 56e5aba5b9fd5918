//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with an isolated config directory
fn chatdesk(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("CHATDESK_VOICE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clip"))
        .stdout(predicate::str::contains("speak"))
        .stdout(predicate::str::contains("voices"))
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatdesk"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_uses_xdg_dir() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatdesk"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get_voice() {
    let home = TempDir::new().unwrap();

    chatdesk(&home)
        .args(["config", "set", "voice_identifier", "cmn"])
        .assert()
        .success();

    chatdesk(&home)
        .args(["config", "get", "voice_identifier"])
        .assert()
        .success()
        .stdout("cmn\n");

    let file = home.path().join("chatdesk").join("config.toml");
    let content = std::fs::read_to_string(file).unwrap();
    assert!(content.contains("voice_identifier = \"cmn\""));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();

    chatdesk(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created"));

    chatdesk(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_list_after_init_shows_defaults() {
    let home = TempDir::new().unwrap();
    chatdesk(&home).args(["config", "init"]).assert().success();

    chatdesk(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speech.preferred_language: zh"))
        .stdout(predicate::str::contains("speech.engine_bin: espeak-ng"))
        .stdout(predicate::str::contains("clipboard.backend: arboard"))
        .stdout(predicate::str::contains("voice_identifier: (not set)"));
}

#[test]
fn snapshot_writes_png() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("badge.png");

    chatdesk(&home)
        .args(["snapshot", "--scale", "1"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("142x40"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn moving_snapshot_writes_png() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("moving.png");

    chatdesk(&home)
        .args(["snapshot", "--moving", "--after-ms", "50"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("284x80"))
        .stderr(predicate::str::contains("at phase"));

    assert!(out.exists());
}

#[test]
fn clip_copy_with_memory_backend() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .args(["clip", "copy", "hello", "--clipboard-backend", "memory"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied"));
}

#[test]
fn clip_paste_from_empty_memory_backend_fails() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .args(["clip", "paste", "--clipboard-backend", "memory"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no text"));
}

#[test]
fn speak_from_empty_memory_clipboard_fails() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .args(["speak", "--from-clipboard", "--clipboard-backend", "memory"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no text"));
}

#[test]
fn speak_without_engine_fails() {
    let home = TempDir::new().unwrap();
    chatdesk(&home)
        .args(["config", "set", "speech.engine_bin", "chatdesk-missing-engine"])
        .assert()
        .success();

    chatdesk(&home)
        .args(["speak", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No voices"));
}
