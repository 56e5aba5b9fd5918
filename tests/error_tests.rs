//! Error scenario integration tests

use std::process::Command;

use tempfile::TempDir;

fn chatdesk_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatdesk"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key") && stderr.contains("voice_identifier"),
        "Expected error listing valid keys, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!home.path().join("chatdesk").join("config.toml").exists());
}

#[test]
fn config_set_invalid_backend() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["config", "set", "clipboard.backend", "xclip"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("xclip") && stderr.contains("arboard"),
        "Expected error about invalid backend, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["config", "set", "speech.audio_session", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn invalid_clipboard_backend_flag() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["clip", "paste", "--clipboard-backend", "pasteboard"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid clipboard backend"),
        "Expected backend error, got: {}",
        stderr
    );
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("chatdesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "voice_identifier = [").unwrap();

    // Broken config must not stop commands that don't depend on it
    let output = chatdesk_bin(&home)
        .args(["clip", "copy", "x", "--clipboard-backend", "memory"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}

#[test]
fn config_list_with_broken_file_fails() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("chatdesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "voice_identifier = [").unwrap();

    let output = chatdesk_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"), "Expected parse error, got: {}", stderr);
}

#[test]
fn config_list_with_no_file() {
    let home = TempDir::new().unwrap();
    let output = chatdesk_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("voice_identifier: (not set)"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn snapshot_at_zero_scale_fails() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("x.png");
    let output = chatdesk_bin(&home)
        .args(["snapshot", "--scale", "0"])
        .arg("--out")
        .arg(&out)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}
