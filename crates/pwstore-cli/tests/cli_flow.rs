use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pwstore"))
}

/// A command isolated from the user's home, config and environment.
fn pwstore(home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("PWSTORE_STORE")
        .env_remove("PWSTORE_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null());
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn pwstore");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait pwstore")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_generate_default_length() {
    let home = TempDir::new().unwrap();
    let output = pwstore(home.path()).arg("generate").output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines[0].chars().count(), 16);
    assert!(lines[1].starts_with("strength="));
    assert!(!home.path().join(".password-manager-store").exists());
}

#[test]
fn test_generate_without_symbols() {
    let home = TempDir::new().unwrap();
    let output = pwstore(home.path())
        .args(["generate", "--length", "24", "--no-symbols"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let password = &stdout_lines(&output)[0];
    assert_eq!(password.len(), 24);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(!password.chars().any(|c| "0O1lI".contains(c)));
}

#[test]
fn test_generate_rejects_bad_options() {
    let home = TempDir::new().unwrap();
    let short = pwstore(home.path())
        .args(["generate", "--length", "4"])
        .output()
        .unwrap();
    assert_eq!(short.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&short.stderr).contains("between 8 and 64"));

    let empty = pwstore(home.path())
        .args([
            "generate",
            "--no-upper",
            "--no-lower",
            "--no-digits",
            "--no-symbols",
        ])
        .output()
        .unwrap();
    assert_eq!(empty.status.code(), Some(4));
}

#[test]
fn test_generate_honors_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("pwstore");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[generator]\nlength = 20\ndigits = false\n",
    )
    .unwrap();

    let output = pwstore(home.path()).arg("generate").output().unwrap();
    assert!(output.status.success());
    let password = &stdout_lines(&output)[0];
    assert_eq!(password.len(), 20);
    assert!(!password.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[generator\n").unwrap();

    let output = pwstore(home.path())
        .arg("--config")
        .arg(&path)
        .arg("generate")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("broken.toml"));
}

#[test]
fn test_strength_from_stdin() {
    let home = TempDir::new().unwrap();
    let mut cmd = pwstore(home.path());
    cmd.arg("strength");
    let output = run_with_stdin(cmd, "Tr0ub4dor&3x\n");
    assert!(output.status.success(), "{:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines, vec!["score=4/4", "strength=Strong"]);
}

#[test]
fn test_strength_of_weak_password() {
    let home = TempDir::new().unwrap();
    let mut cmd = pwstore(home.path());
    cmd.arg("strength");
    let output = run_with_stdin(cmd, "abc\n");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[1], "strength=Weak");
}

#[test]
fn test_status_prepares_fresh_store() {
    let home = TempDir::new().unwrap();
    let output = pwstore(home.path()).arg("status").output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let store = home.path().join(".password-manager-store");
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "pwstore status");
    assert_eq!(lines[1], format!("store={}", store.display()));
    assert_eq!(lines[2], "initialized=false");
    assert_eq!(lines[3], "entries=0");
    assert!(store.join(".checker").is_dir());
}

#[test]
fn test_status_with_store_flag() {
    let home = TempDir::new().unwrap();
    let store = home.path().join("elsewhere");
    let output = pwstore(home.path())
        .arg("--store")
        .arg(&store)
        .arg("status")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(store.join(".checker").is_dir());
    assert!(!home.path().join(".password-manager-store").exists());
}

#[test]
fn test_status_sees_bootstrapped_store() {
    let home = TempDir::new().unwrap();
    let store = home.path().join(".password-manager-store");
    let mut vault = pwstore_core::Vault::open(&store).unwrap();
    vault
        .bootstrap("correcthorse", "the quick brown fox jumps")
        .unwrap();
    let session = vault.login("correcthorse").unwrap();
    vault
        .add_entry(
            &session,
            "github",
            &pwstore_core::EntryFields {
                secret: "hunter2".into(),
                ..Default::default()
            },
        )
        .unwrap();

    let output = pwstore(home.path()).arg("status").output().unwrap();
    let lines = stdout_lines(&output);
    assert_eq!(lines[2], "initialized=true");
    assert_eq!(lines[3], "entries=1");
}

#[test]
fn test_status_with_unusable_store_is_fatal() {
    let home = TempDir::new().unwrap();
    let store = home.path().join("not-a-dir");
    std::fs::write(&store, "file in the way").unwrap();

    let output = pwstore(home.path())
        .arg("--store")
        .arg(&store)
        .arg("status")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error="));
}

#[test]
fn test_session_requires_terminal() {
    let home = TempDir::new().unwrap();
    let output = pwstore(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(!home.path().join(".password-manager-store").exists());
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let output = pwstore(home.path())
        .args(["completions", "bash"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("pwstore"));
}
