//! Common utilities for CLI E2E tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Invoke the CLI with `home` as its data directory.
pub fn run_cli(home: &Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cardpile"))
        .args(args)
        .env("CARDPILE_HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(mut pipe) = child.stdin.take() {
        // The CLI may exit before reading everything.
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Invoke a CLI command and expect success.
pub fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args, "");
    if code != 0 && !stderr.is_empty() {
        eprintln!("CLI error output: {}", stderr);
    }
    assert_eq!(code, 0, "CLI command failed with code {}: {:?}", code, args);
    stdout
}

/// Invoke a CLI command and expect failure.
pub fn run_cli_failure(home: &Path, args: &[&str]) -> (String, String, i32) {
    let (stdout, stderr, code) = run_cli(home, args, "");
    assert!(code != 0, "CLI command unexpectedly succeeded: {:?}", args);
    (stdout, stderr, code)
}

/// Parse every stdout line as JSON.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("Failed to parse JSON output"))
        .collect()
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack, needle
    );
}
