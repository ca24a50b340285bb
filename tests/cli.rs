// Runs the built binary for the failure paths that end before any
// network traffic.

use std::process::{Command, Output};

fn send_image(api_key: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_send-image"));
    cmd.args(args).env_remove("RUST_LOG");
    match api_key {
        Some(key) => cmd.env("API_KEY", key),
        None => cmd.env_remove("API_KEY"),
    };
    cmd.output().expect("failed to run send-image")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_api_key() {
    let output = send_image(None, &["10", "20", "cat.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("API_KEY is not set"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_api_key() {
    let output = send_image(Some(""), &["10", "20", "cat.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("API_KEY is not set"));
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    for args in [&[][..], &["10"][..], &["10", "20"][..], &["1", "2", "a", "b"][..]] {
        let output = send_image(Some("secret123"), args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&output).contains("Usage:"), "args: {args:?}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_non_integer_coordinate() {
    let output = send_image(Some("secret123"), &["ten", "20", "cat.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ten"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat.png");
    let output = send_image(Some("secret123"), &["10", "20", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error opening file"), "{err}");
    assert!(err.contains("No such file"), "{err}");
}
