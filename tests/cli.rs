//! Integration tests driving the `sfx` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Run sfx with given args and optional stdin
fn run_sfx(args: &[&str], stdin: Option<&[u8]>) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sfx"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run sfx");

    {
        let mut input = child.stdin.take().expect("stdin is piped");
        if let Some(bytes) = stdin {
            input.write_all(bytes).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for sfx");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Write a fixture file unique to this test process
fn fixture_file(name: &str, content: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("sfx_test_fixtures")
        .join(format!("test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create fixture dir");
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_one_based_offsets_by_default() {
    let (out, _, ok) = run_sfx(&["banana", "ana"], None);
    assert!(ok);
    assert_eq!(out, "2 4\n");
}

#[test]
fn test_zero_based_offsets() {
    let (out, _, ok) = run_sfx(&["--zero-based", "abcabcabc", "abc"], None);
    assert!(ok);
    assert_eq!(out, "0 3 6\n");
}

#[test]
fn test_reads_text_and_pattern_from_stdin() {
    let (out, _, ok) = run_sfx(&[], Some(b"aaaa aa\n"));
    assert!(ok);
    assert_eq!(out, "1 2 3\n");
}

#[test]
fn test_no_match_is_success() {
    let (out, _, ok) = run_sfx(&["abc", "xyz"], None);
    assert!(ok);
    assert_eq!(out, "\n");
}

#[test]
fn test_count() {
    let (out, _, ok) = run_sfx(&["-c", "mississippi", "i"], None);
    assert!(ok);
    assert_eq!(out.trim(), "4");
}

#[test]
fn test_json() {
    let (out, _, ok) = run_sfx(&["--json", "banana", "ana"], None);
    assert!(ok);
    assert_eq!(out.trim(), r#"{"pattern":"ana","count":2,"offsets":[1,3]}"#);
}

#[test]
fn test_ignore_case() {
    let (out, _, ok) = run_sfx(&["-i", "-z", "Abc aBC abc", "ABC"], None);
    assert!(ok);
    assert_eq!(out, "0 4 8\n");
}

#[test]
fn test_context_output() {
    let (out, _, ok) = run_sfx(&["-C", "1", "--color", "never", "banana", "ana"], None);
    assert!(ok);
    assert_eq!(out, "2:banan\n4:nana\n");
}

#[test]
fn test_text_file() {
    let path = fixture_file("text.txt", b"the cat sat on the mat\n");
    let (out, _, ok) = run_sfx(&["-z", "--text-file", path.to_str().unwrap(), "at"], None);
    assert!(ok);
    assert_eq!(out, "5 9 20\n");
}

#[test]
fn test_sentinel_inside_text_fails() {
    let (out, err, ok) = run_sfx(&["--sentinel", "a", "banana", "an"], None);
    assert!(!ok);
    assert!(out.is_empty());
    assert!(err.contains("Sentinel"), "stderr: {}", err);
}

#[test]
fn test_missing_pattern_fails() {
    let (_, err, ok) = run_sfx(&["banana"], None);
    assert!(!ok);
    assert!(err.contains("Missing PATTERN"), "stderr: {}", err);
}

#[test]
fn test_dump_without_pattern() {
    let (out, _, ok) = run_sfx(&["--dump", "banana"], None);
    assert!(ok);
    assert_eq!(out.lines().count(), 10);
    assert!(out.contains("|-> {banana$, "));
}

#[test]
fn test_stats() {
    let (out, _, ok) = run_sfx(&["--stats", "banana"], None);
    assert!(ok);
    assert!(out.contains("Suffix Tree Statistics"));
    assert!(out.contains("  Leaves:         7"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (out, err, ok) = run_sfx(&["-v", "banana", "na"], None);
    assert!(ok);
    assert_eq!(out, "3 5\n");
    assert!(err.contains("sfx: built tree over 6 bytes"));
    assert!(err.contains("sfx: 2 occurrence(s)"));
}
