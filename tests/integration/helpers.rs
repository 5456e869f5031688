//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `lolcat` command isolated from the user's config and log settings.
pub fn lolcat() -> Command {
    let mut cmd = Command::cargo_bin("lolcat").expect("lolcat binary should be built");
    cmd.env("LOLCAT_CONFIG", "/nonexistent/lolcat/config.toml")
        .env_remove("LOLCAT_LOG");
    cmd
}

/// Write a fixture file into `dir`.
pub fn temp_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("fixture should be writable");
    path
}

/// Remove every escape sequence (ESC up to and including the next ASCII letter).
pub fn strip_escapes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_escape = false;
    for &b in bytes {
        if b == 0x1b {
            in_escape = true;
        } else if in_escape {
            if b.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            out.push(b);
        }
    }
    out
}

pub fn strip_escapes_str(s: &str) -> String {
    String::from_utf8(strip_escapes(s.as_bytes())).expect("stripping keeps UTF-8 intact")
}

/// Palette values of every `ESC[38;5;Nm` code, in order.
pub fn color_codes(s: &str) -> Vec<u8> {
    s.split("\x1b[38;5;")
        .skip(1)
        .filter_map(|rest| rest.split('m').next())
        .filter_map(|n| n.parse().ok())
        .collect()
}

#[test]
fn strip_escapes_removes_sgr() {
    assert_eq!(strip_escapes(b"\x1b[38;5;39mA\x1b[0m"), b"A");
}

#[test]
fn color_codes_parses_values() {
    assert_eq!(color_codes("\x1b[38;5;39mA\x1b[38;5;208mB"), vec![39, 208]);
}
