//! End-to-end tests for the lolcat binary.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{color_codes, lolcat, strip_escapes, temp_file};

// ============================================================================
// Help, Version and Argument Errors
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    lolcat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("horizontal_speed"))
        .stdout(predicate::str::contains("Force color"))
        .stdout(predicate::str::contains("fortune | lolcat"));
}

#[test]
fn help_is_plain_when_piped() {
    lolcat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn forced_help_is_colorized() {
    lolcat()
        .args(["-f", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;"))
        .stdout(predicate::str::ends_with("\x1b[0m"));
}

#[test]
fn help_uses_requested_gradient() {
    let output = lolcat()
        .args(["-f", "-h", "0", "-v", "0", "--help"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(color_codes(&stdout).len(), 1);
}

#[test]
fn forced_version_uses_requested_gradient() {
    let output = lolcat()
        .args(["-f", "-h", "0", "-v", "0", "--version"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(color_codes(&stdout).len(), 1);
    assert!(strip_escapes(stdout.as_bytes()).starts_with(b"lolcat "));
}

#[test]
fn version_exits_0() {
    lolcat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lolcat "));
}

#[test]
fn malformed_frequency_exits_1_with_usage() {
    lolcat()
        .args(["-h", "fast"])
        .write_stdin("text")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error parsing arguments"))
        .stderr(predicate::str::contains("Usage: lolcat"));
}

#[test]
fn missing_frequency_value_exits_1() {
    lolcat()
        .arg("-v")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: lolcat"));
}

#[test]
fn unknown_flag_exits_1() {
    lolcat().arg("-x").assert().code(1);
}

// ============================================================================
// Passthrough and Colorization
// ============================================================================

#[test]
fn piped_output_is_a_verbatim_copy() {
    let input = "plain \x1b[1mbold\x1b[0m text\n\tcafé\n";
    lolcat()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn forced_color_preserves_content() {
    let input = "Hello, rainbow!\nSecond line\n";
    let output = lolcat().arg("-f").write_stdin(input).assert().success();
    let stdout = &output.get_output().stdout;

    assert!(stdout.starts_with(b"\x1b[38;5;"));
    assert!(stdout.ends_with(b"\x1b[0m"));
    assert_eq!(strip_escapes(stdout), input.as_bytes());
}

#[test]
fn zero_frequencies_emit_a_single_color() {
    let output = lolcat()
        .args(["-f", "-h", "0", "-v", "0"])
        .write_stdin("AB\nCD")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert_eq!(color_codes(&stdout).len(), 1);
    assert!(stdout.ends_with("AB\nCD\x1b[0m"));
}

#[test]
fn negative_frequencies_are_accepted() {
    let output = lolcat()
        .args(["-f", "-h", "-1.5", "-v", "-4"])
        .write_stdin("negative\nfrequencies\n")
        .assert()
        .success();
    let stdout = &output.get_output().stdout;
    assert_eq!(strip_escapes(stdout), b"negative\nfrequencies\n");
}

#[test]
fn random_offset_keeps_content() {
    let output = lolcat()
        .args(["-f", "-r"])
        .write_stdin("random")
        .assert()
        .success();
    assert_eq!(strip_escapes(&output.get_output().stdout), b"random");
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn files_and_stdin_are_concatenated_in_order() {
    let dir = TempDir::new().unwrap();
    let f = temp_file(&dir, "f.txt", b"first\n");
    let g = temp_file(&dir, "g.txt", b"last\n");

    lolcat()
        .arg(&f)
        .arg("-")
        .arg(&g)
        .write_stdin("middle\n")
        .assert()
        .success()
        .stdout("first\nmiddle\nlast\n");
}

#[test]
fn unreadable_file_is_skipped_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let good = temp_file(&dir, "good.txt", b"still here\n");

    lolcat()
        .arg(&missing)
        .arg(&good)
        .assert()
        .success()
        .stdout("still here\n")
        .stderr(predicate::str::contains("lolcat: "))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn invalid_utf8_stops_only_that_file() {
    let dir = TempDir::new().unwrap();
    let bad = temp_file(&dir, "bad.txt", b"ok\xff never shown");
    let good = temp_file(&dir, "good.txt", b"next");

    let output = lolcat()
        .arg("-f")
        .arg(&bad)
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("bad.txt"))
        .stderr(predicate::str::contains("valid UTF-8"));
    assert_eq!(strip_escapes(&output.get_output().stdout), b"oknext");
}

#[test]
fn system_c_locale_decodes_single_bytes() {
    let output = lolcat()
        .args(["-f", "-l"])
        .env("LC_ALL", "C")
        .write_stdin(&b"a\xffb"[..])
        .assert()
        .success();
    assert_eq!(strip_escapes(&output.get_output().stdout), b"a\xffb");
}

#[test]
fn unknown_locale_warns_and_falls_back_to_utf8() {
    lolcat()
        .arg("-l")
        .env("LC_ALL", "xx_XX.bogus")
        .write_stdin("hi")
        .assert()
        .success()
        .stdout("hi")
        .stderr(predicate::str::contains("Error setting locale"))
        .stderr(predicate::str::contains("xx_XX.bogus"));
}

#[test]
fn utf8_locale_decodes_multibyte_text() {
    let output = lolcat()
        .args(["-f", "-l"])
        .env("LC_ALL", "en_US.UTF-8")
        .write_stdin("héllo")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert_eq!(strip_escapes(&output.get_output().stdout), "héllo".as_bytes());
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn skipped_source_is_logged_when_logging_is_enabled() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    lolcat()
        .arg(&missing)
        .env("LOLCAT_LOG", "warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn diagnostics_are_not_logged_by_default() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    lolcat()
        .arg(&missing)
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN").not());
}

// ============================================================================
// Configuration File
// ============================================================================

#[test]
fn config_file_can_force_color() {
    let dir = TempDir::new().unwrap();
    let config = temp_file(&dir, "config.toml", b"force_color = true\n");

    lolcat()
        .env("LOLCAT_CONFIG", &config)
        .write_stdin("configured")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[38;5;"));
}

#[test]
fn malformed_config_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let config = temp_file(&dir, "config.toml", b"force_color = perhaps\n");

    lolcat()
        .env("LOLCAT_CONFIG", &config)
        .write_stdin("defaults")
        .assert()
        .success()
        .stdout("defaults")
        .stderr(predicate::str::contains("config.toml"));
}
