// charsan/tests/cli_integration_tests.rs
//! Command-line integration tests for the `charsan` binary.
//!
//! Each test runs the binary with an isolated home and config directory so no
//! user preset file leaks into the results.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn charsan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("charsan").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("CHARSAN_CONFIG")
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

#[test]
fn test_sanitizes_positional_values_with_default_preset() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["  abc123", "fooBar3"])
        .assert()
        .success()
        .stdout("abc123\nfoobar3\n");
    Ok(())
}

#[test]
fn test_reads_stdin_lines() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["--preset", "slug"])
        .write_stdin("Hello World!\n  Rust & Cargo  \n")
        .assert()
        .success()
        .stdout("hello-world\nrust---cargo\n");
    Ok(())
}

#[test]
fn test_overrides_beat_preset() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["-c", "acdeghijklmnopqrstuvwxyz0-9", "-r", "_", "fooBar3"])
        .assert()
        .success()
        .stdout("oo_ar3\n");
    charsan(&home)
        .args(["-c", "A-Z0-9", "fooBar3"])
        .assert()
        .success()
        .stdout("FOOBAR3\n");
    Ok(())
}

#[test]
fn test_json_mode_passes_null_through() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .arg("--json")
        .write_stdin("null\n\"Foo Bar\"\n123\n")
        .assert()
        .success()
        .stdout("null\n\"foo-bar\"\n\"123\"\n");
    Ok(())
}

#[test]
fn test_unsanitizable_input_fails() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["-c", "a-z", "--", "---"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be sanitized"));
    Ok(())
}

#[test]
fn test_keep_going_reports_and_continues() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["--keep-going", "-c", "a-z", "!!!", "abc"])
        .assert()
        .failure()
        .stdout("abc\n")
        .stderr(predicate::str::contains("input 1:"))
        .stderr(predicate::str::contains("1 of 2 inputs failed"));
    Ok(())
}

#[test]
fn test_invalid_charset_and_replacement() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["-c", "x-y-z", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported range 'x-y'"));
    charsan(&home)
        .args(["-r", "xy", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one character"));
    Ok(())
}

#[test]
fn test_invalid_trim_mode_is_a_usage_error() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["--trim", "middle", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("middle"));
    Ok(())
}

#[test]
fn test_unknown_preset() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .args(["--preset", "nope", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'nope'"));
    Ok(())
}

#[test]
fn test_custom_config_file() -> Result<()> {
    let home = TempDir::new()?;
    let config_path = home.path().join("presets.yaml");
    fs::write(
        &config_path,
        r#"
presets:
  - name: dotted
    charset: "a-z."
    replacement: "."
    trim_mode: both
"#,
    )?;
    charsan(&home)
        .args(["--config", config_path.to_str().unwrap(), "--preset", "dotted", " Com Example App "])
        .assert()
        .success()
        .stdout("com.example.app\n");
    Ok(())
}

#[test]
fn test_user_presets_discovered_in_home() -> Result<()> {
    let home = TempDir::new()?;
    let dir = home.path().join(".charsan");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("presets.yaml"),
        r#"
presets:
  - name: slug
    charset: "a-z0-9"
    replacement: "_"
    trim_mode: both
"#,
    )?;
    charsan(&home)
        .args(["--preset", "slug", "Hello World"])
        .assert()
        .success()
        .stdout("hello_world\n");
    Ok(())
}

#[test]
fn test_list_presets() -> Result<()> {
    let home = TempDir::new()?;
    charsan(&home)
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("slug").and(predicate::str::contains("identifier")));
    Ok(())
}
