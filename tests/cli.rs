use assert_cmd::prelude::*;
use assert_fs::{fixture::FileWriteStr, NamedTempFile};
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

fn stderr_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().failure().code(2);
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn blank_isbn_is_rejected_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;
    // an unroutable base url would fail with the transport message if a request was made
    cmd.args(["--base-url", "http://127.0.0.1:1", "lookup", "   "]);

    let stderr = stderr_of(&mut cmd);
    assert!(stderr.contains("Please enter an ISBN number"), "{stderr}");
    assert!(!stderr.contains("Failed to fetch book data"), "{stderr}");

    Ok(())
}

#[test]
fn connection_refused_shows_canned_message() -> Result<(), Box<dyn std::error::Error>> {
    for provider in ["open-library", "book-info"] {
        let mut cmd = Command::cargo_bin("bookfinder")?;
        cmd.args([
            "--quiet",
            "--provider",
            provider,
            "--base-url",
            "http://127.0.0.1:1",
            "lookup",
            "9780140449136",
        ]);

        let stderr = stderr_of(&mut cmd);
        assert!(
            stderr.contains("Failed to fetch book data. Please try again."),
            "{provider}: {stderr}"
        );
    }

    Ok(())
}

#[test]
fn unknown_provider_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfinder")?;
    cmd.args(["--provider", "google", "lookup", "9780140449136"]);

    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Unknown provider 'google'"), "{stderr}");

    Ok(())
}

#[test]
fn invalid_config_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("bookfinder.toml")?;
    file.write_str("retries = 3\n")?;

    let mut cmd = Command::cargo_bin("bookfinder")?;
    cmd.arg("--config").arg(file.path()).args(["lookup", "1"]);

    let stderr = stderr_of(&mut cmd);
    assert!(stderr.contains("Invalid configuration in"), "{stderr}");

    file.close()?;
    Ok(())
}
