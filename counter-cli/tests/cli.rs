// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use assert_cmd::Command;

// Nothing listens here, so every RPC call is refused immediately.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

fn counter() -> Command {
    Command::cargo_bin("counter").unwrap()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let output = counter().arg("--help").output().unwrap();
    assert!(output.status.success());
    let help = stdout(&output);
    for subcommand in ["read", "simulate", "increment"] {
        assert!(help.contains(subcommand), "missing {subcommand} in:\n{help}");
    }
}

#[test]
fn increment_help_lists_shared_flags() {
    let output = counter().args(["increment", "--help"]).output().unwrap();
    assert!(output.status.success());
    let help = stdout(&output);
    for flag in [
        "--endpoint",
        "--address",
        "--private-key",
        "--keystore-path",
        "--receipt-timeout-secs",
        "--confirmations",
    ] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
    assert!(help
        .to_lowercase()
        .contains("0x8384738c995d49c5b692560ae688fc8b51af1059"));
}

#[test]
fn rejects_malformed_address() {
    let output = counter()
        .args(["read", "--address", "0xnot-an-address"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn simulate_requires_an_account() {
    let output = counter()
        .args(["simulate", "--endpoint", DEAD_ENDPOINT])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no wallet account"));
}

#[test]
fn increment_without_account_is_a_no_op() {
    let output = counter()
        .args(["increment", "--endpoint", DEAD_ENDPOINT])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("no wallet account connected"));
}

#[test]
fn read_reports_unreachable_endpoint() {
    let output = counter()
        .args(["read", "--endpoint", DEAD_ENDPOINT])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("error"));
}
