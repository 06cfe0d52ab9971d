//! Shared helpers for CLI integration tests.
#![allow(dead_code)]

use std::process::{Command, Output};

/// Runs the built `dicebeacon` binary with `args` and a clean environment
/// for its own variables.
pub fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dicebeacon"))
        .args(args)
        .env_remove("DICEBEACON_STEPS")
        .env_remove("DICEBEACON_CADENCE")
        .env_remove("DICEBEACON_FORMAT")
        .env_remove("DICEBEACON_LOG_JSON")
        .env_remove("RUST_LOG")
        .output()
        .expect("dicebeacon binary runs")
}

/// Stdout of a finished run as UTF-8.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// Stderr of a finished run as UTF-8.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}
