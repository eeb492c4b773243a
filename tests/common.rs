// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not by library_api.rs.
pub fn lineembed_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lineembed"));
    cmd.env_remove("RUST_LOG");
    cmd
}
