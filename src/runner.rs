//! Command Runner Port
//!
//! Abstracts the external-tool invocation behind a narrow trait so the sync
//! facade can be exercised in tests without spawning real processes.

use std::io;
use std::process::{Command, Stdio};

/// Runs an external command to completion
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns the exit code (`None` when the process was terminated by a
    /// signal). Failure to launch surfaces as the `io::Error`.
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>>;
}

/// Production runner over `std::process::Command`
///
/// All three stdio streams are inherited so the tool's own progress and
/// error output reach the caller's environment unmodified, and prompts
/// (e.g. MFA) can still read from the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }
}

/// Check if the AWS CLI is installed and available
pub fn aws_cli_available() -> bool {
    Command::new("aws")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
