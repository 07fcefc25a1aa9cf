//! Post-commit steps: push and an optional release command.
//!
//! Shell-outs use `std::process::Command` so they inherit the user's git
//! config, SSH agent, and credential store.

use std::process::Command;

use tracing::debug;

use crate::error::FlowError;

/// `git push --follow-tags`.
pub fn push_with_tags() -> Result<(), FlowError> {
    run_git(&["push", "--follow-tags"], "push")
}

/// Run the configured release command through the shell.
///
/// `None` is not an error: the legacy adapter just logged that no release
/// script was defined and moved on.
pub fn run_release_command(command: Option<&str>) -> Result<(), FlowError> {
    let Some(command) = command else {
        println!("Release script is not defined.");
        return Ok(());
    };

    debug!(%command, "running release command");

    let status = Command::new("sh")
        .args(["-c", command])
        .status()
        .map_err(|e| FlowError::CommandSpawnFailed {
            command: command.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(FlowError::CommandFailed {
            command: command.to_string(),
            status: status.to_string(),
        });
    }

    Ok(())
}

/// Run a git command and return success or a descriptive error.
fn run_git(args: &[&str], operation: &str) -> Result<(), FlowError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| FlowError::CommandSpawnFailed {
            command: format!("git {}", args.join(" ")),
            source: e,
        })?;

    if !output.status.success() {
        return Err(FlowError::GitCommandFailed {
            operation: operation.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
