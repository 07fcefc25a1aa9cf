//! External editor round-trip for manual commit message edits.
//!
//! The message is written to a temp file, the user's editor is launched
//! against it, and the file is read back only when the editor exits with
//! status zero. A non-zero exit means the user declined the edit.

use std::env;
use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::EditorError;

/// Result of the editor round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Editor exited zero; contains the (possibly unchanged) file contents.
    Edited(String),
    /// Editor exited non-zero; the commit should not proceed.
    Declined,
}

/// Resolve the editor command: `$VISUAL`, then `$EDITOR`, then `vi` when
/// one is on the PATH. The variable may carry arguments (`code --wait`).
fn resolve_editor() -> Result<Vec<String>, EditorError> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(value) = env::var(var) {
            let parts: Vec<String> = value.split_whitespace().map(str::to_string).collect();
            if !parts.is_empty() {
                return Ok(parts);
            }
        }
    }

    if which::which("vi").is_ok() {
        return Ok(vec!["vi".to_string()]);
    }

    Err(EditorError::NoEditor)
}

/// Open `initial` in the user's editor and report the outcome.
pub fn edit_message(initial: &str) -> Result<EditOutcome, EditorError> {
    let mut file = NamedTempFile::new().map_err(EditorError::TempFile)?;
    file.write_all(initial.as_bytes())
        .map_err(EditorError::TempFile)?;
    file.flush().map_err(EditorError::TempFile)?;

    let command = resolve_editor()?;
    debug!(editor = %command.join(" "), path = %file.path().display(), "launching editor");

    let status = Command::new(&command[0])
        .args(&command[1..])
        .arg(file.path())
        .status()
        .map_err(|e| EditorError::SpawnFailed {
            editor: command[0].clone(),
            source: e,
        })?;

    if !status.success() {
        debug!(?status, "editor exited non-zero, treating as declined");
        return Ok(EditOutcome::Declined);
    }

    let edited = std::fs::read_to_string(file.path()).map_err(EditorError::ReadBack)?;
    Ok(EditOutcome::Edited(edited))
}
