//! Wizard orchestration: questions → confirmation → (editor) → commit.

pub mod executor;

use tracing::debug;

use crate::config::Config;
use crate::editor::{EditOutcome, edit_message};
use crate::error::{CommitError, FlowError};
use crate::prompt::{PromptInterface, run_questions};
use crate::wizard::answers::Confirm;
use crate::wizard::questions::build_questions;
use crate::wizard::message::build_commit;

/// What the wizard ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The commit action ran with this message.
    Committed(String),
    /// The user aborted at the confirmation step (or never confirmed).
    Cancelled,
    /// The user chose to edit but the editor exited non-zero.
    EditorDeclined,
}

/// Run the full wizard and, on confirmation, invoke `commit` with the
/// final message. The commit action is called at most once.
pub fn run_wizard<P, F>(
    config: &Config,
    engine: &P,
    mut commit: F,
) -> Result<WizardOutcome, FlowError>
where
    P: PromptInterface,
    F: FnMut(&str) -> Result<(), CommitError>,
{
    let questions = build_questions(config);
    let answers = run_questions(&questions, engine)?;

    match answers.confirm {
        Some(Confirm::Yes) => {
            let message = build_commit(&answers);
            commit(&message)?;
            Ok(WizardOutcome::Committed(message))
        }
        Some(Confirm::Edit) => {
            let message = build_commit(&answers);
            match edit_message(&message)? {
                EditOutcome::Edited(edited) => {
                    commit(&edited)?;
                    Ok(WizardOutcome::Committed(edited))
                }
                EditOutcome::Declined => {
                    // Surface the pre-edit message for diagnostics only.
                    println!("Editor exited non-zero. Commit message was:\n{message}");
                    Ok(WizardOutcome::EditorDeclined)
                }
            }
        }
        _ => {
            debug!("no confirmation, cancelling");
            println!("Commit has been canceled.");
            Ok(WizardOutcome::Cancelled)
        }
    }
}
