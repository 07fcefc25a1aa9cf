//! Prompt engine boundary and the question driver.
//!
//! [`PromptInterface`] is the seam to the interactive terminal; the driver
//! [`run_questions`] owns all wizard semantics (visibility, validation
//! loops, filters, answer storage) so tests can script the interface.

pub mod terminal;

pub use terminal::TerminalPrompt;

use tracing::debug;

use crate::error::PromptError;
use crate::wizard::answers::{Answers, ScopeAnswer};
use crate::wizard::questions::{AnswerKey, ChoiceValue, Question, QuestionKind};

/// Primitive prompt operations.
///
/// This abstraction allows mocking the interactive terminal in tests.
#[cfg_attr(test, mockall::automock)]
pub trait PromptInterface {
    /// Ask the user to pick one of `items`; returns the chosen index.
    fn select(&self, message: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Ask the user for a line of free text. May be empty.
    fn input(&self, message: &str) -> Result<String, PromptError>;
}

/// Walk the question list in order and collect answers.
///
/// Skipped questions leave their key unset. `Preset` questions assign a
/// default without prompting. Free-text answers that are empty after
/// trimming are stored as `None`.
pub fn run_questions<P: PromptInterface>(
    questions: &[Question],
    engine: &P,
) -> Result<Answers, PromptError> {
    let mut answers = Answers::default();

    for question in questions {
        // Presets run before their `when`-gated siblings and never prompt.
        if let QuestionKind::Preset { apply } = &question.kind {
            if is_shown(question, &answers) {
                debug!(key = ?question.key, "applying preset answer");
                apply(&mut answers);
            }
            continue;
        }

        if !is_shown(question, &answers) {
            debug!(key = ?question.key, "question skipped");
            continue;
        }

        let message = question.message.render(&answers);

        match &question.kind {
            QuestionKind::Select { choices } => {
                let choices = choices(&answers);
                let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();

                // Dividers are selectable in the terminal; re-ask on one.
                let value = loop {
                    let index = engine.select(&message, &labels)?;
                    if let Some(value) = choices[index].value.clone() {
                        break value;
                    }
                };

                match value {
                    ChoiceValue::Type(key) => answers.commit_type = Some(key),
                    ChoiceValue::Scope(scope) => answers.scope = Some(scope),
                }
            }

            QuestionKind::Input => {
                let raw = loop {
                    let raw = engine.input(&message)?;
                    match &question.validate {
                        Some(validate) if !validate(&raw) => continue,
                        _ => break raw,
                    }
                };

                let value = match &question.filter {
                    Some(filter) => filter(raw),
                    None => raw,
                };

                store_text(&mut answers, question.key, value);
            }

            QuestionKind::ExpandConfirm { options } => {
                let labels: Vec<String> = options.iter().map(|(label, _)| label.clone()).collect();
                let index = engine.select(&message, &labels)?;
                answers.confirm = Some(options[index].1);
            }

            QuestionKind::Preset { .. } => unreachable!("presets handled above"),
        }
    }

    Ok(answers)
}

fn is_shown(question: &Question, answers: &Answers) -> bool {
    question.when.as_ref().map(|w| w(answers)).unwrap_or(true)
}

fn store_text(answers: &mut Answers, key: AnswerKey, value: String) {
    let trimmed_empty = value.trim().is_empty();

    match key {
        AnswerKey::CustomScope => {
            // An empty custom scope means no scope at all.
            answers.scope = Some(if trimmed_empty {
                ScopeAnswer::Empty
            } else {
                ScopeAnswer::Named(value)
            });
        }
        AnswerKey::Subject => answers.subject = Some(value),
        AnswerKey::Body => answers.body = (!trimmed_empty).then_some(value),
        AnswerKey::Breaking => answers.breaking = (!trimmed_empty).then_some(value),
        AnswerKey::Footer => answers.footer = (!trimmed_empty).then_some(value),
        AnswerKey::Type | AnswerKey::Scope | AnswerKey::Confirm => {
            unreachable!("{key:?} is not a free-text key")
        }
    }
}
