//! epistle - An interactive CLI wizard that builds conventional commit messages.
//!
//! # Overview
//!
//! epistle asks a fixed sequence of questions (type, scope, subject, body,
//! breaking change, issue references, confirmation), formats the answers
//! into a conventional-commit message, and hands the message to a commit
//! action. The message can optionally pass through an external editor
//! before committing.

pub mod config;
pub mod editor;
pub mod error;
pub mod flow;
pub mod git;
pub mod prompt;
pub mod wizard;

// Re-export commonly used types
pub use config::{CommitType, Config, Scope};
pub use error::{CommitError, ConfigError, EditorError, FlowError, PromptError};
pub use flow::{WizardOutcome, run_wizard};
pub use prompt::{PromptInterface, TerminalPrompt, run_questions};
pub use wizard::{Answers, Confirm, ScopeAnswer, build_commit, build_questions};
