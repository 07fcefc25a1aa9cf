//! The wizard core: answer set, question builder, and message formatter.

pub mod answers;
pub mod message;
pub mod questions;

pub use answers::{Answers, Confirm, ScopeAnswer};
pub use message::{MAX_LINE_WIDTH, build_commit};
pub use questions::{AnswerKey, Choice, ChoiceValue, Message, Question, QuestionKind, build_questions};
