//! The ordered question set driving the wizard.
//!
//! Each question is a descriptor: what answer key it fills, how it is asked,
//! and optional `when`/`choices`/`validate`/`filter` behavior carried as
//! first-class closures. The prompt driver in [`crate::prompt`] walks the
//! list in order; it never hard-codes wizard semantics.

use console::style;

use crate::config::Config;
use crate::wizard::answers::{Answers, Confirm, ScopeAnswer};
use crate::wizard::message::build_commit;

/// Rule printed above the rendered commit message at the confirmation step.
const PREVIEW_RULE: &str = "###--------------------------------------------------------###";

/// Which answer field a question fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    Type,
    Scope,
    CustomScope,
    Subject,
    Body,
    Breaking,
    Footer,
    Confirm,
}

/// A value carried by a select choice.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceValue {
    Type(String),
    Scope(ScopeAnswer),
}

/// One entry in a select list. A `value` of `None` is a visual divider;
/// picking it re-asks the question.
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub value: Option<ChoiceValue>,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: ChoiceValue) -> Self {
        Choice {
            label: label.into(),
            value: Some(value),
        }
    }

    pub fn divider() -> Self {
        Choice {
            label: "──────────────".to_string(),
            value: None,
        }
    }
}

/// A prompt message: fixed text, or computed from the answers so far.
pub enum Message {
    Static(String),
    Dynamic(Box<dyn Fn(&Answers) -> String>),
}

impl Message {
    pub fn render(&self, answers: &Answers) -> String {
        match self {
            Message::Static(text) => text.clone(),
            Message::Dynamic(f) => f(answers),
        }
    }
}

/// How a question is asked.
pub enum QuestionKind {
    /// Single-choice list; the choice set may depend on earlier answers.
    Select {
        choices: Box<dyn Fn(&Answers) -> Vec<Choice>>,
    },
    /// Free-text input.
    Input,
    /// The three-way confirmation (proceed / abort / edit).
    ExpandConfirm { options: Vec<(String, Confirm)> },
    /// No prompt: assigns a default answer before later questions run.
    Preset { apply: Box<dyn Fn(&mut Answers)> },
}

/// A single question descriptor.
pub struct Question {
    pub key: AnswerKey,
    pub kind: QuestionKind,
    pub message: Message,
    /// Visibility predicate; a skipped question leaves its key unset.
    pub when: Option<Box<dyn Fn(&Answers) -> bool>>,
    /// Input validation; the prompt is re-asked while this returns false.
    pub validate: Option<Box<dyn Fn(&str) -> bool>>,
    /// Transformation applied to the raw value before storage.
    pub filter: Option<Box<dyn Fn(String) -> String>>,
}

impl Question {
    fn new(key: AnswerKey, kind: QuestionKind, message: Message) -> Self {
        Question {
            key,
            kind,
            message,
            when: None,
            validate: None,
            filter: None,
        }
    }
}

/// Build the full ordered question set for a configuration.
pub fn build_questions(config: &Config) -> Vec<Question> {
    vec![
        type_question(config),
        preset_custom_scope(config),
        scope_question(config),
        custom_scope_question(),
        subject_question(),
        body_question(),
        breaking_question(config),
        footer_question(),
        confirm_question(),
    ]
}

fn type_question(config: &Config) -> Question {
    let choices: Vec<Choice> = config
        .types
        .iter()
        .map(|t| {
            let label = match &t.description {
                Some(desc) => format!(
                    "{} ({}{})",
                    style(&t.key).yellow(),
                    t.name,
                    style(format!(" - {desc}")).dim()
                ),
                None => format!("{} ({})", style(&t.key).yellow(), t.name),
            };
            Choice::new(label, ChoiceValue::Type(t.key.clone()))
        })
        .collect();

    Question::new(
        AnswerKey::Type,
        QuestionKind::Select {
            choices: Box::new(move |_| choices.clone()),
        },
        Message::Static(
            style("Select the type of change that you're committing:")
                .green()
                .to_string(),
        ),
    )
}

/// When the chosen type has no configured scopes, default the scope answer
/// to `Custom` so the free-text scope prompt fires. This replaces the
/// legacy adapter's trick of assigning inside the scope prompt's `when`.
fn preset_custom_scope(config: &Config) -> Question {
    let when_config = config.clone();
    let mut question = Question::new(
        AnswerKey::Scope,
        QuestionKind::Preset {
            apply: Box::new(|answers| {
                answers.scope = Some(ScopeAnswer::Custom);
            }),
        },
        Message::Static(String::new()),
    );
    question.when = Some(Box::new(move |answers| {
        let type_key = answers.commit_type.as_deref().unwrap_or_default();
        when_config.scopes_for(type_key).is_empty()
    }));
    question
}

fn scope_question(config: &Config) -> Question {
    let choices_config = config.clone();
    let when_config = config.clone();

    let mut question = Question::new(
        AnswerKey::Scope,
        QuestionKind::Select {
            choices: Box::new(move |answers| {
                let type_key = answers.commit_type.as_deref().unwrap_or_default();
                let scopes = choices_config.scopes_for(type_key);

                let mut choices: Vec<Choice> = scopes
                    .iter()
                    .map(|s| Choice::new(s.name.clone(), ChoiceValue::Scope(ScopeAnswer::Named(s.name.clone()))))
                    .collect();

                if choices_config.allow_custom_scopes || choices.is_empty() {
                    choices.push(Choice::divider());
                    choices.push(Choice::new("empty", ChoiceValue::Scope(ScopeAnswer::Empty)));
                    choices.push(Choice::new("custom", ChoiceValue::Scope(ScopeAnswer::Custom)));
                }

                choices
            }),
        },
        Message::Static(
            style("Select the SCOPE of this change (optional):")
                .green()
                .to_string(),
        ),
    );

    question.when = Some(Box::new(move |answers| {
        let type_key = answers.commit_type.as_deref().unwrap_or_default();
        // No configured scopes: the preset already forced Custom.
        !when_config.scopes_for(type_key).is_empty() && !answers.is_wip()
    }));

    question
}

fn custom_scope_question() -> Question {
    let mut question = Question::new(
        AnswerKey::CustomScope,
        QuestionKind::Input,
        Message::Static(style("Denote the SCOPE of this change:").green().to_string()),
    );
    question.when = Some(Box::new(|answers| {
        answers.scope == Some(ScopeAnswer::Custom)
    }));
    question
}

fn subject_question() -> Question {
    let mut question = Question::new(
        AnswerKey::Subject,
        QuestionKind::Input,
        Message::Static(
            style("Write a SHORT, IMPERATIVE tense description of the change:")
                .green()
                .to_string(),
        ),
    );
    question.validate = Some(Box::new(|value| !value.trim().is_empty()));
    question.filter = Some(Box::new(|value| {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => value,
        }
    }));
    question
}

fn body_question() -> Question {
    Question::new(
        AnswerKey::Body,
        QuestionKind::Input,
        Message::Static(
            style("Provide a LONGER description of the change (optional). Use \"|\" to break new line:")
                .green()
                .to_string(),
        ),
    )
}

fn breaking_question(config: &Config) -> Question {
    let when_config = config.clone();
    let mut question = Question::new(
        AnswerKey::Breaking,
        QuestionKind::Input,
        Message::Static(style("List any BREAKING CHANGES (optional):").green().to_string()),
    );
    question.when = Some(Box::new(move |answers| {
        let type_key = answers.commit_type.as_deref().unwrap_or_default();
        when_config.allows_breaking_changes(type_key)
    }));
    question
}

fn footer_question() -> Question {
    let mut question = Question::new(
        AnswerKey::Footer,
        QuestionKind::Input,
        Message::Static(
            style("List any ISSUES CLOSED by this change (optional). E.g.: #31, #34:")
                .green()
                .to_string(),
        ),
    );
    question.when = Some(Box::new(|answers| !answers.is_wip()));
    question
}

fn confirm_question() -> Question {
    Question::new(
        AnswerKey::Confirm,
        QuestionKind::ExpandConfirm {
            options: vec![
                ("Yes".to_string(), Confirm::Yes),
                ("Abort commit".to_string(), Confirm::No),
                ("Edit message".to_string(), Confirm::Edit),
            ],
        },
        Message::Dynamic(Box::new(|answers| {
            format!(
                "\n{PREVIEW_RULE}\n{}\n{PREVIEW_RULE}\n{}",
                build_commit(answers),
                style("Are you sure you want to proceed with the commit above?").red()
            )
        })),
    )
}
