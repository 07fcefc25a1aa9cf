//! Error types for epistle modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path} is not valid JSON: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the interactive prompt engine.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt interaction failed: {0}")]
    Interaction(#[source] std::io::Error),

    #[error("Prompt was aborted")]
    Aborted,
}

/// Errors from the external editor round-trip.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to create temporary file for editing: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("No editor found. Set VISUAL or EDITOR, or install vi")]
    NoEditor,

    #[error("Failed to launch editor '{editor}': {source}")]
    SpawnFailed {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read edited message back: {0}")]
    ReadBack(#[source] std::io::Error),
}

/// Errors from creating the git commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Not a git repository. Run epistle from within a git repository")]
    NotARepository(#[source] git2::Error),

    #[error("No changes to commit (working tree is clean)")]
    NoChanges,

    #[error("Failed to stage changes: {0}")]
    StagingFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Errors from the wizard orchestration and post-commit steps.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Commit(#[from] CommitError),

    #[error("git {operation} failed: {stderr}")]
    GitCommandFailed { operation: String, stderr: String },

    #[error("Command '{command}' exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Failed to run '{command}': {source}")]
    CommandSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
