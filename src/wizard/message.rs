//! Pure commit-message formatting.
//!
//! `build_commit` is a projection of the answer set onto a single string.
//! It never fails and never mutates its inputs; absent optional fields
//! simply contribute nothing to the output.

use textwrap::{Options, WordSplitter};

use crate::wizard::answers::Answers;

/// The single hard limit in the system: the head line is cut at this many
/// characters, and the later sections are word-wrapped at the same width.
pub const MAX_LINE_WIDTH: usize = 100;

/// Build the full commit message from a completed answer set.
///
/// Layout:
/// ```text
/// type(scope): subject
///
/// wrapped body
///
/// BREAKING CHANGE:
/// wrapped breaking text
///
/// ISSUES CLOSED: wrapped footer
/// ```
pub fn build_commit(answers: &Answers) -> String {
    let head = head_line(answers);

    let body = wrap(answers.body.as_deref());
    // `|` in the body marks a manual line break.
    let body = body.replace('|', "\n");

    let breaking = wrap(answers.breaking.as_deref());
    let footer = wrap(answers.footer.as_deref());

    let mut result = head;

    if !body.is_empty() {
        result.push_str("\n\n");
        result.push_str(&body);
    }

    if !breaking.is_empty() {
        result.push_str("\n\nBREAKING CHANGE:\n");
        result.push_str(&breaking);
    }

    if !footer.is_empty() {
        result.push_str("\n\nISSUES CLOSED: ");
        result.push_str(&footer);
    }

    escape_special_chars(&result)
}

/// `type + scope segment + subject`, hard-cut at [`MAX_LINE_WIDTH`].
///
/// The cut is not word-aware; the scope-prefixed segment survives verbatim
/// because types and scopes are short in practice.
fn head_line(answers: &Answers) -> String {
    let commit_type = answers.commit_type.as_deref().unwrap_or_default();
    let subject = answers.subject.as_deref().unwrap_or_default().trim();

    let head = match answers.effective_scope() {
        // No scope configured or type is WIP.
        None => format!("{commit_type}: {subject}"),
        Some(scope) => format!("{commit_type}({}): {subject}", scope.trim()),
    };

    head.chars().take(MAX_LINE_WIDTH).collect()
}

/// Word-wrap optional text at [`MAX_LINE_WIDTH`], joining lines with `\n`.
///
/// Long words are never broken, and hyphens are not treated as break
/// points, so wrapping can only happen between whitespace-separated words.
fn wrap(text: Option<&str>) -> String {
    let text = text.unwrap_or_default().trim();
    if text.is_empty() {
        return String::new();
    }

    let options = Options::new(MAX_LINE_WIDTH)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);

    textwrap::wrap(text, options).join("\n")
}

/// Double-escape backticks so consumers that re-escape once still display
/// a literal backtick.
fn escape_special_chars(message: &str) -> String {
    message.replace('`', "\\\\`")
}
