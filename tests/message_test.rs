//! Integration tests for the commit message formatter.

use epistle::wizard::answers::{Answers, ScopeAnswer};
use epistle::wizard::build_commit;

fn answers(commit_type: &str, subject: &str) -> Answers {
    Answers {
        commit_type: Some(commit_type.to_string()),
        subject: Some(subject.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_minimal_fields() {
    assert_eq!(build_commit(&answers("feat", "do it all")), "feat: do it all");
}

#[test]
fn test_scoped_message() {
    let mut a = answers("feat", "create a new cool feature");
    a.scope = Some(ScopeAnswer::Named("myScope".to_string()));
    assert_eq!(build_commit(&a), "feat(myScope): create a new cool feature");
}

#[test]
fn test_full_message_with_pipe_split_body() {
    let mut a = answers("feat", "create a new cool feature");
    a.scope = Some(ScopeAnswer::Named("myScope".to_string()));
    a.body = Some("-line1|-line2".to_string());
    a.breaking = Some("breaking".to_string());
    a.footer = Some("my footer".to_string());

    assert_eq!(
        build_commit(&a),
        "feat(myScope): create a new cool feature\n\n-line1\n-line2\n\nBREAKING CHANGE:\nbreaking\n\nISSUES CLOSED: my footer"
    );
}

#[test]
fn test_wip_suppresses_scope_segment() {
    let a = answers("WIP", "this is my work-in-progress");
    assert_eq!(build_commit(&a), "WIP: this is my work-in-progress");
}

#[test]
fn test_backtick_escaping() {
    let a = answers("feat", "with backticks `here`");
    assert_eq!(build_commit(&a), "feat: with backticks \\\\`here\\\\`");
}

#[test]
fn test_head_line_truncated_to_100_chars() {
    let subject = "0123456789-".repeat(10); // 110 chars
    let mut a = answers("feat", &subject);
    a.scope = Some(ScopeAnswer::Named("myScope".to_string()));
    a.body = Some(format!("{subject} body-second-line"));

    let message = build_commit(&a);
    let mut sections = message.split("\n\n");

    let head = sections.next().unwrap();
    let prefix = "feat(myScope): ";
    assert_eq!(head.len(), 100);
    assert_eq!(head, format!("{prefix}{}", &subject[..100 - prefix.len()]));

    // The body wraps instead of truncating.
    let body = sections.next().unwrap();
    assert_eq!(body, format!("{subject}\nbody-second-line"));
}

#[test]
fn test_footer_wraps_with_label_on_first_line() {
    // 95-char token: with the 15-char "ISSUES CLOSED: " label the first
    // line reaches 110, and the following word wraps.
    let token = "0123456789-".repeat(8) + "0123456"; // 95 chars
    let mut a = answers("feat", "subject");
    a.footer = Some(format!("{token} footer-second-line"));

    let message = build_commit(&a);
    let footer = message.split("\n\n").nth(1).unwrap();
    assert_eq!(footer, format!("ISSUES CLOSED: {token}\nfooter-second-line"));
}

#[test]
fn test_absent_optionals_contribute_nothing() {
    let mut a = answers("fix", "patch it");
    a.body = None;
    a.breaking = None;
    a.footer = None;
    assert_eq!(build_commit(&a), "fix: patch it");
}

#[test]
fn test_pure_and_idempotent() {
    let mut a = answers("feat", "stable");
    a.body = Some("body|split".to_string());
    let before = a.clone();

    let first = build_commit(&a);
    let second = build_commit(&a);

    assert_eq!(first, second);
    // The formatter never mutates the answer set.
    assert_eq!(a.body, before.body);
    assert_eq!(a.subject, before.subject);
}
