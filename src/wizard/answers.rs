//! The answer set collected by the wizard.

/// The scope answer, which is more than just a string: the scope list can
/// offer synthetic "empty" and "custom" entries alongside the configured
/// names.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeAnswer {
    /// The user explicitly picked "no scope".
    Empty,
    /// Sentinel that triggers the free-text scope prompt.
    Custom,
    /// A configured scope or the text entered at the custom prompt.
    Named(String),
}

/// The final confirmation choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
    Edit,
}

/// Answers collected so far. Every field starts unset; a skipped question
/// leaves its key unset.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub commit_type: Option<String>,
    pub scope: Option<ScopeAnswer>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub breaking: Option<String>,
    pub footer: Option<String>,
    pub confirm: Option<Confirm>,
}

impl Answers {
    /// The scope that should appear in the commit message, if any.
    ///
    /// `Empty` and the unresolved `Custom` sentinel both mean "no scope".
    pub fn effective_scope(&self) -> Option<&str> {
        match self.scope {
            Some(ScopeAnswer::Named(ref name)) => Some(name),
            _ => None,
        }
    }

    /// Whether the chosen type is `WIP`, case-insensitively.
    pub fn is_wip(&self) -> bool {
        self.commit_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("wip"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_scope_named() {
        let answers = Answers {
            scope: Some(ScopeAnswer::Named("api".to_string())),
            ..Default::default()
        };
        assert_eq!(answers.effective_scope(), Some("api"));
    }

    #[test]
    fn test_effective_scope_empty_and_custom_are_none() {
        let empty = Answers {
            scope: Some(ScopeAnswer::Empty),
            ..Default::default()
        };
        let custom = Answers {
            scope: Some(ScopeAnswer::Custom),
            ..Default::default()
        };
        let unset = Answers::default();

        assert_eq!(empty.effective_scope(), None);
        assert_eq!(custom.effective_scope(), None);
        assert_eq!(unset.effective_scope(), None);
    }

    #[test]
    fn test_is_wip_any_case() {
        for t in ["WIP", "wip", "Wip"] {
            let answers = Answers {
                commit_type: Some(t.to_string()),
                ..Default::default()
            };
            assert!(answers.is_wip(), "expected {t} to count as WIP");
        }

        let feat = Answers {
            commit_type: Some("feat".to_string()),
            ..Default::default()
        };
        assert!(!feat.is_wip());
    }
}
