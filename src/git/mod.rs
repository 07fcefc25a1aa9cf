//! git2-backed commit creation, the default commit action for the CLI.

use git2::{IndexAddOption, Oid, Repository, StatusOptions};

use crate::error::CommitError;

/// Open the repository in the current directory.
pub fn open_repository() -> Result<Repository, CommitError> {
    Repository::open(".").map_err(CommitError::NotARepository)
}

/// Whether there is anything to commit (staged or unstaged).
pub fn has_changes(repo: &Repository) -> Result<bool, CommitError> {
    let mut options = StatusOptions::new();
    options.include_untracked(true);

    let statuses = repo
        .statuses(Some(&mut options))
        .map_err(CommitError::StagingFailed)?;

    Ok(!statuses.is_empty())
}

/// Create a commit on HEAD with `message`.
///
/// With `stage_all`, everything is staged first (`git add -A` semantics);
/// otherwise only what is already in the index is committed.
pub fn commit(repo: &Repository, message: &str, stage_all: bool) -> Result<Oid, CommitError> {
    let mut index = repo.index().map_err(CommitError::StagingFailed)?;

    if stage_all {
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .map_err(CommitError::StagingFailed)?;
        index.write().map_err(CommitError::StagingFailed)?;
    }

    let tree_id = index.write_tree().map_err(CommitError::StagingFailed)?;
    let tree = repo.find_tree(tree_id).map_err(CommitError::CommitFailed)?;

    let sig = repo.signature().map_err(CommitError::ConfigError)?;

    // First commit in a fresh repository has no parent.
    let parent = repo.head().and_then(|h| h.peel_to_commit()).ok();
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(CommitError::CommitFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;

    fn init_repo() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();

        (dir, repo)
    }

    #[test]
    fn test_commit_stages_and_commits_all() {
        let (dir, repo) = init_repo();

        let sig = Signature::now("Test User", "test@test.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .unwrap();

        std::fs::write(dir.path().join("test.txt"), "hello\n").unwrap();

        let oid = commit(&repo, "feat: add test file", true).unwrap();
        let created = repo.find_commit(oid).unwrap();
        assert_eq!(created.message().unwrap(), "feat: add test file");
        assert_eq!(created.parent_count(), 1);
    }

    #[test]
    fn test_commit_on_empty_repo_has_no_parent() {
        let (dir, repo) = init_repo();
        std::fs::write(dir.path().join("first.txt"), "first\n").unwrap();

        let oid = commit(&repo, "feat: first commit", true).unwrap();
        let created = repo.find_commit(oid).unwrap();
        assert_eq!(created.parent_count(), 0);
    }

    #[test]
    fn test_has_changes_detects_untracked_files() {
        let (dir, repo) = init_repo();
        assert!(!has_changes(&repo).unwrap());

        std::fs::write(dir.path().join("new.txt"), "content\n").unwrap();
        assert!(has_changes(&repo).unwrap());
    }
}
