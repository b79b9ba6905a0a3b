//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! to exercise the status classification consistently.

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;

/// Scenario: 1 staged, 1 changed, 1 deleted, 2 untracked.
///
/// Built from two committed files: one is modified in place (changed), one
/// is removed (deleted); a new file is added to the index (staged) and two
/// more are left untracked.
pub fn create_mixed_change_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "modified.txt", "one")?;
    create_file(&repo.path, "deleted.txt", "two")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "modified.txt", "edited")?;
    remove_file(&repo.path, "deleted.txt")?;
    create_file(&repo.path, "staged.txt", "new")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "untracked-a.txt", "a")?;
    create_file(&repo.path, "untracked-b.txt", "b")?;

    Ok(repo)
}

/// Scenario: clean working tree with one stash entry
pub fn create_stashed_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "initial.txt", "dirty")?;
    git_stash(&repo.path)?;
    Ok(repo)
}
