//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states for comprehensive prompt-rendering scenarios.

#![allow(dead_code)]

use anyhow::{ensure, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Run a git command in `dir`, failing the test on a nonzero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()?;
    ensure!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

/// Sets up a fresh git repository for testing.
///
/// Initializes the repository on a branch pinned to `main` (independent of
/// the host git's init.defaultBranch) and sets user configuration to avoid
/// prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();

    git(&path, &["init"])?;
    git(&path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo { temp_dir, path })
}

/// Repository with one committed file, so the working tree starts clean
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;
    Ok(repo)
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}

pub fn remove_file(dir: &Path, name: &str) -> Result<()> {
    fs::remove_file(dir.join(name))?;
    Ok(())
}

pub fn git_add(dir: &Path, pathspec: &str) -> Result<()> {
    git(dir, &["add", pathspec])
}

pub fn git_commit(dir: &Path, message: &str) -> Result<()> {
    git(dir, &["commit", "-m", message])
}

pub fn git_stash(dir: &Path) -> Result<()> {
    git(dir, &["stash", "push", "-m", "test stash"])
}
