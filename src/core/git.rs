//! Git repository status aggregation.
//!
//! This module provides a high-level interface to git introspection through
//! the [`GitRepo`] struct. It wraps the `git2` library to build the
//! [`RepoStatus`] snapshot the prompt renders: branch, per-file change
//! counts, stash depth, and divergence from the configured upstream.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository queries
//! - [`RepoStatus`]: Aggregated snapshot, rebuilt fresh on every render
//! - [`ChangeKind`]: Disjoint change categories with fixed precedence
//!
//! # Degradation
//! Everything here is read-only and best-effort. A missing repository or
//! unresolvable branch yields no status at all; any sub-query failure
//! (stash, upstream) yields its zero default. Nothing raises a visible
//! error and nothing is retried within a render.

use crate::core::error::{Result, WorkspacePromptError};
use git2::{BranchType, ErrorCode, Repository, Status, StatusOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aggregated repository status, rebuilt from scratch every render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatus {
    pub branch: String,
    pub staged: usize,
    pub changed: usize,
    pub deleted: usize,
    pub untracked: usize,
    pub stashed: usize,
    pub clean: bool,
    pub ahead: usize,
    pub behind: usize,
}

/// Disjoint change categories for reported files.
///
/// Each reported file lands in exactly one category, resolved by the fixed
/// precedence untracked > deleted > staged > changed, so a file carrying
/// several status flags is never double-counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Staged,
    Changed,
    Deleted,
    Untracked,
}

impl ChangeKind {
    /// Classify one status entry by precedence, first match wins.
    ///
    /// The index column maps to the `INDEX_*` flags and the working-tree
    /// column to the `WT_*` flags; a deletion flagged in either column
    /// counts as deleted. Conflicted entries count as changed.
    pub fn classify(flags: Status) -> Option<ChangeKind> {
        if flags.contains(Status::WT_NEW) {
            return Some(ChangeKind::Untracked);
        }
        if flags.intersects(Status::INDEX_DELETED | Status::WT_DELETED) {
            return Some(ChangeKind::Deleted);
        }
        if flags.intersects(
            Status::INDEX_NEW
                | Status::INDEX_MODIFIED
                | Status::INDEX_RENAMED
                | Status::INDEX_TYPECHANGE,
        ) {
            return Some(ChangeKind::Staged);
        }
        if flags.intersects(
            Status::WT_MODIFIED
                | Status::WT_RENAMED
                | Status::WT_TYPECHANGE
                | Status::CONFLICTED,
        ) {
            return Some(ChangeKind::Changed);
        }
        None
    }
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`, walking up parents
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo =
            Repository::discover(path).map_err(|_| WorkspacePromptError::NotInRepository)?;
        Ok(GitRepo { repo })
    }

    /// Build the full status snapshot, or `None` when the branch cannot
    /// be resolved. Sub-query failures degrade to zero defaults.
    pub fn snapshot(&mut self) -> Option<RepoStatus> {
        let branch = self.branch_name()?;

        let (staged, changed, deleted, untracked) = match self.change_counts() {
            Ok(counts) => counts,
            Err(e) => {
                log::debug!("status listing failed, counting nothing: {e}");
                (0, 0, 0, 0)
            }
        };
        let stashed = self.stash_count();
        let (ahead, behind) = self.divergence();
        let clean = staged == 0 && changed == 0 && deleted == 0 && untracked == 0;

        Some(RepoStatus {
            branch,
            staged,
            changed,
            deleted,
            untracked,
            stashed,
            clean,
            ahead,
            behind,
        })
    }

    /// Current branch name; `detached@<short-hash>` for a detached HEAD,
    /// the symbolic target for an unborn branch, `None` when unresolvable
    fn branch_name(&self) -> Option<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => head.shorthand().map(str::to_string),
            Ok(head) => {
                let oid = head.target()?;
                Some(format!("detached@{}", &oid.to_string()[..7]))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => self.unborn_branch_name(),
            Err(e) => {
                log::debug!("branch resolution failed: {e}");
                None
            }
        }
    }

    /// Branch name of an unborn HEAD (repository without commits)
    fn unborn_branch_name(&self) -> Option<String> {
        let head = self.repo.find_reference("HEAD").ok()?;
        let target = head.symbolic_target()?;
        Some(target.trim_start_matches("refs/heads/").to_string())
    }

    /// Count reported files into the four disjoint categories
    fn change_counts(&self) -> Result<(usize, usize, usize, usize)> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let (mut staged, mut changed, mut deleted, mut untracked) = (0, 0, 0, 0);

        for entry in statuses.iter() {
            match ChangeKind::classify(entry.status()) {
                Some(ChangeKind::Staged) => staged += 1,
                Some(ChangeKind::Changed) => changed += 1,
                Some(ChangeKind::Deleted) => deleted += 1,
                Some(ChangeKind::Untracked) => untracked += 1,
                None => {
                    log::debug!(
                        "unclassified status flags {:?} for {:?}",
                        entry.status(),
                        entry.path()
                    );
                }
            }
        }

        Ok((staged, changed, deleted, untracked))
    }

    /// Number of stash entries; failure or empty is 0, not an error
    fn stash_count(&mut self) -> usize {
        let mut count = 0;
        match self.repo.stash_foreach(|_, _, _| {
            count += 1;
            true
        }) {
            Ok(()) => count,
            Err(e) => {
                log::debug!("stash enumeration failed: {e}");
                0
            }
        }
    }

    /// Commits only local / only upstream, 0/0 when no upstream is
    /// configured or any lookup fails
    fn divergence(&self) -> (usize, usize) {
        self.try_divergence().unwrap_or((0, 0))
    }

    fn try_divergence(&self) -> Option<(usize, usize)> {
        let head = self.repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }
        let local_oid = head.target()?;
        let branch_name = head.shorthand()?;

        let upstream = self
            .repo
            .find_branch(branch_name, BranchType::Local)
            .ok()?
            .upstream()
            .ok()?;
        let upstream_oid = upstream.get().target()?;

        match self.repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok(counts) => Some(counts),
            Err(e) => {
                log::debug!("divergence query failed: {e}");
                None
            }
        }
    }
}
