//! Status segment formatting.
//!
//! Converts a [`RepoStatus`] into the ordered segment sequence the
//! compositor right-aligns. Count segments appear only when nonzero, in
//! fixed order: staged, changed, deleted, untracked, stashed, then the
//! clean indicator, the branch name, and finally the behind and ahead
//! indicators. No status at all yields an empty sequence.

use crate::core::git::RepoStatus;
use crate::core::segments::{ColorCategory, PromptSegment};

pub const STAGED_GLYPH: &str = "+";
pub const CHANGED_GLYPH: &str = "~";
pub const DELETED_GLYPH: &str = "-";
pub const UNTRACKED_GLYPH: &str = "?";
pub const STASH_GLYPH: &str = "$";
pub const CLEAN_GLYPH: &str = "✓";
pub const BEHIND_GLYPH: &str = "↓";
pub const AHEAD_GLYPH: &str = "↑";

/// Build the ordered status segment sequence; empty when not in a repository
pub fn format_status(status: Option<&RepoStatus>) -> Vec<PromptSegment> {
    let Some(status) = status else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    push_count(&mut segments, STAGED_GLYPH, status.staged, ColorCategory::GitStaged);
    push_count(&mut segments, CHANGED_GLYPH, status.changed, ColorCategory::GitChanged);
    push_count(&mut segments, DELETED_GLYPH, status.deleted, ColorCategory::GitDeleted);
    push_count(&mut segments, UNTRACKED_GLYPH, status.untracked, ColorCategory::GitUntracked);
    push_count(&mut segments, STASH_GLYPH, status.stashed, ColorCategory::GitStash);

    if status.clean {
        segments.push(PromptSegment::new(CLEAN_GLYPH, ColorCategory::GitClean));
    }
    segments.push(PromptSegment::new(status.branch.clone(), ColorCategory::GitBranch));

    // divergence indicators trail the branch; red for behind, green for ahead
    push_count(&mut segments, BEHIND_GLYPH, status.behind, ColorCategory::GitDeleted);
    push_count(&mut segments, AHEAD_GLYPH, status.ahead, ColorCategory::GitStaged);

    segments
}

fn push_count(segments: &mut Vec<PromptSegment>, glyph: &str, count: usize, category: ColorCategory) {
    if count > 0 {
        segments.push(PromptSegment::new(format!("{glyph}{count}"), category));
    }
}
