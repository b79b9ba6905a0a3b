//! Common assertion helpers for prompt output validation
//!
//! Provides predicates for validating rendered prompts, hook scripts, and
//! explain reports.

#![allow(dead_code)]

use predicates::prelude::*;

/// The 24-hour HH:MM:SS stamp that opens every prompt
pub fn has_timestamp() -> impl Predicate<str> {
    predicates::str::is_match(r"\d{2}:\d{2}:\d{2}").expect("valid regex")
}

/// The prompt-glyph input marker on the final line
pub fn has_prompt_glyph() -> impl Predicate<str> {
    predicates::str::contains("> ")
}

/// A named branch somewhere in the status block
pub fn has_branch(name: &str) -> impl Predicate<str> {
    predicates::str::contains(name.to_string())
}

/// A glyph+count status segment, e.g. `?2`
pub fn has_count_segment(glyph: &str, count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{glyph}{count}"))
}

/// The clean indicator shown when all four counters are zero
pub fn has_clean_indicator() -> impl Predicate<str> {
    predicates::str::contains("✓")
}

/// The bracketed display path, e.g. `[/sub]`
pub fn has_display_path(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{path}]"))
}
