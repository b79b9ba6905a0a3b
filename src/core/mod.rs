//! Core functionality for the workspace-prompt tool.
//!
//! This module provides the fundamental building blocks for the prompt:
//! status aggregation, path classification, segment formatting, and
//! composition.

pub mod compose;
pub mod error;
pub mod format;
pub mod git;
pub mod segments;
pub mod venv;
pub mod workspace;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, WorkspacePromptError};

// === Git status aggregation ===
// Read-only repository snapshot rebuilt on every render
pub use git::{ChangeKind, GitRepo, RepoStatus};

// === Path classification ===
// Workspace root resolution and display-path derivation
pub use workspace::{classify, DisplayPath, LocationClass, WorkspaceRoot};

// === Virtual environments ===
pub use venv::active_env;

// === Segments and colors ===
// Semantic color categories and the visible-width primitive
pub use segments::{category_style, strip_ansi_codes, visible_width, ColorCategory, PromptSegment};

// === Status formatting ===
pub use format::format_status;

// === Prompt composition ===
// Left/right block assembly and terminal-width-aware alignment
pub use compose::{compose, detect_columns, left_segments, timestamp, PROMPT_GLYPH};
