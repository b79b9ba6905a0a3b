//! Workspace Prompt - a contextual multi-line prompt for interactive shells.
//!
//! This library provides the core functionality for workspace-prompt: git
//! status aggregation, workspace path classification, virtual-environment
//! detection, and terminal-width-aware prompt composition, exposed through
//! thin per-shell adapters.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Read-only git status snapshots
//! - Path classification against the session workspace root
//! - Semantic prompt segments and the visible-width primitive
//! - Prompt composition with right-aligned status
//!
//! The [`shell`] module contributes the bash and zsh adapters.

pub mod commands;
pub mod core;
pub mod shell;

// Re-export the core public API for external users
pub use core::{
    active_env,
    classify,

    compose,
    detect_columns,
    format_status,
    left_segments,
    strip_ansi_codes,
    timestamp,
    visible_width,

    ChangeKind,
    ColorCategory,
    DisplayPath,

    // Git status aggregation
    GitRepo,
    LocationClass,
    PromptSegment,
    RepoStatus,

    // Error handling
    Result,
    WorkspacePromptError,

    WorkspaceRoot,
};

pub use shell::Shell;
