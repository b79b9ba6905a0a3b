//! Domain-specific error types for workspace-prompt.
//!
//! The render path converts every one of these into a degraded-but-valid
//! prompt, so they only ever reach the user through the `explain`
//! diagnostic command or a CLI usage error.
//!
//! # Public API
//! - [`WorkspacePromptError`]: Error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, WorkspacePromptError>`

use thiserror::Error;

/// Domain-specific error types for workspace-prompt
#[derive(Error, Debug)]
pub enum WorkspacePromptError {
    #[error("Not in a git repository")]
    NotInRepository,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using WorkspacePromptError
pub type Result<T> = std::result::Result<T, WorkspacePromptError>;
