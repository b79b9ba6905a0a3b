//! The `render` command: compose one prompt block for the host shell.
//!
//! Runs once per interactive prompt, so everything is queried fresh and
//! nothing is cached. Repository and terminal conditions never fail the
//! command; they degrade per the error taxonomy (absent status block,
//! zero defaults, line-wrapped layout).

use crate::core::{
    active_env, classify, compose, detect_columns, error::Result, format_status, left_segments,
    timestamp, GitRepo, WorkspaceRoot,
};
use crate::shell::Shell;
use std::env;
use std::path::PathBuf;

pub fn execute_render(
    shell: Shell,
    width: Option<usize>,
    workspace_root: Option<PathBuf>,
) -> Result<()> {
    // stdout is captured through command substitution, never a tty, so
    // auto-detection would strip every color
    colored::control::set_override(true);

    let root = WorkspaceRoot::resolve(workspace_root.as_deref());
    let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let home = dirs::home_dir();

    let display = classify(&current_dir, &root, home.as_deref());
    let status = GitRepo::discover(&current_dir)
        .ok()
        .and_then(|mut repo| repo.snapshot());

    let left = left_segments(&timestamp(), active_env().as_deref(), &display);
    let right = format_status(status.as_ref());

    let columns = width.or_else(|| {
        let columns = detect_columns();
        if columns.is_none() {
            log::debug!("terminal width unavailable, wrapping status block");
        }
        columns
    });

    let prompt = compose(&left, &right, columns);
    println!("{}", shell.escape(&prompt));
    Ok(())
}
