//! The `explain` command: diagnostic JSON dump of the prompt inputs.
//!
//! Aggregates the same data a render would and prints it as pretty JSON,
//! for troubleshooting a prompt that looks wrong. Not-in-a-repository is
//! reported as a null status, not an error.

use crate::core::{
    active_env, classify, error::Result, GitRepo, LocationClass, RepoStatus, WorkspaceRoot,
};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ExplainReport {
    workspace_root: String,
    current_dir: PathBuf,
    display_path: String,
    location: LocationClass,
    virtual_env: Option<String>,
    status: Option<RepoStatus>,
}

pub fn execute_explain(workspace_root: Option<PathBuf>) -> Result<()> {
    let root = WorkspaceRoot::resolve(workspace_root.as_deref());
    let current_dir = env::current_dir()?;
    let home = dirs::home_dir();

    let display = classify(&current_dir, &root, home.as_deref());
    let status = GitRepo::discover(&current_dir)
        .ok()
        .and_then(|mut repo| repo.snapshot());

    let report = ExplainReport {
        workspace_root: root.as_str().to_string(),
        current_dir,
        display_path: display.text,
        location: display.location,
        virtual_env: active_env(),
        status,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
