//! Active virtual-environment detection.
//!
//! Checks `VIRTUAL_ENV` (a path; the final component is displayed) before
//! `CONDA_DEFAULT_ENV` (already a name). First present, non-empty value
//! wins. No side effects, no failure modes.

use std::env;

pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";
pub const CONDA_ENV_VAR: &str = "CONDA_DEFAULT_ENV";

/// Name of the active virtual environment, if any
pub fn active_env() -> Option<String> {
    detect(
        env::var(VIRTUAL_ENV_VAR).ok(),
        env::var(CONDA_ENV_VAR).ok(),
    )
}

fn detect(virtual_env: Option<String>, conda_env: Option<String>) -> Option<String> {
    if let Some(path) = virtual_env.filter(|v| !v.is_empty()) {
        let name = path
            .replace('\\', "/")
            .rsplit('/')
            .find(|part| !part.is_empty())
            .map(str::to_string);
        if name.is_some() {
            return name;
        }
    }
    conda_env.filter(|v| !v.is_empty())
}
