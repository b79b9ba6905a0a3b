//! Host shell adapters.
//!
//! The composition engine is shell-agnostic; each adapter contributes only
//! what its shell's prompt engine needs: a hook script installed once per
//! session, and zero-width escaping so the shell excludes control sequences
//! from its own cursor accounting.

pub mod bash;
pub mod zsh;

use clap::ValueEnum;
use std::fmt;

/// Supported host shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// Wrap control sequences in the shell's zero-width markers
    pub fn escape(&self, prompt: &str) -> String {
        match self {
            Shell::Bash => bash::escape(prompt),
            Shell::Zsh => zsh::escape(prompt),
        }
    }

    /// Hook script the user evals once in their rc file
    pub fn init_script(&self) -> &'static str {
        match self {
            Shell::Bash => bash::INIT_SCRIPT,
            Shell::Zsh => zsh::INIT_SCRIPT,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
        }
    }
}

/// Wrap every maximal run of CSI sequences in `open`/`close` markers.
///
/// Newlines and ordinary text pass through untouched; adjacent sequences
/// share one marker pair so the prompt string stays short.
pub(crate) fn wrap_control_runs(text: &str, open: &str, close: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    let mut run = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            run.push(ch);
            if chars.peek() == Some(&'[') {
                let mut first = true;
                while let Some(c) = chars.next() {
                    run.push(c);
                    if !first && ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                    first = false;
                }
            }
            if chars.peek() != Some(&'\x1b') {
                result.push_str(open);
                result.push_str(&run);
                result.push_str(close);
                run.clear();
            }
        } else {
            result.push(ch);
        }
    }

    if !run.is_empty() {
        result.push_str(open);
        result.push_str(&run);
        result.push_str(close);
    }

    result
}
