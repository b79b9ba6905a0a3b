//! Prompt composition and right-alignment math.
//!
//! Assembles the left block (time, virtual environment, display path) and
//! the right block (formatted status) into one multi-line prompt. The right
//! block is placed against the live terminal width using visible widths,
//! never byte or control-sequence lengths; when it does not fit, or the
//! width is unknown, it wraps to the following line instead. The left block
//! is never overlapped or truncated. A prompt-glyph line always ends the
//! block.

use crate::core::segments::{visible_width, ColorCategory, PromptSegment};
use crate::core::workspace::{DisplayPath, LocationClass};
use chrono::Local;
use terminal_size::{terminal_size, Width};

pub const PROMPT_GLYPH: &str = ">";

/// Marker shown instead of the bracketed path at the filesystem root,
/// outside any recognized workspace
pub const ROOT_MARKER: &str = "!/";

/// Current wall-clock time as a 24-hour HH:MM:SS stamp
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Live terminal column count, when the terminal reports one
pub fn detect_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Build the left block: time, optional venv name, bracketed display path
pub fn left_segments(time: &str, venv: Option<&str>, path: &DisplayPath) -> Vec<PromptSegment> {
    let mut segments = vec![PromptSegment::new(time, ColorCategory::Time)];

    if let Some(name) = venv {
        segments.push(PromptSegment::new(format!("({name})"), ColorCategory::Venv));
    }

    let dir_text = if path.location == LocationClass::Other && path.text == "/" {
        ROOT_MARKER.to_string()
    } else {
        format!("[{}]", path.text)
    };
    segments.push(PromptSegment::new(dir_text, ColorCategory::Dir));

    segments
}

/// Compose the full prompt block.
///
/// `columns` is the terminal width; `None` selects the line-wrapped
/// fallback layout for terminals without cursor positioning.
pub fn compose(left: &[PromptSegment], right: &[PromptSegment], columns: Option<usize>) -> String {
    let left_line = join_painted(left);
    let right_line = join_painted(right);

    let mut prompt = String::with_capacity(left_line.len() + right_line.len() + 16);
    prompt.push_str(&left_line);

    if !right_line.is_empty() {
        let left_width = visible_width(&left_line);
        let right_width = visible_width(&right_line);
        match right_start_column(columns, left_width, right_width) {
            Some(column) => {
                // CSI cursor-horizontal-absolute, 1-based
                prompt.push_str(&format!("\x1b[{}G", column + 1));
                prompt.push_str(&right_line);
            }
            None => {
                prompt.push('\n');
                prompt.push_str(&right_line);
            }
        }
    }

    prompt.push('\n');
    prompt.push_str(&PromptSegment::new(format!("{PROMPT_GLYPH} "), ColorCategory::PromptGlyph).paint());
    prompt
}

/// Start column (0-based) for the right block, or `None` when it must wrap
fn right_start_column(
    columns: Option<usize>,
    left_width: usize,
    right_width: usize,
) -> Option<usize> {
    let columns = columns?;
    let column = columns.checked_sub(right_width + 1)?;
    (column > left_width).then_some(column)
}

fn join_painted(segments: &[PromptSegment]) -> String {
    segments
        .iter()
        .map(PromptSegment::paint)
        .collect::<Vec<_>>()
        .join(" ")
}
