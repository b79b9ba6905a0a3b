//! Prompt segments and the unified color system.
//!
//! Every visible piece of the prompt is a [`PromptSegment`]: a text fragment
//! paired with a semantic [`ColorCategory`]. The category-to-color mapping
//! lives in exactly one place so both shell adapters render identically.
//!
//! # Public API
//! - [`ColorCategory`]: Semantic color names for every prompt element
//! - [`PromptSegment`]: (text, category) pair with a [`paint`](PromptSegment::paint) method
//! - [`category_style`]: Color function for a category
//! - [`strip_ansi_codes`]: Remove CSI control sequences from text
//! - [`visible_width`]: Display width of text after control-sequence removal
//!
//! # Color Scheme
//! - **Time**: Bright black, unobtrusive
//! - **Dir / Untracked**: Cyan
//! - **Venv**: Magenta
//! - **Staged / Clean**: Green
//! - **Changed**: Yellow
//! - **Deleted**: Red
//! - **Stash**: Blue
//! - **Branch**: Bold white
//! - **Prompt glyph**: Bold green

use colored::*;
use unicode_width::UnicodeWidthStr;

/// Semantic color categories for prompt segments.
///
/// Categories are names, not literal codes, so a renderer can remap them
/// without touching the formatter or compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Time,
    Dir,
    Venv,
    GitStaged,
    GitChanged,
    GitDeleted,
    GitUntracked,
    GitStash,
    GitClean,
    GitBranch,
    PromptGlyph,
}

/// One visible fragment of the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSegment {
    pub text: String,
    pub category: ColorCategory,
}

impl PromptSegment {
    pub fn new(text: impl Into<String>, category: ColorCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Render the segment with its category color applied
    pub fn paint(&self) -> String {
        let color_fn = category_style(self.category);
        color_fn(&self.text).to_string()
    }
}

/// Single function to apply color styling based on segment category
/// Returns a closure that can be applied to any text to get the appropriate color
pub fn category_style(category: ColorCategory) -> Box<dyn Fn(&str) -> ColoredString> {
    match category {
        ColorCategory::Time => Box::new(|text: &str| text.bright_black()),
        ColorCategory::Dir => Box::new(|text: &str| text.cyan()),
        ColorCategory::Venv => Box::new(|text: &str| text.magenta()),
        ColorCategory::GitStaged => Box::new(|text: &str| text.green()),
        ColorCategory::GitChanged => Box::new(|text: &str| text.yellow()),
        ColorCategory::GitDeleted => Box::new(|text: &str| text.red()),
        ColorCategory::GitUntracked => Box::new(|text: &str| text.cyan()),
        ColorCategory::GitStash => Box::new(|text: &str| text.blue()),
        ColorCategory::GitClean => Box::new(|text: &str| text.green()),
        ColorCategory::GitBranch => Box::new(|text: &str| text.white().bold()),
        ColorCategory::PromptGlyph => Box::new(|text: &str| text.green().bold()),
    }
}

/// Remove CSI control sequences (colors, cursor movement) from text.
///
/// Consumes `ESC [` through the final byte (`0x40..=0x7e`), so sequences
/// like `\x1b[31m` and `\x1b[65G` are both removed.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&ch) {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Display width of text with control sequences excluded.
///
/// Control sequences never count toward width; remaining text is measured
/// by Unicode display width, not byte length.
pub fn visible_width(text: &str) -> usize {
    strip_ansi_codes(text).width()
}
