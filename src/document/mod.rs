//! Note rendering.
//!
//! This module handles:
//! - Splitting a note into blocks on blank-line runs
//! - Recognizing highlight and debate-role tokens at block starts
//! - Converting each block with comrak and wrapping it per token
//! - Sanitizing the result with ammonia

mod convert;
mod error;
mod pipeline;
mod render;
mod sanitize;
mod segment;
pub mod tokens;

pub use convert::{ComrakConverter, ConvertMode, MarkdownConverter};
pub use error::RenderError;
pub use pipeline::{FALLBACK_HTML, Pipeline};
pub use render::{EMPTY_BLOCK_HTML, render, render_block};
pub use sanitize::{AmmoniaSanitizer, Sanitizer};
pub use segment::{Block, Segment, segment, segment_with_spans};
pub use tokens::Treatment;

/// Note file extension, without the dot.
pub const NOTE_EXTENSION: &str = "md";

/// Render `text` with the default pipeline.
///
/// # Example
///
/// ```
/// let html = debbynote::document::to_html("!a Tax cuts grow the economy");
/// assert!(html.contains(r#"class="md-highlight-red""#));
/// ```
pub fn to_html(text: &str) -> String {
    Pipeline::new().to_html(text)
}

/// Returns true if the path has the note extension (case-insensitive).
pub fn is_note_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_is_note_file_accepts_md() {
        assert!(is_note_file(Path::new("round1.md")));
        assert!(is_note_file(Path::new("Round1.MD")));
    }

    #[test]
    fn test_is_note_file_rejects_other_extensions() {
        assert!(!is_note_file(Path::new("round1.txt")));
        assert!(!is_note_file(Path::new("md")));
        assert!(!is_note_file(Path::new(".md.bak")));
    }

    #[test]
    fn test_to_html_matches_pipeline() {
        let text = "!lo We oppose\n\nplain";
        assert_eq!(to_html(text), Pipeline::new().to_html(text));
    }

    #[test]
    fn test_to_html_debate_header_text() {
        let html = to_html("!pm I propose...");
        assert!(html.contains(r#"<div class="debate-pm">"#), "got: {html}");
        assert!(html.contains(r#"<div class="debate-header">Prime Minister</div>"#));
        assert!(html.contains("<p>I propose...</p>"));
    }
}
