//! List continuation on Enter.

use std::sync::LazyLock;

use regex::Regex;
use ropey::Rope;

use super::selection::{Edit, Selection};

static UNORDERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([-*+]\s+)(.*)$").expect("unordered pattern is valid")
});

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+)\.\s+(.*)$").expect("ordered pattern is valid"));

/// Handle a line break at `cursor` (a character offset) inside a list.
///
/// Returns `None` when the cursor's line is not a list item, in which case
/// the caller inserts an ordinary line break. On a list item whose content is
/// blank the marker line is removed; otherwise a new marker line is inserted
/// after the current line with the same indentation, repeating a bullet or
/// incrementing a number.
///
/// # Example
///
/// ```
/// use debbynote::editor::continue_list;
///
/// let edit = continue_list("1. x", 4).unwrap();
/// assert_eq!(edit.text, "1. x\n2. ");
/// ```
pub fn continue_list(text: &str, cursor: usize) -> Option<Edit> {
    let mut rope = Rope::from_str(text);
    let cursor = cursor.min(rope.len_chars());
    let index = rope.char_to_line(cursor);
    let line_start = rope.line_to_char(index);
    let next_line = rope.line_to_char(index + 1);

    let raw = rope.line(index).to_string();
    let line = raw.trim_end_matches(['\n', '\r']);
    let line_end = next_line - (raw.len() - line.len());

    let (indent, marker, content) = if let Some(caps) = UNORDERED.captures(line) {
        (
            caps.get(1)?.as_str(),
            caps[2].to_string(),
            caps.get(3)?.as_str(),
        )
    } else if let Some(caps) = ORDERED.captures(line) {
        let number: u64 = caps[2].parse().ok()?;
        (
            caps.get(1)?.as_str(),
            format!("{}. ", number.checked_add(1)?),
            caps.get(3)?.as_str(),
        )
    } else {
        return None;
    };

    if content.trim().is_empty() {
        // The last line has no break of its own, so it takes the one before it.
        let from = if line_end == next_line {
            line_start.saturating_sub(1)
        } else {
            line_start
        };
        rope.remove(from..next_line);
        let cursor = line_start.min(rope.len_chars());
        tracing::debug!(line = index, "removed empty list marker");
        return Some(Edit {
            text: rope.to_string(),
            selection: Selection::cursor(cursor),
        });
    }

    let new_line = format!("\n{indent}{marker}");
    rope.insert(line_end, &new_line);
    Some(Edit {
        text: rope.to_string(),
        selection: Selection::cursor(line_end + new_line.chars().count()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_is_continued() {
        let edit = continue_list("- item\n", 6).unwrap();
        assert_eq!(edit.text, "- item\n- \n");
        assert_eq!(edit.selection, Selection::cursor(9));
    }

    #[test]
    fn test_bullet_at_end_of_text() {
        let edit = continue_list("- item", 6).unwrap();
        assert_eq!(edit.text, "- item\n- ");
        assert_eq!(edit.selection, Selection::cursor(9));
    }

    #[test]
    fn test_bullet_marker_and_spacing_repeated_verbatim() {
        let edit = continue_list("*   star", 8).unwrap();
        assert_eq!(edit.text, "*   star\n*   ");
    }

    #[test]
    fn test_plus_bullet_keeps_indent() {
        let edit = continue_list("intro\n  + nested", 16).unwrap();
        assert_eq!(edit.text, "intro\n  + nested\n  + ");
        assert_eq!(edit.selection, Selection::cursor(21));
    }

    #[test]
    fn test_ordered_item_is_incremented() {
        let edit = continue_list("1. x", 4).unwrap();
        assert_eq!(edit.text, "1. x\n2. ");
        assert_eq!(edit.selection, Selection::cursor(8));
    }

    #[test]
    fn test_ordered_item_multi_digit() {
        let edit = continue_list("9. nine\n", 7).unwrap();
        assert_eq!(edit.text, "9. nine\n10. \n");
    }

    #[test]
    fn test_new_line_goes_after_whole_current_line() {
        let edit = continue_list("- alpha beta", 3).unwrap();
        assert_eq!(edit.text, "- alpha beta\n- ");
        assert_eq!(edit.selection, Selection::cursor(15));
    }

    #[test]
    fn test_empty_marker_line_is_removed() {
        let edit = continue_list("- one\n- ", 8).unwrap();
        assert_eq!(edit.text, "- one");
        assert_eq!(edit.selection, Selection::cursor(5));
    }

    #[test]
    fn test_empty_marker_line_in_middle_is_removed() {
        let edit = continue_list("- one\n- \nafter", 8).unwrap();
        assert_eq!(edit.text, "- one\nafter");
        assert_eq!(edit.selection, Selection::cursor(6));
    }

    #[test]
    fn test_empty_ordered_marker_is_removed() {
        let edit = continue_list("3.  ", 4).unwrap();
        assert_eq!(edit.text, "");
        assert_eq!(edit.selection, Selection::cursor(0));
    }

    #[test]
    fn test_plain_line_is_not_handled() {
        assert_eq!(continue_list("just text", 9), None);
    }

    #[test]
    fn test_marker_without_space_is_not_a_list() {
        assert_eq!(continue_list("-item", 5), None);
        assert_eq!(continue_list("**bold**", 8), None);
        assert_eq!(continue_list("1.5 km", 6), None);
    }

    #[test]
    fn test_cursor_on_non_list_line_after_list() {
        assert_eq!(continue_list("- a\nplain", 9), None);
    }

    #[test]
    fn test_cursor_at_line_end_belongs_to_that_line() {
        // Offset 3 is the end of "- a", not the start of the next line.
        let edit = continue_list("- a\nplain", 3).unwrap();
        assert_eq!(edit.text, "- a\n- \nplain");
    }

    #[test]
    fn test_multibyte_content_counts_characters() {
        let edit = continue_list("- café", 6).unwrap();
        assert_eq!(edit.text, "- café\n- ");
        assert_eq!(edit.selection, Selection::cursor(9));
    }

    #[test]
    fn test_cursor_past_end_is_clamped() {
        let edit = continue_list("- a", 50).unwrap();
        assert_eq!(edit.text, "- a\n- ");
    }
}
