//! Toolbar formatting: wrapping the selection in markers and inserting rules.

use ropey::Rope;

use super::selection::{Edit, Selection};

/// Blank line, horizontal rule, blank line.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// A toolbar formatting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatOp {
    Bold,
    Italic,
    Strike,
    Underline,
    Separator,
}

impl FormatOp {
    /// Prefix and suffix for the wrapping operations; `None` for the separator.
    pub const fn markers(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Bold => Some(("**", "**")),
            Self::Italic => Some(("*", "*")),
            Self::Strike => Some(("~~", "~~")),
            Self::Underline => Some(("<u>", "</u>")),
            Self::Separator => None,
        }
    }
}

/// Apply `op` to `text` with the given selection.
///
/// Wrapping a non-empty selection keeps the wrapped text, markers included,
/// selected. Wrapping an empty selection inserts the marker pair and puts the
/// cursor half the inserted length past `start`, which is only the exact
/// middle when prefix and suffix have equal length. The separator is inserted
/// at `start` and the cursor lands right after it.
///
/// # Example
///
/// ```
/// use debbynote::editor::{apply, FormatOp, Selection};
///
/// let edit = apply(FormatOp::Bold, "hello world", Selection::new(0, 5));
/// assert_eq!(edit.text, "**hello** world");
/// assert_eq!(edit.selection, Selection::new(0, 9));
/// ```
pub fn apply(op: FormatOp, text: &str, selection: Selection) -> Edit {
    let mut rope = Rope::from_str(text);
    let selection = selection.clamped(rope.len_chars());
    match op.markers() {
        Some((prefix, suffix)) => wrap(&mut rope, selection, prefix, suffix),
        None => insert_separator(&mut rope, selection.start()),
    }
}

fn wrap(rope: &mut Rope, selection: Selection, prefix: &str, suffix: &str) -> Edit {
    let before = rope.len_chars();
    rope.insert(selection.end(), suffix);
    rope.insert(selection.start(), prefix);

    let inserted = rope.len_chars() - before;
    let selection = if selection.is_empty() {
        Selection::cursor(selection.start() + inserted / 2)
    } else {
        Selection::new(selection.start(), selection.end() + inserted)
    };
    Edit {
        text: rope.to_string(),
        selection,
    }
}

fn insert_separator(rope: &mut Rope, at: usize) -> Edit {
    let before = rope.len_chars();
    rope.insert(at, SEPARATOR);
    Edit {
        selection: Selection::cursor(at + rope.len_chars() - before),
        text: rope.to_string(),
    }
}
