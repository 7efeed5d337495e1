use ropey::Rope;

use super::format::{FormatOp, apply};
use super::list::continue_list;
use super::selection::{Edit, Selection};

/// The note text being edited, with its selection.
///
/// The text is the single source of truth for the preview. Typing and
/// Backspace edit the rope in place; toolbar and list operations are pure
/// functions whose result replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Move the selection, clamped to the text.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.char_count());
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Apply a toolbar formatting operation to the current selection.
    pub fn format(&mut self, op: FormatOp) {
        let edit = apply(op, &self.text(), self.selection);
        self.commit(edit);
    }

    /// Handle the Enter key.
    ///
    /// List items are continued or closed; anywhere else the selection is
    /// replaced by a plain line break. Returns `true` when list handling
    /// took over.
    pub fn line_break(&mut self) -> bool {
        if let Some(edit) = continue_list(&self.text(), self.selection.start()) {
            self.commit(edit);
            return true;
        }
        self.insert_str("\n");
        false
    }

    /// Replace the selection with `s` and put the cursor after it.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() && self.selection.is_empty() {
            return;
        }
        let start = self.selection.start();
        self.rope.remove(start..self.selection.end());
        self.rope.insert(start, s);
        self.selection = Selection::cursor(start + s.chars().count());
        self.dirty = true;
    }

    /// Delete the selection, or the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.selection.is_empty() {
            if self.selection.start() == 0 {
                return false;
            }
            self.selection = Selection::new(self.selection.start() - 1, self.selection.end());
        }
        self.insert_str("");
        true
    }

    /// Replace the whole text, e.g. when another note is opened.
    pub fn replace_all(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    fn commit(&mut self, edit: Edit) {
        tracing::trace!(
            start = edit.selection.start(),
            end = edit.selection.end(),
            "applied edit"
        );
        self.rope = Rope::from_str(&edit.text);
        self.selection = edit.selection;
        self.dirty = true;
    }
}
