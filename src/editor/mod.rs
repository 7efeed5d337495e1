//! Cursor-aware editing of note text.
//!
//! The operations are pure functions from `(text, selection)` to an [`Edit`];
//! [`EditorBuffer`] holds the current text and applies them.

mod buffer;
mod format;
mod list;
mod selection;

pub use buffer::EditorBuffer;
pub use format::{FormatOp, SEPARATOR, apply};
pub use list::continue_list;
pub use selection::{Edit, Selection};
