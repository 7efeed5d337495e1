// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. storage::StorageError)
    clippy::module_name_repetitions
)]

//! # Debbynote
//!
//! Markdown notes for competitive debate.
//!
//! Debbynote renders notes with:
//! - Highlight tokens (`!a`, `!r`, `!wb`, `!info`) that color a block
//! - Debate-role tokens (`!pm`, `!lo`, ...) that frame a speech with its role
//! - Toolbar formatting and list continuation on a plain text buffer
//! - Live preview of a notes directory
//!
//! ## Architecture
//!
//! Debbynote uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to an HTML preview page
//!
//! ## Modules
//!
//! - [`app`]: Application state and note workflow
//! - [`config`]: Saved command-line defaults
//! - [`document`]: Segmentation, rendering and sanitizing
//! - [`editor`]: Cursor-aware text editing
//! - [`storage`]: Note persistence
//! - [`ui`]: Preview page chrome
//! - [`watcher`]: Notes directory watching

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod storage;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Block, Pipeline, to_html};
    pub use crate::editor::{EditorBuffer, FormatOp, Selection};
    pub use crate::storage::{FsNoteStore, NoteStore};
}
