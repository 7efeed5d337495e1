//! Note persistence.
//!
//! Notes are plain UTF-8 markdown files identified by file name. The
//! [`NoteStore`] trait is what the application talks to; [`FsNoteStore`]
//! keeps them in a single directory.

mod error;
mod fs;

pub use error::StorageError;
pub use fs::{FsNoteStore, default_notes_dir};

use crate::document::NOTE_EXTENSION;

/// Name given to a note that has never been saved.
pub const UNTITLED: &str = "untitled";

/// Result of a storage action the user may abandon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOutcome<T> {
    Completed(T),
    Cancelled,
}

/// Asks the user where to save a note.
pub trait DestinationPicker {
    /// Return the chosen note name, or `None` if the user cancelled.
    fn choose(&mut self, suggested: &str) -> Option<String>;
}

/// A collection of notes addressed by name.
pub trait NoteStore {
    /// Names of all notes, sorted.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the notes cannot be listed.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Full text of the named note.
    ///
    /// # Errors
    /// Returns [`StorageError::NotFound`] for a missing note.
    fn read(&self, name: &str) -> Result<String, StorageError>;

    /// Overwrite an existing note.
    ///
    /// # Errors
    /// Returns [`StorageError::NotFound`] if there is no such note.
    fn write(&self, name: &str, content: &str) -> Result<(), StorageError>;

    /// Create a new note; fails rather than overwrite.
    ///
    /// # Errors
    /// Returns [`StorageError::AlreadyExists`] if the name is taken.
    fn create(&self, name: &str, content: &str) -> Result<String, StorageError>;

    /// Save under a name chosen through `picker`, overwriting if it exists.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidName`] for an unusable name, or an I/O error.
    fn save_as(
        &self,
        content: &str,
        picker: &mut dyn DestinationPicker,
    ) -> Result<StorageOutcome<String>, StorageError>;
}

/// Turn user input into a note identifier: trimmed, with the note extension.
///
/// # Errors
/// Returns [`StorageError::InvalidName`] for empty names, path separators or
/// names starting with a dot.
pub fn normalize_note_name(input: &str) -> Result<String, StorageError> {
    let name = input.trim();
    let invalid = name.is_empty() || name.starts_with('.') || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StorageError::InvalidName(input.to_string()));
    }
    if crate::document::is_note_file(std::path::Path::new(name)) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}.{NOTE_EXTENSION}"))
    }
}
