use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{
    DestinationPicker, NoteStore, StorageError, StorageOutcome, UNTITLED, normalize_note_name,
};
use crate::document::{NOTE_EXTENSION, is_note_file};

/// The per-user notes directory, `~/debbynotes`.
pub fn default_notes_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(profile) = std::env::var_os("USERPROFILE") {
            return PathBuf::from(profile).join("debbynotes");
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join("debbynotes");
    }

    PathBuf::from("debbynotes")
}

/// Notes stored as `*.md` files in one directory.
///
/// The directory is created on first use, so a fresh install works without
/// any setup.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    dir: PathBuf,
}

impl FsNoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`default_notes_dir`].
    pub fn at_default_location() -> Self {
        Self::new(default_notes_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a note file, after validating the name.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidName`] if `name` is not a plain note name.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        let normalized = normalize_note_name(name)?;
        Ok(self.dir.join(normalized))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if !self.dir.exists() {
            tracing::info!(dir = %self.dir.display(), "creating notes directory");
        }
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::io(&self.dir, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        fs::write(path, content).map_err(|err| StorageError::io(path, err))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote note");
        Ok(())
    }
}

impl NoteStore for FsNoteStore {
    fn list(&self) -> Result<Vec<String>, StorageError> {
        self.ensure_dir()?;
        let entries = fs::read_dir(&self.dir).map_err(|err| StorageError::io(&self.dir, err))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StorageError::io(&self.dir, err))?;
            let path = entry.path();
            let is_file = entry
                .file_type()
                .map_err(|err| StorageError::io(&path, err))?
                .is_file();
            let name = entry.file_name().to_string_lossy().to_string();
            if is_file && !name.starts_with('.') && is_note_file(&path) {
                names.push(name);
            }
        }
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        let path = self.path_for(name)?;
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => StorageError::io(&path, err),
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        self.write_file(&path, content)
    }

    fn create(&self, name: &str, content: &str) -> Result<String, StorageError> {
        let normalized = normalize_note_name(name)?;
        let path = self.dir.join(&normalized);
        if path.exists() {
            return Err(StorageError::AlreadyExists(normalized));
        }
        self.write_file(&path, content)?;
        Ok(normalized)
    }

    fn save_as(
        &self,
        content: &str,
        picker: &mut dyn DestinationPicker,
    ) -> Result<StorageOutcome<String>, StorageError> {
        let suggested = format!("{UNTITLED}.{NOTE_EXTENSION}");
        let Some(choice) = picker.choose(&suggested) else {
            tracing::debug!("save cancelled");
            return Ok(StorageOutcome::Cancelled);
        };
        let name = normalize_note_name(&choice)?;
        self.write_file(&self.dir.join(&name), content)?;
        Ok(StorageOutcome::Completed(name))
    }
}
