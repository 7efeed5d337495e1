use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::{App, Message, Model};
use crate::storage::{FsNoteStore, NoteStore};
use crate::watcher::{NoteChanges, NoteWatcher};

/// How long the notes directory must be quiet before re-rendering.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

impl<S: NoteStore> App<S> {
    /// Reload whatever `changes` touched.
    ///
    /// Returns the new model and whether the page needs rendering again.
    pub fn apply_changes(&mut self, model: Model, changes: &NoteChanges) -> (Model, bool) {
        if changes.is_empty() {
            return (model, false);
        }
        let notes_before = model.notes.clone();
        let mut model = self.dispatch(model, Message::RefreshNotes);
        let mut dirty = model.notes != notes_before;

        if changes.touches(&model.active_note) && !model.is_untitled() {
            let text_before = model.buffer.text();
            let name = model.active_note.clone();
            model = self.dispatch(model, Message::OpenNote(name));
            dirty |= model.buffer.text() != text_before;
        }
        (model, dirty)
    }
}

impl App<FsNoteStore> {
    /// Render `model`, then re-render through `publish` whenever its note
    /// (or the notes list) changes on disk. Runs until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes directory cannot be watched or
    /// `publish` fails.
    pub fn watch<F>(&mut self, mut model: Model, poll: Duration, mut publish: F) -> Result<()>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let mut watcher = NoteWatcher::new(self.store().dir(), WATCH_DEBOUNCE)
            .with_context(|| format!("Failed to watch {}", self.store().dir().display()))?;
        publish(&self.render_page(&model))?;
        tracing::info!(note = %model.active_note, "watching for changes");

        loop {
            std::thread::sleep(poll);
            let Some(changes) = watcher.take_changes() else {
                continue;
            };
            let (next, dirty) = self.apply_changes(model, &changes);
            model = next;
            if let Some(notice) = model.notice() {
                tracing::warn!("{}", notice.message);
            }
            if dirty {
                publish(&self.render_page(&model))?;
                tracing::debug!(note = %model.active_note, "re-rendered");
            }
        }
    }
}
