//! Notes directory watching for live preview.
//!
//! Uses notify crate for cross-platform file system events.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::document::is_note_file;

/// Notes touched since the last report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    /// Names of changed note files.
    pub notes: BTreeSet<String>,
    /// The backend reported the directory itself; any note may have changed.
    pub directory: bool,
}

impl NoteChanges {
    /// Whether `name` may have changed.
    pub fn touches(&self, name: &str) -> bool {
        self.directory || self.notes.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        !self.directory && self.notes.is_empty()
    }
}

/// Watches a notes directory and emits debounced change reports.
pub struct NoteWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    dir: PathBuf,
    debounce: Duration,
    pending: NoteChanges,
    pending_since: Option<Instant>,
}

impl NoteWatcher {
    /// Create a watcher for the notes in `dir`.
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be created or the directory cannot be watched.
    pub fn new(dir: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // Event paths from the OS are canonical.
        let dir = dir
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| dir.as_ref().to_path_buf());

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %dir.display(), ?debounce, "watching notes");

        Ok(Self {
            _watcher: watcher,
            rx,
            dir,
            debounce,
            pending: NoteChanges::default(),
            pending_since: None,
        })
    }

    /// The canonical directory being watched.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Drain pending events; returns the changes once they have settled.
    pub fn take_changes(&mut self) -> Option<NoteChanges> {
        let mut saw_relevant_event = false;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) => {
                    if self.record(&ev) {
                        saw_relevant_event = true;
                    } else {
                        tracing::trace!(kind = ?ev.kind, paths = ?ev.paths, "ignored event");
                    }
                }
                Err(err) => tracing::warn!("watcher error: {err}"),
            }
        }

        if saw_relevant_event {
            self.pending_since = Some(Instant::now());
        }

        let pending_since = self.pending_since?;
        if pending_since.elapsed() < self.debounce {
            return None;
        }
        self.pending_since = None;
        let changes = std::mem::take(&mut self.pending);
        tracing::debug!(notes = ?changes.notes, directory = changes.directory, "notes changed");
        Some(changes)
    }

    /// Fold an event into the pending set. Returns whether it mattered.
    fn record(&mut self, event: &Event) -> bool {
        let mut relevant = false;
        for path in &event.paths {
            if path == &self.dir {
                self.pending.directory = true;
                relevant = true;
            } else if let Some(name) = self.note_name(path) {
                self.pending.notes.insert(name);
                relevant = true;
            }
        }
        relevant
    }

    fn note_name(&self, path: &Path) -> Option<String> {
        if path.parent()? != self.dir || !is_note_file(path) {
            return None;
        }
        let name = path.file_name()?.to_string_lossy();
        (!name.starts_with('.')).then(|| name.to_string())
    }
}
