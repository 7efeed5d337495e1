//! Application state and note workflow.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::dispatch`]: Runs `update` plus the storage side effects
//! - [`App::watch`]: Live preview loop driven by the notes directory

mod effects;
mod event_loop;
mod model;
mod update;

pub use effects::NoPicker;
pub use model::{Model, Notice, NoticeLevel};
pub use update::{Message, update};

use crate::config::ThemeMode;
use crate::document::Pipeline;
use crate::storage::{DestinationPicker, FsNoteStore, NoteStore};
use crate::ui::PreviewPage;

/// Owns the note store and performs the effects `update` asks for.
pub struct App<S: NoteStore = FsNoteStore> {
    store: S,
    pipeline: Pipeline,
    picker: Box<dyn DestinationPicker>,
    theme: ThemeMode,
    sidebar_visible: bool,
    status_visible: bool,
}

impl<S: NoteStore> App<S> {
    /// Create a new application over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            pipeline: Pipeline::new(),
            picker: Box::new(NoPicker),
            theme: ThemeMode::Auto,
            sidebar_visible: true,
            status_visible: true,
        }
    }

    /// Set how Save As asks for a note name.
    pub fn with_picker(mut self, picker: Box<dyn DestinationPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Set the initial preview theme.
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set initial sidebar visibility.
    pub const fn with_sidebar(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }

    /// Show or hide the word count line on rendered pages.
    pub const fn with_status_line(mut self, visible: bool) -> Self {
        self.status_visible = visible;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// A fresh untitled model with the notes list loaded.
    pub fn init(&mut self) -> Model {
        let mut model = Model::new();
        model.theme = self.theme;
        model.sidebar_visible = self.sidebar_visible;
        self.dispatch(model, Message::RefreshNotes)
    }

    /// Open `name` on top of a fresh model.
    pub fn open(&mut self, name: &str) -> Model {
        let model = self.init();
        self.dispatch(model, Message::OpenNote(name.to_string()))
    }

    /// The model as a standalone HTML page.
    pub fn render_page(&self, model: &Model) -> String {
        let body = model.preview_html(&self.pipeline);
        PreviewPage {
            title: &model.active_note,
            body_html: &body,
            theme: model.theme,
            sidebar: model.sidebar_visible.then_some(model.notes.as_slice()),
            stats: self.status_visible.then(|| model.stats()),
        }
        .to_html()
    }
}
