use crate::config::ThemeMode;
use crate::document::Pipeline;
use crate::editor::EditorBuffer;
use crate::storage::UNTITLED;
use crate::ui::NoteStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message for the user, e.g. after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The note being edited
    pub buffer: EditorBuffer,
    /// Name of the open note, [`UNTITLED`] until first saved
    pub active_note: String,
    /// Notes shown in the sidebar
    pub notes: Vec<String>,
    /// Whether the notes sidebar is visible
    pub sidebar_visible: bool,
    /// Preview color scheme
    pub theme: ThemeMode,
    notice: Option<Notice>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// An untitled, empty note with the sidebar visible.
    pub fn new() -> Self {
        Self {
            buffer: EditorBuffer::empty(),
            active_note: UNTITLED.to_string(),
            notes: Vec::new(),
            sidebar_visible: true,
            theme: ThemeMode::Auto,
            notice: None,
        }
    }

    /// A model with `text` loaded as note `name`.
    pub fn with_note(name: &str, text: &str) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            active_note: name.to_string(),
            ..Self::new()
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.active_note == UNTITLED
    }

    /// Rendered preview of the current text. Recomputed on every call.
    pub fn preview_html(&self, pipeline: &Pipeline) -> String {
        pipeline.to_html(&self.buffer.text())
    }

    pub fn stats(&self) -> NoteStats {
        NoteStats::from_text(&self.buffer.text())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Add `name` to the notes list, keeping it sorted.
    pub(super) fn remember_note(&mut self, name: &str) {
        if !self.notes.iter().any(|n| n == name) {
            self.notes.push(name.to_string());
            self.notes
                .sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        }
    }
}
