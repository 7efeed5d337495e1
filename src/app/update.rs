use crate::app::Model;
use crate::app::model::NoticeLevel;
use crate::config::ThemeMode;
use crate::editor::{EditorBuffer, FormatOp, Selection};
use crate::storage::UNTITLED;

/// All possible events and actions in the application.
///
/// These represent user input, storage results, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Toolbar formatting on the current selection
    Format(FormatOp),
    /// Section separator at the cursor
    InsertSeparator,
    /// Enter key (continues lists)
    LineBreak,
    /// Typed or pasted text replacing the selection
    InsertText(String),
    /// Backspace
    DeleteBack,
    /// Selection moved by the input surface
    SetSelection(Selection),

    // Notes
    /// Start a blank untitled note
    NewNote,
    /// Open a note from storage
    OpenNote(String),
    /// Note text arrived from storage
    NoteLoaded { name: String, content: String },
    /// Save to the active note (or ask for a name if untitled)
    Save,
    /// Save under a new name
    SaveAs,
    /// Save finished under this name
    Saved(String),
    /// User dismissed the save dialog
    SaveCancelled,
    /// Re-read the notes list
    RefreshNotes,
    /// Notes list arrived from storage
    NotesListed(Vec<String>),
    /// A storage action failed; the buffer is left alone
    StorageFailed(String),

    // Chrome
    /// Toggle the notes sidebar
    ToggleSidebar,
    /// Switch between light and dark preview
    ToggleDarkMode,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Storage messages that need I/O are no-ops here and handled by
/// [`App::dispatch`](crate::app::App::dispatch).
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(
        msg,
        Message::Saved(_) | Message::SaveCancelled | Message::StorageFailed(_)
    ) {
        model.clear_notice();
    }

    match msg {
        // Editing
        Message::Format(op) => model.buffer.format(op),
        Message::InsertSeparator => model.buffer.format(FormatOp::Separator),
        Message::LineBreak => {
            model.buffer.line_break();
        }
        Message::InsertText(text) => model.buffer.insert_str(&text),
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::SetSelection(selection) => model.buffer.set_selection(selection),

        // Notes
        Message::NewNote => {
            model.buffer = EditorBuffer::empty();
            model.active_note = UNTITLED.to_string();
            model.remember_note(UNTITLED);
        }
        Message::NoteLoaded { name, content } => {
            model.buffer.replace_all(&content);
            if model.is_untitled() {
                model.notes.retain(|n| n != UNTITLED);
            }
            model.active_note = name;
        }
        Message::Saved(name) => {
            model.buffer.mark_clean();
            if model.is_untitled() {
                model.notes.retain(|n| n != UNTITLED);
            }
            model.remember_note(&name);
            model.show_notice(NoticeLevel::Info, format!("Saved {name}"));
            model.active_note = name;
        }
        Message::SaveCancelled => {
            model.show_notice(NoticeLevel::Warning, "Save cancelled");
        }
        Message::NotesListed(mut notes) => {
            if model.is_untitled() && !notes.iter().any(|n| n == UNTITLED) {
                notes.push(UNTITLED.to_string());
            }
            model.notes = notes;
        }
        Message::StorageFailed(err) => {
            model.show_notice(NoticeLevel::Error, err);
        }
        // OpenNote/Save/SaveAs/RefreshNotes: handled in App::dispatch (side effect)
        Message::OpenNote(_) | Message::Save | Message::SaveAs | Message::RefreshNotes => {}

        // Chrome
        Message::ToggleSidebar => {
            model.sidebar_visible = !model.sidebar_visible;
        }
        Message::ToggleDarkMode => {
            model.theme = match model.theme {
                ThemeMode::Dark => ThemeMode::Light,
                ThemeMode::Light | ThemeMode::Auto => ThemeMode::Dark,
            };
        }
    }

    model
}
