use crate::app::{App, Message, Model, update};
use crate::storage::{
    DestinationPicker, NoteStore, StorageError, StorageOutcome, normalize_note_name,
};

/// Picker for non-interactive use; every Save As is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPicker;

impl DestinationPicker for NoPicker {
    fn choose(&mut self, _suggested: &str) -> Option<String> {
        None
    }
}

impl<S: NoteStore> App<S> {
    /// Apply `msg` and any storage work it triggers.
    ///
    /// Storage results come back through `update` as follow-up messages, so
    /// a failure only ever adds a notice and never touches the buffer.
    pub fn dispatch(&mut self, model: Model, msg: Message) -> Model {
        let follow_up = self.handle_message_side_effects(&model, &msg);
        let model = update(model, msg);
        match follow_up {
            Some(next) => update(model, next),
            None => model,
        }
    }

    fn handle_message_side_effects(&mut self, model: &Model, msg: &Message) -> Option<Message> {
        match msg {
            Message::OpenNote(name) => Some(self.open_note(name)),
            Message::Save if model.is_untitled() => Some(self.save_as(model)),
            Message::Save => Some(
                match self.store.write(&model.active_note, &model.buffer.text()) {
                    Ok(()) => Message::Saved(model.active_note.clone()),
                    Err(err) => failed("save", &err),
                },
            ),
            Message::SaveAs => Some(self.save_as(model)),
            Message::RefreshNotes => Some(match self.store.list() {
                Ok(notes) => Message::NotesListed(notes),
                Err(err) => failed("list", &err),
            }),
            _ => None,
        }
    }

    /// Load a note under its canonical name, so `round1` and `round1.md`
    /// are the same note to the watcher and the notes list.
    fn open_note(&self, input: &str) -> Message {
        let loaded = normalize_note_name(input).and_then(|name| {
            let content = self.store.read(&name)?;
            Ok(Message::NoteLoaded { name, content })
        });
        loaded.unwrap_or_else(|err| failed("open", &err))
    }

    fn save_as(&mut self, model: &Model) -> Message {
        match self.store.save_as(&model.buffer.text(), self.picker.as_mut()) {
            Ok(StorageOutcome::Completed(name)) => Message::Saved(name),
            Ok(StorageOutcome::Cancelled) => Message::SaveCancelled,
            Err(err) => failed("save", &err),
        }
    }
}

fn failed(action: &str, err: &StorageError) -> Message {
    tracing::warn!(action, "storage failed: {err}");
    Message::StorageFailed(format!("Could not {action} note: {err}"))
}
