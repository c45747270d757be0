//! Compose a new entry use case

use crate::domain::{find_mood, Entry};
use crate::error::Result;
use crate::infrastructure::{EditorSession, EntryStore, KeyValueStore};
use tracing::info;

/// Where the body text of an entry comes from
pub enum TextSource {
    /// Text supplied directly
    Given(String),
    /// Compose in an external editor, starting from the current text
    Editor(EditorSession),
}

impl TextSource {
    /// Produce the text, starting the editor from `initial` if needed.
    /// Trailing whitespace left by the editor is dropped.
    pub fn resolve(self, initial: &str) -> Result<String> {
        match self {
            TextSource::Given(text) => Ok(text),
            TextSource::Editor(session) => {
                let text = session.compose(initial)?;
                Ok(text.trim_end().to_string())
            }
        }
    }
}

/// Service for adding entries to the journal
pub struct AddEntryService<'a, S> {
    store: &'a EntryStore<S>,
}

impl<'a, S: KeyValueStore> AddEntryService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        AddEntryService { store }
    }

    /// Resolve `mood` against the palette, obtain the text and append the entry
    pub fn execute(&self, mood: &str, text: TextSource) -> Result<Entry> {
        let mood = find_mood(mood)?;
        let text = text.resolve("")?;

        let entry = self.store.append(mood.emoji, mood.label, &text)?;
        info!(id = %entry.id, mood = mood.label, "added entry");
        Ok(entry)
    }
}
