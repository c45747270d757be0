//! Entry store: CRUD over the persisted entry collection
//!
//! The collection lives under a single key as a JSON array. Every mutation
//! reads the whole collection, changes it in memory and writes it back while
//! holding both the in-process writer mutex and the storage write lock.

use crate::domain::{Entry, NewEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error};

/// Record name holding the entry collection
pub const ENTRIES_KEY: &str = "entries";

pub struct EntryStore<S> {
    storage: S,
    writer: Mutex<()>,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        EntryStore {
            storage,
            writer: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All stored entries, in stored order. An absent record is an empty list.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let Some(raw) = self.storage.get(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| {
            error!(key = ENTRIES_KEY, error = %source, "stored entries are corrupt");
            MoodlogError::CorruptStore {
                key: ENTRIES_KEY.to_string(),
                source,
            }
        })
    }

    /// Find one entry by id
    pub fn get(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    /// Validate and add a new entry at the head of the collection
    pub fn append(&self, mood: &str, label: &str, text: &str) -> Result<Entry> {
        self.append_at(mood, label, text, Utc::now())
    }

    /// `append` with an explicit creation time
    pub fn append_at(
        &self,
        mood: &str,
        label: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        let draft = NewEntry::validate(mood, label, text)?;

        let mut created = None;
        self.read_modify_write("append", |entries| {
            let entry = Entry::create(draft, now, entries);
            created = Some(entry.clone());
            entries.insert(0, entry);
            true
        })?;

        let entry = created.ok_or_else(|| {
            MoodlogError::InvalidState("append finished without an entry".to_string())
        })?;
        debug!(id = %entry.id, label = %entry.label, "appended entry");
        Ok(entry)
    }

    /// Replace the text of entry `id`. Returns false when no such entry exists.
    pub fn update_text(&self, id: &str, text: &str) -> Result<bool> {
        let updated = self.read_modify_write("update", |entries| {
            match entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    entry.text = text.to_string();
                    true
                }
                None => false,
            }
        })?;

        debug!(id, updated, "update text");
        Ok(updated)
    }

    /// Remove entry `id`. Returns false when no such entry exists.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.read_modify_write("delete", |entries| {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            entries.len() != before
        })?;

        debug!(id, removed, "delete entry");
        Ok(removed)
    }

    /// Drop the whole persisted collection
    pub fn clear_all(&self) -> Result<()> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.storage
            .with_write_lock(ENTRIES_KEY, || self.storage.remove(ENTRIES_KEY))
            .inspect_err(|e| error!(op = "clear", error = %e, "store operation failed"))?;

        debug!("cleared all entries");
        Ok(())
    }

    /// Load, let `change` edit the collection, and persist if it reports a change
    fn read_modify_write(
        &self,
        op: &'static str,
        change: impl FnOnce(&mut Vec<Entry>) -> bool,
    ) -> Result<bool> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        self.storage
            .with_write_lock(ENTRIES_KEY, || {
                let mut entries = self.list()?;
                if !change(&mut entries) {
                    return Ok(false);
                }
                let serialized = serde_json::to_string(&entries)?;
                self.storage.set(ENTRIES_KEY, &serialized)?;
                Ok(true)
            })
            .inspect_err(|e| error!(op, error = %e, "store operation failed"))
    }
}
