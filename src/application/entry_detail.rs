//! Entry detail use case: view, edit and delete a single entry

use crate::domain::DetailView;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, KeyValueStore};
use tracing::{info, warn};

/// A detail view bound to the store it commits to
pub struct DetailSession<'a, S> {
    store: &'a EntryStore<S>,
    view: DetailView,
}

/// Result of a delete request
pub enum DeleteOutcome<'a, S> {
    /// The entry is gone and the session is over
    Deleted,
    /// Confirmation was refused; the session continues
    Kept(DetailSession<'a, S>),
}

impl<'a, S: KeyValueStore> DetailSession<'a, S> {
    /// Open the entry with the given id
    pub fn open(store: &'a EntryStore<S>, id: &str) -> Result<Self> {
        let entry = store
            .get(id)?
            .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;

        Ok(DetailSession {
            store,
            view: DetailView::new(entry),
        })
    }

    pub fn view(&self) -> &DetailView {
        &self.view
    }

    pub fn begin_edit(&mut self) -> Result<()> {
        self.view.begin_edit()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<()> {
        self.view.set_draft(text)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.view.cancel()
    }

    /// Commit the draft and return to viewing.
    ///
    /// Returns false if the entry disappeared from the store in the meantime.
    pub fn save(&mut self) -> Result<bool> {
        let id = self.view.entry().id.clone();
        let draft = self.view.draft_to_commit()?.to_string();

        let updated = self.store.update_text(&id, &draft)?;
        if updated {
            info!(id = %id, "saved entry");
        } else {
            warn!(id = %id, "entry vanished before save");
        }

        self.view.mark_saved()?;
        Ok(updated)
    }

    /// Delete the entry if `confirmed`. Only allowed while viewing.
    pub fn delete(self, confirmed: bool) -> Result<DeleteOutcome<'a, S>> {
        self.view.ensure_can_delete()?;
        if !confirmed {
            return Ok(DeleteOutcome::Kept(self));
        }

        let id = &self.view.entry().id;
        self.store.delete(id)?;
        info!(id = %id, "deleted entry");
        Ok(DeleteOutcome::Deleted)
    }
}
