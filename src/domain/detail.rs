//! Entry detail view state machine

use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use std::fmt;

/// Whether the body of the entry is being viewed or edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Viewing,
    Editing,
}

impl fmt::Display for DetailState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailState::Viewing => f.write_str("viewing"),
            DetailState::Editing => f.write_str("editing"),
        }
    }
}

/// One entry shown in detail, with an editable draft of its text.
///
/// Transitions:
/// - Viewing -> Editing: `begin_edit`
/// - Editing -> Viewing: `mark_saved` after the draft was committed, or `cancel`
///
/// Deleting is only allowed while Viewing.
#[derive(Debug, Clone)]
pub struct DetailView {
    entry: Entry,
    draft: String,
    state: DetailState,
}

impl DetailView {
    pub fn new(entry: Entry) -> Self {
        DetailView {
            draft: entry.text.clone(),
            entry,
            state: DetailState::Viewing,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    /// Text currently shown: the draft while editing, the stored text otherwise
    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn begin_edit(&mut self) -> Result<()> {
        self.require(DetailState::Viewing)?;
        self.state = DetailState::Editing;
        Ok(())
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<()> {
        self.require(DetailState::Editing)?;
        self.draft = text.into();
        Ok(())
    }

    /// Drop the draft and go back to the stored text
    pub fn cancel(&mut self) -> Result<()> {
        self.require(DetailState::Editing)?;
        self.draft = self.entry.text.clone();
        self.state = DetailState::Viewing;
        Ok(())
    }

    /// Whether the draft differs from the stored text
    pub fn is_dirty(&self) -> bool {
        self.draft != self.entry.text
    }

    /// Draft to hand to the store on save
    pub fn draft_to_commit(&self) -> Result<&str> {
        self.require(DetailState::Editing)?;
        Ok(&self.draft)
    }

    /// Record that the draft has been persisted
    pub fn mark_saved(&mut self) -> Result<()> {
        self.require(DetailState::Editing)?;
        self.entry.text = self.draft.clone();
        self.state = DetailState::Viewing;
        Ok(())
    }

    pub fn ensure_can_delete(&self) -> Result<()> {
        self.require(DetailState::Viewing)
    }

    fn require(&self, state: DetailState) -> Result<()> {
        if self.state == state {
            Ok(())
        } else {
            Err(MoodlogError::InvalidState(self.state.to_string()))
        }
    }
}
