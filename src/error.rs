//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Missing fields: {0}")]
    Validation(String),

    #[error("Not allowed while {0}")]
    InvalidState(String),

    #[error("Stored record '{key}' is corrupt: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::EntryNotFound(_) => 3,
            MoodlogError::Validation(_) | MoodlogError::UnknownMood(_) => 4,
            MoodlogError::CorruptStore { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodlog list' to see entry ids\n\
                    • The entry may have been deleted already",
                    id
                )
            }
            MoodlogError::UnknownMood(mood) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Moods can be given by label (case-insensitive) or emoji.\n\
                    Use 'moodlog moods' to see the palette.\n\n\
                    Examples:\n\
                    moodlog add --mood happy \"Good day\"\n\
                    moodlog add --mood 😴 \"Long night\"",
                    mood
                )
            }
            MoodlogError::Validation(msg) => {
                format!(
                    "Missing fields: {}\n\n\
                    Please select a mood and write something.",
                    msg
                )
            }
            MoodlogError::CorruptStore { key, source } => {
                format!(
                    "Stored record '{}' could not be read: {}\n\n\
                    Suggestions:\n\
                    • Inspect .moodlog/{}.json by hand\n\
                    • Run 'moodlog clear' to discard all entries and start over",
                    key, source, key
                )
            }
            MoodlogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodlog config editor 'vim'\n\
                    • Pass the text directly: moodlog add --mood happy \"Good day\"",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("preview width") {
                    format!(
                        "{}\n\n\
                        Preview widths are positive character counts.\n\
                        Example: moodlog config today_preview 80",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
