//! Configuration management

use crate::domain::views::{JOURNAL_PREVIEW_WIDTH, TODAY_PREVIEW_WIDTH};
use crate::domain::Preview;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory marking a journal root; also holds config and records
pub const MOODLOG_DIR: &str = ".moodlog";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default = "default_today_preview")]
    pub today_preview: usize,
    #[serde(default = "default_journal_preview")]
    pub journal_preview: usize,
    pub created: DateTime<Utc>,
}

fn default_today_preview() -> usize {
    TODAY_PREVIEW_WIDTH
}

fn default_journal_preview() -> usize {
    JOURNAL_PREVIEW_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            today_preview: TODAY_PREVIEW_WIDTH,
            journal_preview: JOURNAL_PREVIEW_WIDTH,
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(MOODLOG_DIR);
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    pub fn today_preview(&self) -> Preview {
        Preview::Today {
            width: self.today_preview,
        }
    }

    pub fn journal_preview(&self) -> Preview {
        Preview::Journal {
            width: self.journal_preview,
        }
    }

    /// Parse a preview width setting
    pub fn parse_preview_width(value: &str) -> Result<usize> {
        match value.trim().parse::<usize>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(MoodlogError::Config(format!(
                "Invalid preview width: '{}'",
                value
            ))),
        }
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
