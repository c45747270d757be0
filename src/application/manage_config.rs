//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Keys accepted by `get`
pub const CONFIG_KEYS: [&str; 4] = ["editor", "today_preview", "journal_preview", "created"];

/// Keys `get` accepts but `set` refuses
pub const READ_ONLY_KEYS: [&str; 1] = ["created"];

/// Keys accepted by `set`
pub fn writable_keys() -> Vec<&'static str> {
    CONFIG_KEYS
        .into_iter()
        .filter(|key| !READ_ONLY_KEYS.contains(key))
        .collect()
}

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "today_preview" => Ok(config.today_preview.to_string()),
            "journal_preview" => Ok(config.journal_preview.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "today_preview" => {
                config.today_preview = Config::parse_preview_width(value)?;
            }
            "journal_preview" => {
                config.journal_preview = Config::parse_preview_width(value)?;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    writable_keys().join(", ")
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
