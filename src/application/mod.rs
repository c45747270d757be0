//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod browse;
pub mod clear_data;
pub mod entry_detail;
pub mod init;
pub mod manage_config;

pub use add_entry::{AddEntryService, TextSource};
pub use browse::BrowseService;
pub use clear_data::clear_data;
pub use entry_detail::{DeleteOutcome, DetailSession};
pub use manage_config::{ConfigService, CONFIG_KEYS};
