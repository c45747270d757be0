//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod entry_store;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use editor::EditorSession;
pub use entry_store::{EntryStore, ENTRIES_KEY};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileSystemStore, KeyValueStore, MemoryStore};
