//! moodlog - Mood journal for the terminal
//!
//! Pick a mood from a fixed emoji palette, write a short entry, and browse
//! past entries by day. Entries are kept as a single JSON record inside the
//! journal's `.moodlog` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
