//! Domain layer - Business logic and domain models

pub mod detail;
pub mod entry;
pub mod mood;
pub mod views;

pub use detail::{DetailState, DetailView};
pub use entry::{Entry, EntryDate, NewEntry};
pub use mood::{find_mood, Mood, MoodCategory};
pub use views::{journal_view, today_view, Preview};
