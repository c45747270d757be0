//! Mood palette

use crate::error::{MoodlogError, Result};
use std::fmt;

/// A glyph and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub emoji: &'static str,
    pub label: &'static str,
}

impl Mood {
    const fn new(emoji: &'static str, label: &'static str) -> Self {
        Mood { emoji, label }
    }
}

/// Palette groups, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 3] = [
        MoodCategory::Positive,
        MoodCategory::Neutral,
        MoodCategory::Negative,
    ];

    /// Moods in this category
    pub fn moods(&self) -> &'static [Mood] {
        match self {
            MoodCategory::Positive => &POSITIVE,
            MoodCategory::Neutral => &NEUTRAL,
            MoodCategory::Negative => &NEGATIVE,
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Negative => "Negative",
        };
        f.write_str(name)
    }
}

static POSITIVE: [Mood; 6] = [
    Mood::new("🥰", "Loved"),
    Mood::new("😊", "Happy"),
    Mood::new("🥳", "Excited"),
    Mood::new("😌", "Relaxed"),
    Mood::new("🤩", "Grateful"),
    Mood::new("😇", "Hopeful"),
];

static NEUTRAL: [Mood; 6] = [
    Mood::new("😶", "Neutral"),
    Mood::new("😐", "Meh"),
    Mood::new("🤔", "Confused"),
    Mood::new("😴", "Tired"),
    Mood::new("😶‍🌫️", "Numb"),
    Mood::new("😷", "Sick"),
];

static NEGATIVE: [Mood; 6] = [
    Mood::new("😔", "Sad"),
    Mood::new("😟", "Anxious"),
    Mood::new("😤", "Frustrated"),
    Mood::new("😠", "Angry"),
    Mood::new("😢", "Heartbroken"),
    Mood::new("😩", "Overwhelmed"),
];

/// Look up a mood by label (case-insensitive) or by emoji
pub fn find_mood(query: &str) -> Result<Mood> {
    let query = query.trim();
    if query.is_empty() {
        return Err(MoodlogError::Validation("mood".to_string()));
    }

    MoodCategory::ALL
        .iter()
        .flat_map(|category| category.moods().iter())
        .find(|mood| mood.emoji == query || mood.label.eq_ignore_ascii_case(query))
        .copied()
        .ok_or_else(|| MoodlogError::UnknownMood(query.to_string()))
}
