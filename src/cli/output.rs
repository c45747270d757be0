//! Output formatting utilities

use crate::domain::{DetailView, Entry, EntryDate, MoodCategory, Preview};
use chrono::TimeZone;
use std::fmt::Display;

/// Format the daily view: time, mood, preview and id per entry
pub fn format_today<Tz>(entries: &[Entry], preview: Preview, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return "No journal entries yet for today.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {}  [{}]\n    {}\n",
            stamp(&entry.date, tz, "%H:%M"),
            entry.mood,
            entry.label,
            entry.id,
            preview.apply(&entry.text)
        ));
    }
    output
}

/// Format the journal view: date, mood, preview and id per entry
pub fn format_journal<Tz>(entries: &[Entry], preview: Preview, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return "No journal entries yet.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {}  [{}]\n    {}\n",
            stamp(&entry.date, tz, "%a, %b %-d, %Y"),
            entry.mood,
            entry.label,
            entry.id,
            preview.apply(&entry.text)
        ));
    }
    output
}

/// Format one entry in full
pub fn format_detail<Tz>(view: &DetailView, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let entry = view.entry();
    format!(
        "{}\n{} {}\n\n{}\n",
        stamp(&entry.date, tz, "%a %b %d %Y"),
        entry.mood,
        entry.label,
        view.text()
    )
}

/// `date` in `tz` using `format`, or the stored text when it has no instant
fn stamp<Tz>(date: &EntryDate, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match date.in_timezone(tz) {
        Some(local) => local.format(format).to_string(),
        None => date.to_string(),
    }
}

/// Format the mood palette grouped by category
pub fn format_palette() -> String {
    let mut output = String::new();
    for category in MoodCategory::ALL {
        output.push_str(&format!("{}\n", category));
        for mood in category.moods() {
            output.push_str(&format!("  {} {}\n", mood.emoji, mood.label));
        }
    }
    output
}
