//! Read-side views over the entry collection

use crate::domain::Entry;
use chrono::{DateTime, TimeZone};
use std::borrow::Cow;

/// Default body width in the daily view
pub const TODAY_PREVIEW_WIDTH: usize = 100;

/// Default body width in the journal view
pub const JOURNAL_PREVIEW_WIDTH: usize = 60;

/// All entries, newest first. Entries with an unresolvable date sort last.
pub fn journal_view(mut entries: Vec<Entry>) -> Vec<Entry> {
    sort_newest_first(&mut entries);
    entries
}

/// Entries created on the calendar day of `now`, in `now`'s timezone, newest first.
/// An entry whose date cannot be resolved belongs to no day.
pub fn today_view<Tz: TimeZone>(entries: Vec<Entry>, now: &DateTime<Tz>) -> Vec<Entry> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut todays: Vec<Entry> = entries
        .into_iter()
        .filter(|e| {
            e.date
                .in_timezone(&tz)
                .is_some_and(|local| local.date_naive() == today)
        })
        .collect();
    sort_newest_first(&mut todays);
    todays
}

fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.instant().cmp(&a.date.instant()));
}

/// How a body is shortened for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Cut at `width` characters, followed by `...`
    Today { width: usize },
    /// Cut at `width` characters, followed by ` …`
    Journal { width: usize },
}

impl Preview {
    /// Shorten `text` for display. The stored text is never touched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let (width, marker) = match *self {
            Preview::Today { width } => (width, "..."),
            Preview::Journal { width } => (width, " …"),
        };

        match text.char_indices().nth(width) {
            Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], marker)),
            None => Cow::Borrowed(text),
        }
    }
}

impl Default for Preview {
    fn default() -> Self {
        Preview::Today {
            width: TODAY_PREVIEW_WIDTH,
        }
    }
}
