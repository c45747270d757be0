//! Daily and journal listings

use crate::domain::{journal_view, today_view, Entry};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use chrono::{DateTime, TimeZone};

/// Read-only listings over the entry store
pub struct BrowseService<'a, S> {
    store: &'a EntryStore<S>,
}

impl<'a, S: KeyValueStore> BrowseService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        BrowseService { store }
    }

    /// Entries written on the calendar day of `now`, newest first
    pub fn today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Vec<Entry>> {
        Ok(today_view(self.store.list()?, now))
    }

    /// Every entry, newest first, optionally cut to the newest `limit`
    pub fn journal(&self, limit: Option<usize>) -> Result<Vec<Entry>> {
        let mut entries = journal_view(self.store.list()?);
        if let Some(n) = limit {
            entries.truncate(n);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use chrono::Utc;

    fn seeded() -> EntryStore<MemoryStore> {
        let store = EntryStore::new(MemoryStore::new());
        for (day, text) in [(27, "d1"), (29, "d3"), (28, "d2")] {
            let at = Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap();
            store.append_at("😊", "Happy", text, at).unwrap();
        }
        store
    }

    fn texts(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_journal_newest_first() {
        let store = seeded();
        let entries = BrowseService::new(&store).journal(None).unwrap();
        assert_eq!(texts(&entries), vec!["d3", "d2", "d1"]);
    }

    #[test]
    fn test_journal_limit() {
        let store = seeded();
        let entries = BrowseService::new(&store).journal(Some(2)).unwrap();
        assert_eq!(texts(&entries), vec!["d3", "d2"]);
    }

    #[test]
    fn test_today_only_later_day() {
        let store = EntryStore::new(MemoryStore::new());
        let day_one = Utc.with_ymd_and_hms(2025, 6, 28, 10, 0, 0).unwrap();
        let day_two = Utc.with_ymd_and_hms(2025, 6, 29, 10, 0, 0).unwrap();
        store.append_at("😔", "Sad", "earlier day", day_one).unwrap();
        store.append_at("😊", "Happy", "later day", day_two).unwrap();

        let now = Utc.with_ymd_and_hms(2025, 6, 29, 22, 0, 0).unwrap();
        let entries = BrowseService::new(&store).today(&now).unwrap();

        assert_eq!(texts(&entries), vec!["later day"]);
    }

    #[test]
    fn test_empty_store() {
        let store = EntryStore::new(MemoryStore::new());
        let service = BrowseService::new(&store);
        assert!(service.journal(None).unwrap().is_empty());
        assert!(service.today(&Utc::now()).unwrap().is_empty());
    }
}
