//! Journal entry model

use crate::error::{MoodlogError, Result};
use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single journal record.
///
/// `id`, `date`, `mood` and `label` are fixed at creation; only `text` is
/// ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub date: EntryDate,
    pub mood: String,
    pub label: String,
    pub text: String,
}

impl Entry {
    /// Build an entry created at `now`, choosing an id not already used in `existing`.
    pub fn create(draft: NewEntry, now: DateTime<Utc>, existing: &[Entry]) -> Self {
        let now = now.trunc_subsecs(3);
        Entry {
            id: Self::next_id(now, existing),
            date: EntryDate::from(now),
            mood: draft.mood,
            label: draft.label,
            text: draft.text,
        }
    }

    /// Millisecond timestamp of `now`, bumped until unique within `existing`
    fn next_id(now: DateTime<Utc>, existing: &[Entry]) -> String {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if !existing.iter().any(|e| e.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

/// Validated input for a new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub mood: String,
    pub label: String,
    pub text: String,
}

impl NewEntry {
    /// Validate raw composition input. The text is trimmed.
    pub fn validate(mood: &str, label: &str, text: &str) -> Result<Self> {
        let text = text.trim();

        let mut missing = Vec::new();
        if mood.trim().is_empty() || label.trim().is_empty() {
            missing.push("mood");
        }
        if text.is_empty() {
            missing.push("text");
        }
        if !missing.is_empty() {
            return Err(MoodlogError::Validation(missing.join(", ")));
        }

        Ok(NewEntry {
            mood: mood.to_string(),
            label: label.to_string(),
            text: text.to_string(),
        })
    }
}

/// Creation timestamp exactly as stored.
///
/// The stored text is written back unchanged, so rewriting the collection
/// never alters dates it did not create. The instant is resolved once on
/// read; a date that cannot be resolved keeps its text but has no instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDate {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl EntryDate {
    /// Accepts RFC 3339, offset-less date-times (local time) and bare dates (UTC midnight)
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = resolve_instant(raw.trim());
        EntryDate { raw, instant }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// The instant in `tz`, if the stored text could be resolved
    pub fn in_timezone<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.instant.map(|instant| instant.with_timezone(tz))
    }
}

fn resolve_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

impl From<DateTime<Utc>> for EntryDate {
    fn from(date: DateTime<Utc>) -> Self {
        EntryDate {
            raw: date.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant: Some(date),
        }
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for EntryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for EntryDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(EntryDate::parse)
    }
}
