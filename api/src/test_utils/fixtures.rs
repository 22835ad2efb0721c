//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{Category, Entry, EntryId, NewEntry};

/// Create a test entry with default values
pub fn test_entry() -> Entry {
    test_entry_on(
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        Category::Work,
        "Wrote the quarterly summary",
    )
}

/// Create a test entry on a specific date
pub fn test_entry_on(date: NaiveDate, category: Category, text: &str) -> Entry {
    Entry {
        id: EntryId::new(),
        date,
        category,
        text: text.to_string(),
        created_at: Utc::now(),
    }
}

/// Create a valid creation payload
pub fn test_new_entry(date: NaiveDate, category: Category, text: &str) -> NewEntry {
    NewEntry::new(date, category, text.to_string()).unwrap()
}
