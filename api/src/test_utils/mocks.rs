//! Mock implementations of port traits
//!
//! In-memory implementations that store data in memory and let tests verify
//! behavior without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{Entry, EntryId, NewEntry};
use crate::domain::ports::EntryRepository;
use crate::error::DomainError;

/// In-memory entry store
///
/// Keeps entries in insertion order and reproduces the adapter's listing
/// order: date descending, creation order within a day.
#[derive(Default, Clone)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an entry for testing
    pub fn with_entry(self, entry: Entry) -> Self {
        self.entries.write().unwrap().push(entry);
        self
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn create(&self, new_entry: &NewEntry) -> Result<Entry, DomainError> {
        let entry = Entry {
            id: EntryId::new(),
            date: new_entry.date,
            category: new_entry.category,
            text: new_entry.text.clone(),
            created_at: Utc::now(),
        };

        self.entries.write().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<Entry>, DomainError> {
        let mut entries = self.entries.read().unwrap().clone();
        // Stable sort: insertion order survives within a date
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}
