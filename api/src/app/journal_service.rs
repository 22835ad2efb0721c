//! Journal service
//!
//! Orchestrates the entry store and the weekly grouping: one write (create)
//! and one read (list + aggregate) per request cycle.

use std::sync::Arc;

use crate::domain::aggregate::aggregate;
use crate::domain::entities::{Entry, NewEntry, WeekBucket};
use crate::domain::ports::EntryRepository;
use crate::error::DomainError;

/// Service for creating entries and building the weekly journal view
pub struct JournalService<ER>
where
    ER: EntryRepository,
{
    entries: Arc<ER>,
}

impl<ER> JournalService<ER>
where
    ER: EntryRepository,
{
    pub fn new(entries: Arc<ER>) -> Self {
        Self { entries }
    }

    /// Persist a validated entry
    pub async fn create_entry(&self, new_entry: NewEntry) -> Result<Entry, DomainError> {
        let entry = self.entries.create(&new_entry).await?;
        tracing::info!(
            "Created entry {} ({} / {})",
            entry.id,
            entry.date,
            entry.category
        );
        Ok(entry)
    }

    /// The journal grouped by week and category, most recent week first
    pub async fn weekly_view(&self) -> Result<Vec<WeekBucket>, DomainError> {
        let entries = self.entries.list_all().await?;
        Ok(aggregate(entries))
    }
}
