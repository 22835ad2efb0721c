//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Entry, NewEntry};
use crate::error::DomainError;

/// Repository for Entry records
///
/// The store is append-only: entries are created and listed, never updated
/// or deleted.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Persist a new entry
    async fn create(&self, entry: &NewEntry) -> Result<Entry, DomainError>;

    /// All entries, ordered by date descending; within a day, creation order
    async fn list_all(&self) -> Result<Vec<Entry>, DomainError>;
}
