//! PostgreSQL adapter for EntryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::entities::{Category, Entry, EntryId, NewEntry};
use crate::domain::ports::EntryRepository;
use crate::entity::entries;
use crate::error::DomainError;

/// PostgreSQL implementation of EntryRepository
#[derive(Clone)]
pub struct PostgresEntryRepository {
    db: DatabaseConnection,
}

impl PostgresEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn create(&self, entry: &NewEntry) -> Result<Entry, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = entries::ActiveModel {
            id: Set(id),
            date: Set(entry.date),
            category: Set(entry.category.to_string()),
            text: Set(entry.text.clone()),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn list_all(&self) -> Result<Vec<Entry>, DomainError> {
        // date desc for the journal view; created_at asc keeps a day's
        // entries in submission order
        let results = entries::Entity::find()
            .order_by_desc(entries::Column::Date)
            .order_by_asc(entries::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<entries::Model> for Entry {
    fn from(model: entries::Model) -> Self {
        Entry {
            id: EntryId(model.id),
            date: model.date,
            category: model.category.parse().unwrap_or(Category::Work),
            text: model.text,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
