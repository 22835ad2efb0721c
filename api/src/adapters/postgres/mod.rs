//! PostgreSQL adapters

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::entries;
use crate::error::DomainError;

mod entry_repo;

pub use entry_repo::PostgresEntryRepository;

/// Create the `entries` table if it does not exist yet.
///
/// The schema is derived from the entity model, so the table definition has
/// a single source of truth.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(entries::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}
