//! Domain entities
//!
//! Pure domain models representing core journal concepts.
//! These are separate from the SeaORM models in the `entity` module.

pub mod entry;
pub mod week;

pub use entry::{Category, Entry, EntryId, NewEntry};
pub use week::WeekBucket;
