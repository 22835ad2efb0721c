//! SeaORM table models
//!
//! Persistence-side models, kept separate from the domain entities in
//! `domain::entities`. The server creates the schema from these at startup.

pub mod entries;
