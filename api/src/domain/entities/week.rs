//! Week bucket view model
//!
//! The aggregation unit: one Sunday-anchored week of entries, subdivided by
//! category. Derived on every read, never persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{Category, Entry};

/// One week of the journal, grouped by category
///
/// A category with no entries in the week is absent from the map, not an
/// empty list; the page skips headings for absent categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    /// The Sunday on/before every bucketed entry's date
    pub week_start: NaiveDate,
    pub entries_by_category: BTreeMap<Category, Vec<Entry>>,
}

impl WeekBucket {
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            entries_by_category: BTreeMap::new(),
        }
    }

    /// Entries in rendering order: category order, then input order within a slot
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries_by_category.values().flatten()
    }
}
