//! Weekly grouping
//!
//! Transforms the flat, date-descending entry list into week buckets
//! subdivided by category. Pure function: no I/O, no clock, identical output
//! for identical input.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::entities::{Entry, WeekBucket};

/// The Sunday on/before `date`. A Sunday maps to itself.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// Group entries into week buckets, subdivided by category.
///
/// Entries must already be sorted by date descending; within a day the given
/// order is preserved, not re-sorted. Buckets come out in first-encounter
/// order of their week key, so a date-descending input yields most recent
/// week first. A category with no entries in a week is absent from the
/// bucket's map rather than present as an empty list.
pub fn aggregate(entries: Vec<Entry>) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for entry in entries {
        let key = week_start(entry.date);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                index.insert(key, buckets.len());
                buckets.push(WeekBucket::new(key));
                buckets.len() - 1
            }
        };
        buckets[slot]
            .entries_by_category
            .entry(entry.category)
            .or_default()
            .push(entry);
    }

    buckets
}
