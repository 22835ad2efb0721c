//! Entry domain entity
//!
//! A single journal record: a calendar date, a category, and free text.
//! Entries are immutable once created and owned by the entry store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category classifying an entry
///
/// Variant order is the display order of the journal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Work,
    Learning,
    InterestingThing,
}

impl Category {
    /// Heading shown above this category's list on the journal page
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Learning => "Learnings",
            Category::InterestingThing => "Interesting things",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Work => write!(f, "work"),
            Category::Learning => write!(f, "learning"),
            Category::InterestingThing => write!(f, "interesting-thing"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "learning" => Ok(Category::Learning),
            "interesting-thing" => Ok(Category::InterestingThing),
            _ => Err(format!(
                "Unknown category: {}. Use: work, learning, interesting-thing",
                s
            )),
        }
    }
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    /// Timezone-naive calendar day; week bucketing keys off this alone
    pub date: NaiveDate,
    pub category: Category,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub text: String,
}

impl NewEntry {
    pub fn new(date: NaiveDate, category: Category, text: String) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation("entry text is empty".to_string()));
        }
        Ok(Self {
            date,
            category,
            text,
        })
    }

    /// Build from the three raw form fields, rejecting anything malformed
    pub fn parse(date: &str, category: &str, text: &str) -> Result<Self, DomainError> {
        let date: NaiveDate = date
            .parse()
            .map_err(|_| DomainError::Validation(format!("invalid date: {}", date)))?;
        let category: Category = category.parse().map_err(DomainError::Validation)?;
        Self::new(date, category, text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!("learning".parse::<Category>().unwrap(), Category::Learning);
        assert_eq!(
            "interesting-thing".parse::<Category>().unwrap(),
            Category::InterestingThing
        );
        assert_eq!("Work".parse::<Category>().unwrap(), Category::Work);
        assert!("interesting".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn category_display_round_trips() {
        for category in [Category::Work, Category::Learning, Category::InterestingThing] {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_order_matches_page_order() {
        assert!(Category::Work < Category::Learning);
        assert!(Category::Learning < Category::InterestingThing);
    }

    #[test]
    fn new_entry_rejects_blank_text() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert!(NewEntry::new(date, Category::Work, "  ".to_string()).is_err());
        assert!(NewEntry::new(date, Category::Work, "did a thing".to_string()).is_ok());
    }

    #[test]
    fn parse_rejects_malformed_fields() {
        assert!(NewEntry::parse("2024-05-06", "work", "ok").is_ok());
        assert!(NewEntry::parse("05/06/2024", "work", "ok").is_err());
        assert!(NewEntry::parse("2024-05-06", "chores", "ok").is_err());
        assert!(NewEntry::parse("2024-05-06", "work", "").is_err());
    }
}
