//! Feedback entry model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Highest rating a feedback entry can carry.
pub const MAX_RATING: u8 = 5;

/// Placeholder shown when a visitor leaves the name blank.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// A unique identifier for a feedback entry.
///
/// Assigned as the creation time in Unix milliseconds, so ids are
/// monotonically increasing in practice but not guaranteed under clock skew.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Create an id from a raw millisecond value
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw millisecond value of this id
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One visitor feedback record.
///
/// Entries are immutable after creation; the serialized shape is the
/// persisted wire format and must stay field-compatible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Unique identifier (creation time in Unix ms)
    pub id: EntryId,
    /// Visitor name
    pub name: String,
    /// Feedback body, free text
    pub feedback: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Creation timestamp (Unix ms); render sort key
    pub timestamp: i64,
}

impl FeedbackEntry {
    /// Visitor name to display; blank names fall back to the placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            ANONYMOUS_NAME
        } else {
            &self.name
        }
    }

    /// Avatar initial: first character of the name, uppercased, or `A`.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "A".to_string(), |ch| ch.to_uppercase().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry_named(name: &str) -> FeedbackEntry {
        FeedbackEntry {
            id: EntryId::new(1000),
            name: name.to_string(),
            feedback: "Great work on the gallery section".to_string(),
            rating: 4,
            timestamp: 1000,
        }
    }

    #[test]
    fn test_entry_id_display_and_parse() {
        let id = EntryId::new(1_705_276_800_000);
        assert_eq!(id.to_string(), "1705276800000");

        let parsed: EntryId = "1705276800000".parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_entry_id_rejects_non_numeric() {
        assert!("not-an-id".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_placeholder() {
        assert_eq!(entry_named("Ana").display_name(), "Ana");
        assert_eq!(entry_named("").display_name(), ANONYMOUS_NAME);
        assert_eq!(entry_named("   ").display_name(), ANONYMOUS_NAME);
    }

    #[test]
    fn test_initial_uppercases_first_char() {
        assert_eq!(entry_named("ana").initial(), "A");
        assert_eq!(entry_named("Bruno").initial(), "B");
        assert_eq!(entry_named("").initial(), "A");
    }

    #[test]
    fn test_serde_wire_shape() {
        let entry = entry_named("Ana");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], 1000);
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["feedback"], "Great work on the gallery section");
        assert_eq!(json["rating"], 4);
        assert_eq!(json["timestamp"], 1000);
    }
}
