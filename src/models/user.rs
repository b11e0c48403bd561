use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MovieSummary;

/// Full user record as persisted in the store
///
/// The password exists only as a bcrypt hash. History entries are embedded in
/// the record and owned by it; they are not independently addressable.
/// `history_rev` is bumped on every history write and compared on
/// read-modify-write updates so concurrent sessions cannot silently clobber
/// each other.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub history: Vec<HistoryEntry>,
    pub history_rev: i64,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            history: Vec::new(),
            history_rev: 0,
            created_at: Utc::now(),
        }
    }
}

/// One saved record of an emotion-or-search event and its selected movies
///
/// Appended as a whole unit; immutable once written except for deletion of
/// the entire entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub emotion: String,
    pub movies: Vec<MovieSummary>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds a complete entry from client-supplied content
    pub fn new(emotion: String, movies: Vec<MovieSummary>) -> Self {
        Self {
            id: Uuid::new_v4(),
            emotion,
            movies,
            timestamp: Utc::now(),
        }
    }
}

/// The user's history as loaded from the store, with its revision counter
#[derive(Debug, Clone)]
pub struct HistoryVersion {
    pub rev: i64,
    pub entries: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_record_starts_with_empty_history() {
        let user = UserRecord::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "$2b$12$hash".to_string(),
        );
        assert!(user.history.is_empty());
        assert_eq!(user.history_rev, 0);
    }

    #[test]
    fn test_history_entry_serde_round_trip() {
        let entry = HistoryEntry::new(
            "happy".to_string(),
            vec![MovieSummary {
                id: 27205,
                title: "Inception".to_string(),
                poster_path: None,
                vote_average: Some(8.4),
                overview: None,
                release_date: Some("2010-07-15".to_string()),
            }],
        );

        let json = serde_json::to_string(&entry).unwrap();
        // The entry id travels as `_id`, matching what clients key deletes on
        assert!(json.contains(r#""_id""#));

        let parsed: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_history_entries_get_distinct_ids() {
        let a = HistoryEntry::new("sad".to_string(), vec![]);
        let b = HistoryEntry::new("sad".to_string(), vec![]);
        assert_ne!(a.id, b.id);
    }
}
