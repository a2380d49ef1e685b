use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single released chapter of a Title
/// Chapters are the unit of reading progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Chapter number, unique within the parent Title (higher = more recent)
    pub number: u32,

    /// Display title
    pub title: String,

    /// When the chapter was released
    pub release_date: DateTime<Utc>,

    /// Whether the reader has read this chapter
    pub is_read: bool,

    /// Last unread -> read transition (never cleared)
    pub last_read_at: Option<DateTime<Utc>>,

    /// External reading link, opaque to the catalog
    pub read_url: Option<String>,
}

impl Chapter {
    /// Create a new, unread chapter
    pub fn new(number: u32, title: String, release_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            title,
            release_date,
            is_read: false,
            last_read_at: None,
            read_url: None,
        }
    }

    /// Set the read flag.
    ///
    /// `last_read_at` only moves on an unread -> read transition; marking a
    /// chapter unread keeps the previous timestamp.
    pub fn set_read(&mut self, is_read: bool, now: DateTime<Utc>) {
        if is_read && !self.is_read {
            self.last_read_at = Some(now);
        }
        self.is_read = is_read;
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chapter {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn chapter() -> Chapter {
        Chapter::new(1, "Chapter 1".to_string(), Utc::now())
    }

    #[test]
    fn test_mark_read_sets_timestamp() {
        let mut ch = chapter();
        let t1 = Utc::now();
        ch.set_read(true, t1);
        assert!(ch.is_read);
        assert_eq!(ch.last_read_at, Some(t1));
    }

    #[test]
    fn test_mark_unread_keeps_timestamp() {
        let mut ch = chapter();
        let t1 = Utc::now();
        ch.set_read(true, t1);
        ch.set_read(false, t1 + Duration::minutes(5));
        assert!(!ch.is_read);
        assert_eq!(ch.last_read_at, Some(t1));
    }

    #[test]
    fn test_reread_updates_timestamp() {
        let mut ch = chapter();
        let t1 = Utc::now();
        let t2 = t1 + Duration::hours(1);
        ch.set_read(true, t1);
        ch.set_read(false, t1);
        ch.set_read(true, t2);
        assert_eq!(ch.last_read_at, Some(t2));
    }

    #[test]
    fn test_marking_read_twice_is_not_a_transition() {
        let mut ch = chapter();
        let t1 = Utc::now();
        ch.set_read(true, t1);
        ch.set_read(true, t1 + Duration::hours(2));
        assert_eq!(ch.last_read_at, Some(t1));
    }
}
