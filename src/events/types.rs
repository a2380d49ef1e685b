// events/types.rs
//
// All catalog events.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - Notices are built from the event's own data, never by re-reading the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FilterOptions, StatusKind};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;

    /// Short message for the reader, if this event deserves one
    fn notice(&self) -> Option<String> {
        None
    }
}

// ============================================================================
// LIBRARY EVENTS
// ============================================================================

/// Emitted when a Title joins the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub title_name: String,
}

impl TitleAdded {
    pub fn new(title_id: Uuid, title_name: String, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            title_name,
        }
    }
}

impl DomainEvent for TitleAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TitleAdded" }

    fn notice(&self) -> Option<String> {
        Some(format!("Added {} to your library", self.title_name))
    }
}

/// Emitted when a Title leaves the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub title_name: String,
}

impl TitleRemoved {
    pub fn new(title_id: Uuid, title_name: String, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            title_name,
        }
    }
}

impl DomainEvent for TitleRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TitleRemoved" }

    fn notice(&self) -> Option<String> {
        Some(format!("Removed {} from your library", self.title_name))
    }
}

/// Emitted when a Title is replaced wholesale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub title_name: String,
}

impl TitleUpdated {
    pub fn new(title_id: Uuid, title_name: String, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            title_name,
        }
    }
}

impl DomainEvent for TitleUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TitleUpdated" }
}

// ============================================================================
// READING EVENTS
// ============================================================================

/// Emitted when a chapter's read flag is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterReadChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub chapter_id: Uuid,
    pub title_name: String,
    pub chapter_number: u32,
    pub is_read: bool,
}

impl ChapterReadChanged {
    pub fn new(
        title_id: Uuid,
        chapter_id: Uuid,
        title_name: String,
        chapter_number: u32,
        is_read: bool,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            chapter_id,
            title_name,
            chapter_number,
            is_read,
        }
    }
}

impl DomainEvent for ChapterReadChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ChapterReadChanged" }

    fn notice(&self) -> Option<String> {
        let state = if self.is_read { "read" } else { "unread" };
        Some(format!(
            "Marked Chapter {} of {} as {}",
            self.chapter_number, self.title_name, state
        ))
    }
}

/// Emitted when a status flag is switched on or off
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingStatusChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub title_name: String,
    pub status: StatusKind,
    pub value: bool,
}

impl ReadingStatusChanged {
    pub fn new(
        title_id: Uuid,
        title_name: String,
        status: StatusKind,
        value: bool,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            title_name,
            status,
            value,
        }
    }
}

impl DomainEvent for ReadingStatusChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReadingStatusChanged" }

    /// Only switching a status on is announced
    fn notice(&self) -> Option<String> {
        if !self.value {
            return None;
        }
        let name = &self.title_name;
        Some(match self.status {
            StatusKind::Reading => format!("Added {} to your reading list", name),
            StatusKind::Rereading => format!("Added {} to your re-reading list", name),
            StatusKind::PlanToRead => format!("Added {} to your plan to read list", name),
            StatusKind::OnHold => format!("Marked {} as on hold", name),
            StatusKind::Dropped => format!("Marked {} as dropped", name),
        })
    }
}

/// Emitted when the favorite flag flips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub title_id: Uuid,
    pub title_name: String,
    pub favorite: bool,
}

impl FavoriteToggled {
    pub fn new(
        title_id: Uuid,
        title_name: String,
        favorite: bool,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            title_id,
            title_name,
            favorite,
        }
    }
}

impl DomainEvent for FavoriteToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteToggled" }

    fn notice(&self) -> Option<String> {
        Some(if self.favorite {
            format!("Added {} to your favorites", self.title_name)
        } else {
            format!("Removed {} from your favorites", self.title_name)
        })
    }
}

// ============================================================================
// FILTER EVENTS
// ============================================================================

/// Emitted when the current filter selection changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub options: FilterOptions,
}

impl FiltersChanged {
    pub fn new(options: FilterOptions, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            options,
        }
    }
}

impl DomainEvent for FiltersChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FiltersChanged" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_notice_only_on_activation() {
        let id = Uuid::new_v4();
        let changed = |value: bool| {
            ReadingStatusChanged::new(
                id,
                "Tower of God".into(),
                StatusKind::OnHold,
                value,
                Utc::now(),
            )
        };
        let on = changed(true);
        let off = changed(false);

        assert_eq!(on.notice().as_deref(), Some("Marked Tower of God as on hold"));
        assert_eq!(off.notice(), None);
    }

    #[test]
    fn test_chapter_notice() {
        let event = ChapterReadChanged::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Solo Leveling".into(),
            12,
            true,
            Utc::now(),
        );
        assert_eq!(
            event.notice().as_deref(),
            Some("Marked Chapter 12 of Solo Leveling as read")
        );
    }

    #[test]
    fn test_favorite_notice_follows_new_value() {
        let id = Uuid::new_v4();
        let added = FavoriteToggled::new(id, "Heartstopper".into(), true, Utc::now());
        let removed = FavoriteToggled::new(id, "Heartstopper".into(), false, Utc::now());

        assert_eq!(added.notice().as_deref(), Some("Added Heartstopper to your favorites"));
        assert_eq!(removed.notice().as_deref(), Some("Removed Heartstopper from your favorites"));
    }
}
