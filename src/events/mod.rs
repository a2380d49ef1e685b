// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Reading
    ChapterReadChanged,
    FavoriteToggled,
    // Filters
    FiltersChanged,
    ReadingStatusChanged,
    // Library
    TitleAdded,
    TitleRemoved,
    TitleUpdated,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
