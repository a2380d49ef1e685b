// src/lib.rs
// ManhwaHub - Reading tracker for serialized stories
//
// Architecture:
// - Domain-centric: entities, status rules, filtering and statistics are pure
// - Snapshot store: every mutation swaps in a new immutable Title list
// - Event-driven: services announce what changed through the event bus
// - Explicit: state is constructed once and passed around, never global

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod seed;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    apply_status,
    filter_catalog,
    validate_title,
    // Entities
    Chapter,
    // Statistics
    CompletionStats,
    DomainError,
    // Search
    FacetKind,
    FacetValue,
    FilterOptions,
    Gender,
    GenreCount,
    PublicationStatus,
    ReadingHistory,
    ReadingStatus,
    StatusCounts,
    StatusFlags,
    // Status
    StatusKind,
    StatusLabel,
    Title,
    TitleProgress,
    Weekday,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::CatalogConfig;

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    ChapterReadChanged,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteToggled,
    FiltersChanged,
    ReadingStatusChanged,
    TitleAdded,
    TitleRemoved,
    TitleUpdated,
};

// ============================================================================
// PUBLIC API - Repositories, Infrastructure, Seed
// ============================================================================

pub use infrastructure::{Clock, ManualClock, SystemClock};
pub use repositories::{InMemoryTitleRepository, TitleRepository};
pub use seed::{SeedProvider, StaticSeedProvider};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CalendarDay,
    // Catalog Store
    CatalogService,
    Dashboard,
    FacetOptions,
    HomeSections,
    Notifications,
    ReadingList,
    // Statistics
    StatisticsService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
