// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod chapter;
pub mod search;
pub mod statistics;
pub mod status;
pub mod title;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Title Domain
pub use title::{
    validate_title, Gender, PublicationStatus, ReadingStatus, StatusFlags, Title, Weekday,
};

// Chapter Domain
pub use chapter::Chapter;

// Status Transition Engine
pub use status::{apply_status, StatusKind};

// Search & Filter Engine
pub use search::{filter_catalog, FacetKind, FacetValue, FilterOptions};

// Aggregation Engine (Derived Data)
pub use statistics::{
    CompletionStats, GenreCount, ReadingHistory, StatusCounts, StatusLabel, TitleProgress,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Invalid value '{value}' for facet {facet}")]
    InvalidFacetValue { facet: &'static str, value: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
