use std::collections::HashSet;

use super::entity::Title;
use crate::domain::{DomainError, DomainResult};

/// Validates all Title invariants
/// These are the absolute rules that must hold for a Title to enter the catalog
pub fn validate_title(title: &Title) -> DomainResult<()> {
    validate_display_title(&title.title)?;
    validate_chapters(title)?;
    Ok(())
}

/// Display title cannot be empty
fn validate_display_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Chapter ids and numbers are unique within a Title, numbers are positive
fn validate_chapters(title: &Title) -> DomainResult<()> {
    let mut ids = HashSet::with_capacity(title.chapters.len());
    let mut numbers = HashSet::with_capacity(title.chapters.len());

    for chapter in &title.chapters {
        if chapter.number == 0 {
            return Err(DomainError::InvariantViolation(format!(
                "Chapter numbers must be positive in '{}'",
                title.title
            )));
        }
        if !ids.insert(chapter.id) {
            return Err(DomainError::DuplicateId(chapter.id.to_string()));
        }
        if !numbers.insert(chapter.number) {
            return Err(DomainError::InvariantViolation(format!(
                "Chapter {} appears twice in '{}'",
                chapter.number, title.title
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Title domain:
///
/// 1. Identity (UUID) is immutable and unique within the catalog
/// 2. Title can exist without chapters
/// 3. At most one reading status at a time (enforced by ReadingStatus)
/// 4. Re-reading implies reading (enforced by ReadingStatus::Reading)
/// 5. Chapter ids are unique within the Title
/// 6. Chapter numbers are positive and unique within the Title
/// 7. Display title cannot be empty
