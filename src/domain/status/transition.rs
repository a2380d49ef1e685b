// src/domain/status/transition.rs
//
// Status Transition Engine
//
// Pure function: (Title, StatusKind, value, note) -> Title
// - No side effects, no clock, no I/O
// - The input Title is never modified
// - The catalog service splices the result back into the snapshot

use serde::{Deserialize, Serialize};

use crate::domain::title::{ReadingStatus, Title};
use crate::domain::DomainError;

/// The status flags a reader can switch on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    Reading,
    PlanToRead,
    OnHold,
    Dropped,
    Rereading,
}

/// Apply a status change and return the resulting Title.
///
/// Switching a status on replaces whatever exclusive status was held before.
/// Switching a status off only clears that status and never activates
/// another one; the Title may end up `NotTracked`.
pub fn apply_status(title: &Title, status: StatusKind, value: bool, note: Option<String>) -> Title {
    let mut next = title.clone();

    // Keep the note of a drop we are about to leave
    if let ReadingStatus::Dropped { note: Some(current) } = &title.status {
        next.last_drop_note = Some(current.clone());
    }

    next.status = if value {
        activate(&mut next, status, note)
    } else {
        deactivate(&title.status, status)
    };

    next
}

fn activate(next: &mut Title, status: StatusKind, note: Option<String>) -> ReadingStatus {
    match status {
        StatusKind::Dropped => {
            // A blank note counts as no note
            if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
                next.last_drop_note = Some(note);
            }
            ReadingStatus::Dropped {
                note: next.last_drop_note.clone(),
            }
        }
        StatusKind::Reading => ReadingStatus::Reading { rereading: false },
        StatusKind::Rereading => ReadingStatus::Reading { rereading: true },
        StatusKind::PlanToRead => ReadingStatus::PlanToRead,
        StatusKind::OnHold => ReadingStatus::OnHold,
    }
}

fn deactivate(current: &ReadingStatus, status: StatusKind) -> ReadingStatus {
    match (current, status) {
        (ReadingStatus::Reading { .. }, StatusKind::Reading) => ReadingStatus::NotTracked,
        (ReadingStatus::Reading { rereading: true }, StatusKind::Rereading) => {
            ReadingStatus::Reading { rereading: false }
        }
        (ReadingStatus::PlanToRead, StatusKind::PlanToRead)
        | (ReadingStatus::OnHold, StatusKind::OnHold)
        | (ReadingStatus::Dropped { .. }, StatusKind::Dropped) => ReadingStatus::NotTracked,
        (current, _) => current.clone(),
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Reading => write!(f, "reading"),
            StatusKind::PlanToRead => write!(f, "planToRead"),
            StatusKind::OnHold => write!(f, "onHold"),
            StatusKind::Dropped => write!(f, "dropped"),
            StatusKind::Rereading => write!(f, "rereading"),
        }
    }
}

impl std::str::FromStr for StatusKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(StatusKind::Reading),
            "planToRead" => Ok(StatusKind::PlanToRead),
            "onHold" => Ok(StatusKind::OnHold),
            "dropped" => Ok(StatusKind::Dropped),
            "rereading" => Ok(StatusKind::Rereading),
            _ => Err(DomainError::InvalidStateTransition(format!(
                "Unknown reading status: {}",
                s
            ))),
        }
    }
}
