use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::title::{Gender, Title, Weekday};

/// Chapter completion across a list of Titles
/// Statistics are NEVER a source of truth and can be recalculated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub total_titles: usize,
    pub total_chapters: usize,
    pub read_chapters: usize,
    /// Rounded, 0 when there are no chapters
    pub percent: u32,
}

/// Labels of the reading-status chart, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusLabel {
    Reading,
    Completed,
    OnHold,
    Dropped,
    PlanToRead,
    Rereading,
}

impl StatusLabel {
    pub const ALL: [StatusLabel; 6] = [
        StatusLabel::Reading,
        StatusLabel::Completed,
        StatusLabel::OnHold,
        StatusLabel::Dropped,
        StatusLabel::PlanToRead,
        StatusLabel::Rereading,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusLabel::Reading => "Reading",
            StatusLabel::Completed => "Completed",
            StatusLabel::OnHold => "On Hold",
            StatusLabel::Dropped => "Dropped",
            StatusLabel::PlanToRead => "Plan to Read",
            StatusLabel::Rereading => "Re-reading",
        }
    }

    /// Whether `title` counts towards this label.
    /// Labels overlap: a re-read title is also Reading, a dropped one may be Completed.
    pub fn applies_to(&self, title: &Title) -> bool {
        match self {
            StatusLabel::Reading => title.is_reading(),
            StatusLabel::Completed => title.is_completed(),
            StatusLabel::OnHold => title.is_on_hold(),
            StatusLabel::Dropped => title.is_dropped(),
            StatusLabel::PlanToRead => title.is_plan_to_read(),
            StatusLabel::Rereading => title.is_rereading(),
        }
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Count per status label; every label is present, zero included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts(pub BTreeMap<StatusLabel, usize>);

impl StatusCounts {
    pub fn get(&self, label: StatusLabel) -> usize {
        self.0.get(&label).copied().unwrap_or(0)
    }

    /// Entries with a positive count, in chart order
    pub fn non_zero(&self) -> Vec<(StatusLabel, usize)> {
        self.0
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(label, count)| (*label, *count))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub gender: Gender,
    pub count: usize,
    /// Rounded share of all Titles
    pub share_percent: u32,
}

/// Reading history card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistory {
    pub read_chapters: usize,
    pub estimated_hours: u64,
    pub completed_titles: usize,
    pub total_titles: usize,
    pub completed_percent: u32,
    pub rereading: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleProgress {
    pub read_chapters: usize,
    pub total_chapters: usize,
    pub percent: f64,
}

/// Titles split by how far the reader got
#[derive(Debug, Clone, Default)]
pub struct ProgressBuckets<'a> {
    /// Some but not all chapters read
    pub ongoing: Vec<&'a Title>,
    /// No chapter read, including Titles without chapters
    pub not_started: Vec<&'a Title>,
    /// Every chapter read
    pub completed: Vec<&'a Title>,
}

/// One day of the release calendar
#[derive(Debug, Clone)]
pub struct DaySchedule<'a> {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub titles: Vec<&'a Title>,
}
