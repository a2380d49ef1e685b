use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::chapter::Chapter;
use crate::domain::DomainError;

/// Represents a serialized story (manhwa, manga, webtoon) in the catalog
/// This is the root entity for all reading-related data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Primary display title
    pub title: String,

    /// Alternative titles (romanized, translated, synonyms)
    pub alternative_titles: Vec<String>,

    pub author: String,
    pub illustrator: String,
    pub description: String,
    pub cover_image: String,
    pub official_url: Option<String>,
    pub publisher: Option<String>,

    /// Country of origin (facet)
    pub country: String,

    /// Target-audience / relationship classification (facet)
    pub gender: Gender,

    /// Free-form tags (multi-valued facet)
    pub categories: Vec<String>,

    /// Weekday new chapters are released on (facet)
    pub release_day: Weekday,

    pub release_year: Option<i32>,

    /// Publication state of the work itself
    pub publication_status: PublicationStatus,

    pub mature: bool,

    /// Externally supplied, never derived from chapter state
    pub has_new_chapter: bool,

    /// Next expected release
    pub next_chapter_date: Option<DateTime<Utc>>,

    /// Mutually exclusive reading status
    pub status: ReadingStatus,

    /// Independent of the reading status
    pub favorite: bool,

    /// Note of the most recent drop, kept after the title is picked up again
    pub last_drop_note: Option<String>,

    /// Chapters in no particular order; consumers sort explicitly
    pub chapters: Vec<Chapter>,
}

/// Target-audience / relationship classification of a Title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Straight,
    Yaoi,
    Yuri,
    Other,
}

/// Calendar weekday a Title releases on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Publication state of the work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationStatus {
    Ongoing,
    Completed,
    Hiatus,
    Canceled,
}

/// The reader's relationship with a Title.
///
/// Exactly one variant holds at a time, so "reading and dropped" cannot be
/// represented. Re-reading is a flavour of reading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    NotTracked,
    Reading { rereading: bool },
    PlanToRead,
    OnHold,
    Dropped { note: Option<String> },
}

impl Title {
    /// Create a new Title with no chapters and no reading status
    pub fn new(title: String, author: String, gender: Gender, release_day: Weekday) -> Self {
        Self {
            id: Uuid::new_v4(),
            illustrator: author.clone(),
            title,
            alternative_titles: Vec::new(),
            author,
            description: String::new(),
            cover_image: String::new(),
            official_url: None,
            publisher: None,
            country: String::new(),
            gender,
            categories: Vec::new(),
            release_day,
            release_year: None,
            publication_status: PublicationStatus::Ongoing,
            mature: false,
            has_new_chapter: false,
            next_chapter_date: None,
            status: ReadingStatus::NotTracked,
            favorite: false,
            last_drop_note: None,
            chapters: Vec::new(),
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn read_count(&self) -> usize {
        self.chapters.iter().filter(|c| c.is_read).count()
    }

    /// Percentage of chapters read, 0.0 for a title without chapters
    pub fn progress_percent(&self) -> f64 {
        let total = self.chapter_count();
        if total == 0 {
            return 0.0;
        }
        self.read_count() as f64 / total as f64 * 100.0
    }

    /// Completed is derived: at least one chapter and every chapter read
    pub fn is_completed(&self) -> bool {
        !self.chapters.is_empty() && self.chapters.iter().all(|c| c.is_read)
    }

    /// Most recent `last_read_at` among chapters that are currently read
    pub fn latest_read_at(&self) -> Option<DateTime<Utc>> {
        self.chapters
            .iter()
            .filter(|c| c.is_read)
            .filter_map(|c| c.last_read_at)
            .max()
    }

    /// Highest-numbered chapter
    pub fn latest_chapter(&self) -> Option<&Chapter> {
        self.chapters.iter().max_by_key(|c| c.number)
    }

    pub fn latest_release_date(&self) -> Option<DateTime<Utc>> {
        self.chapters.iter().map(|c| c.release_date).max()
    }

    /// Chapters newest first (descending by number)
    pub fn sorted_chapters(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        chapters.sort_by(|a, b| b.number.cmp(&a.number));
        chapters
    }

    pub fn chapter(&self, chapter_id: Uuid) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn is_reading(&self) -> bool {
        matches!(self.status, ReadingStatus::Reading { .. })
    }

    pub fn is_rereading(&self) -> bool {
        matches!(self.status, ReadingStatus::Reading { rereading: true })
    }

    pub fn is_plan_to_read(&self) -> bool {
        matches!(self.status, ReadingStatus::PlanToRead)
    }

    pub fn is_on_hold(&self) -> bool {
        matches!(self.status, ReadingStatus::OnHold)
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self.status, ReadingStatus::Dropped { .. })
    }

    /// Drop note, only while the title is dropped
    pub fn drop_note(&self) -> Option<&str> {
        match &self.status {
            ReadingStatus::Dropped { note } => note.as_deref(),
            _ => None,
        }
    }
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Straight, Gender::Yaoi, Gender::Yuri, Gender::Other];
}

impl Weekday {
    /// Monday-first, as presented in filter pickers
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Straight => write!(f, "Straight"),
            Gender::Yaoi => write!(f, "Yaoi"),
            Gender::Yuri => write!(f, "Yuri"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Straight" => Ok(Gender::Straight),
            "Yaoi" => Ok(Gender::Yaoi),
            "Yuri" => Ok(Gender::Yuri),
            "Other" => Ok(Gender::Other),
            _ => Err(DomainError::InvalidFacetValue {
                facet: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.to_string() == s)
            .ok_or_else(|| DomainError::InvalidFacetValue {
                facet: "releaseDay",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationStatus::Ongoing => write!(f, "Ongoing"),
            PublicationStatus::Completed => write!(f, "Completed"),
            PublicationStatus::Hiatus => write!(f, "Hiatus"),
            PublicationStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

impl std::str::FromStr for PublicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ongoing" => Ok(PublicationStatus::Ongoing),
            "Completed" => Ok(PublicationStatus::Completed),
            "Hiatus" => Ok(PublicationStatus::Hiatus),
            "Canceled" => Ok(PublicationStatus::Canceled),
            _ => Err(DomainError::InvariantViolation(format!(
                "Unknown publication status: {}",
                s
            ))),
        }
    }
}

/// The flat status flags as presented to readers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub reading: bool,
    pub plan_to_read: bool,
    pub on_hold: bool,
    pub dropped: bool,
    pub rereading: bool,
    pub drop_note: Option<String>,
}

impl ReadingStatus {
    /// Build a status from flat flags, rejecting combinations the variant cannot hold
    pub fn from_flags(flags: StatusFlags) -> Result<Self, DomainError> {
        let exclusive = [flags.reading, flags.plan_to_read, flags.on_hold, flags.dropped]
            .iter()
            .filter(|set| **set)
            .count();
        if exclusive > 1 {
            return Err(DomainError::InvalidStateTransition(
                "reading, planToRead, onHold and dropped are mutually exclusive".to_string(),
            ));
        }
        if flags.rereading && !flags.reading {
            return Err(DomainError::InvalidStateTransition(
                "rereading requires reading".to_string(),
            ));
        }

        Ok(if flags.reading {
            ReadingStatus::Reading {
                rereading: flags.rereading,
            }
        } else if flags.plan_to_read {
            ReadingStatus::PlanToRead
        } else if flags.on_hold {
            ReadingStatus::OnHold
        } else if flags.dropped {
            ReadingStatus::Dropped {
                note: flags.drop_note.filter(|n| !n.trim().is_empty()),
            }
        } else {
            ReadingStatus::NotTracked
        })
    }

    pub fn flags(&self) -> StatusFlags {
        match self {
            ReadingStatus::NotTracked => StatusFlags::default(),
            ReadingStatus::Reading { rereading } => StatusFlags {
                reading: true,
                rereading: *rereading,
                ..Default::default()
            },
            ReadingStatus::PlanToRead => StatusFlags {
                plan_to_read: true,
                ..Default::default()
            },
            ReadingStatus::OnHold => StatusFlags {
                on_hold: true,
                ..Default::default()
            },
            ReadingStatus::Dropped { note } => StatusFlags {
                dropped: true,
                drop_note: note.clone(),
                ..Default::default()
            },
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingStatus::NotTracked => write!(f, "not_tracked"),
            ReadingStatus::Reading { rereading: false } => write!(f, "reading"),
            ReadingStatus::Reading { rereading: true } => write!(f, "rereading"),
            ReadingStatus::PlanToRead => write!(f, "plan_to_read"),
            ReadingStatus::OnHold => write!(f, "on_hold"),
            ReadingStatus::Dropped { .. } => write!(f, "dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn title_with_chapters(read: &[bool]) -> Title {
        let mut title = Title::new(
            "Solo Leveling".to_string(),
            "Chugong".to_string(),
            Gender::Straight,
            Weekday::Wednesday,
        );
        let now = Utc::now();
        for (i, is_read) in read.iter().enumerate() {
            let mut ch = Chapter::new(i as u32 + 1, format!("Chapter {}", i + 1), now);
            ch.is_read = *is_read;
            title.chapters.push(ch);
        }
        title
    }

    #[test]
    fn test_progress_without_chapters_is_zero() {
        let title = title_with_chapters(&[]);
        assert_eq!(title.progress_percent(), 0.0);
        assert!(!title.is_completed());
    }

    #[test]
    fn test_completed_requires_every_chapter_read() {
        assert!(title_with_chapters(&[true, true]).is_completed());
        assert!(!title_with_chapters(&[true, false]).is_completed());
    }

    #[test]
    fn test_latest_read_at_ignores_unread_chapters() {
        let mut title = title_with_chapters(&[false, false]);
        let t1 = Utc::now();
        title.chapters[0].set_read(true, t1);
        title.chapters[1].set_read(true, t1 + Duration::hours(1));
        title.chapters[1].set_read(false, t1 + Duration::hours(2));

        assert_eq!(title.latest_read_at(), Some(t1));
    }

    #[test]
    fn test_sorted_chapters_newest_first() {
        let mut title = title_with_chapters(&[false, false, false]);
        title.chapters.swap(0, 2);
        let numbers: Vec<u32> = title.sorted_chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(title.latest_chapter().map(|c| c.number), Some(3));
    }

    #[test]
    fn test_drop_note_only_while_dropped() {
        let mut title = title_with_chapters(&[]);
        title.last_drop_note = Some("pacing".to_string());
        assert_eq!(title.drop_note(), None);

        title.status = ReadingStatus::Dropped {
            note: Some("pacing".to_string()),
        };
        assert_eq!(title.drop_note(), Some("pacing"));
    }

    #[test]
    fn test_weekday_parsing() {
        assert_eq!("Friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Fri".parse::<Weekday>().is_err());
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn test_gender_parsing_is_closed() {
        assert_eq!("Yuri".parse::<Gender>().unwrap(), Gender::Yuri);
        assert!("Shounen".parse::<Gender>().is_err());
    }

    #[test]
    fn test_status_from_flags() {
        let rereading = StatusFlags {
            reading: true,
            rereading: true,
            ..Default::default()
        };
        assert_eq!(
            ReadingStatus::from_flags(rereading.clone()).unwrap(),
            ReadingStatus::Reading { rereading: true }
        );
        assert_eq!(ReadingStatus::Reading { rereading: true }.flags(), rereading);

        let clash = StatusFlags {
            reading: true,
            dropped: true,
            ..Default::default()
        };
        assert!(ReadingStatus::from_flags(clash).is_err());

        let orphan = StatusFlags {
            rereading: true,
            ..Default::default()
        };
        assert!(ReadingStatus::from_flags(orphan).is_err());
    }
}
