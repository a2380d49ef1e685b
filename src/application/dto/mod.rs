// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - The reading status variant is flattened back to the boolean flags UIs expect
// - Output DTOs are built FROM domain entities; input DTOs are parsed and
//   validated before they ever reach a service

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::statistics::{CompletionStats, ReadingHistory};
use crate::domain::{
    Chapter, DomainError, Gender, PublicationStatus, ReadingStatus, StatusFlags, Title, Weekday,
};
use crate::error::{AppError, AppResult};
use crate::services::{
    CalendarDay, Dashboard, FacetOptions, HomeSections, Notifications, ReadingList,
};

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

fn parse_optional_id(value: Option<&str>) -> AppResult<Uuid> {
    match value {
        Some(id) => Ok(Uuid::parse_str(id)?),
        None => Ok(Uuid::new_v4()),
    }
}

// ============================================================================
// TITLE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub release_date: String,
    pub is_read: bool,
    pub last_read_at: Option<String>,
    pub read_url: Option<String>,
}

/// Full Title, chapters included (newest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDto {
    pub id: String,
    pub title: String,
    pub alternative_titles: Vec<String>,
    pub author: String,
    pub illustrator: String,
    pub description: String,
    pub cover_image: String,
    pub official_url: Option<String>,
    pub publisher: Option<String>,
    pub country: String,
    pub gender: String,
    pub categories: Vec<String>,
    pub release_day: String,
    pub release_year: Option<i32>,
    pub publication_status: String,
    pub mature: bool,
    pub has_new_chapter: bool,
    pub next_chapter_date: Option<String>,
    pub reading: bool,
    pub plan_to_read: bool,
    pub on_hold: bool,
    pub dropped: bool,
    pub rereading: bool,
    pub favorite: bool,
    pub drop_note: Option<String>,
    /// Note of the most recent drop, kept after the title is undropped
    pub last_drop_note: Option<String>,
    pub read_chapters: usize,
    pub total_chapters: usize,
    pub progress_percent: f64,
    pub completed: bool,
    pub chapters: Vec<ChapterDto>,
}

/// Card-sized Title for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummaryDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub country: String,
    pub gender: String,
    pub categories: Vec<String>,
    pub release_day: String,
    pub has_new_chapter: bool,
    pub next_chapter_date: Option<String>,
    pub latest_chapter: Option<u32>,
    pub latest_read_at: Option<String>,
    pub reading: bool,
    pub rereading: bool,
    pub dropped: bool,
    pub favorite: bool,
    pub read_chapters: usize,
    pub total_chapters: usize,
    pub progress_percent: f64,
}

impl From<&Chapter> for ChapterDto {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.to_string(),
            number: chapter.number,
            title: chapter.title.clone(),
            release_date: chapter.release_date.to_rfc3339(),
            is_read: chapter.is_read,
            last_read_at: chapter.last_read_at.map(|d| d.to_rfc3339()),
            read_url: chapter.read_url.clone(),
        }
    }
}

impl From<&Title> for TitleDto {
    fn from(title: &Title) -> Self {
        let flags = title.status.flags();
        Self {
            id: title.id.to_string(),
            title: title.title.clone(),
            alternative_titles: title.alternative_titles.clone(),
            author: title.author.clone(),
            illustrator: title.illustrator.clone(),
            description: title.description.clone(),
            cover_image: title.cover_image.clone(),
            official_url: title.official_url.clone(),
            publisher: title.publisher.clone(),
            country: title.country.clone(),
            gender: title.gender.to_string(),
            categories: title.categories.clone(),
            release_day: title.release_day.to_string(),
            release_year: title.release_year,
            publication_status: title.publication_status.to_string(),
            mature: title.mature,
            has_new_chapter: title.has_new_chapter,
            next_chapter_date: title.next_chapter_date.map(|d| d.to_rfc3339()),
            reading: flags.reading,
            plan_to_read: flags.plan_to_read,
            on_hold: flags.on_hold,
            dropped: flags.dropped,
            rereading: flags.rereading,
            favorite: title.favorite,
            drop_note: flags.drop_note,
            last_drop_note: title.last_drop_note.clone(),
            read_chapters: title.read_count(),
            total_chapters: title.chapter_count(),
            progress_percent: title.progress_percent(),
            completed: title.is_completed(),
            chapters: title.sorted_chapters().into_iter().map(ChapterDto::from).collect(),
        }
    }
}

impl From<&Title> for TitleSummaryDto {
    fn from(title: &Title) -> Self {
        Self {
            id: title.id.to_string(),
            title: title.title.clone(),
            author: title.author.clone(),
            cover_image: title.cover_image.clone(),
            country: title.country.clone(),
            gender: title.gender.to_string(),
            categories: title.categories.clone(),
            release_day: title.release_day.to_string(),
            has_new_chapter: title.has_new_chapter,
            next_chapter_date: title.next_chapter_date.map(|d| d.to_rfc3339()),
            latest_chapter: title.latest_chapter().map(|c| c.number),
            latest_read_at: title.latest_read_at().map(|d| d.to_rfc3339()),
            reading: title.is_reading(),
            rereading: title.is_rereading(),
            dropped: title.is_dropped(),
            favorite: title.favorite,
            read_chapters: title.read_count(),
            total_chapters: title.chapter_count(),
            progress_percent: title.progress_percent(),
        }
    }
}

pub fn summaries<'a>(titles: impl IntoIterator<Item = &'a Title>) -> Vec<TitleSummaryDto> {
    titles.into_iter().map(TitleSummaryDto::from).collect()
}

// ============================================================================
// TITLE INPUT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChapterInputDto {
    pub id: Option<String>,
    pub number: u32,
    pub title: Option<String>,
    pub release_date: String,
    #[serde(default)]
    pub is_read: bool,
    pub last_read_at: Option<String>,
    pub read_url: Option<String>,
}

/// Title as sent by a caller for add / update.
/// `id` may be omitted on add; a fresh one is generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TitleInputDto {
    pub id: Option<String>,
    pub title: String,
    pub alternative_titles: Vec<String>,
    pub author: String,
    pub illustrator: Option<String>,
    pub description: String,
    pub cover_image: String,
    pub official_url: Option<String>,
    pub publisher: Option<String>,
    pub country: String,
    pub gender: String,
    pub categories: Vec<String>,
    pub release_day: String,
    pub release_year: Option<i32>,
    pub publication_status: Option<String>,
    pub mature: bool,
    pub has_new_chapter: bool,
    pub next_chapter_date: Option<String>,
    pub reading: bool,
    pub plan_to_read: bool,
    pub on_hold: bool,
    pub dropped: bool,
    pub rereading: bool,
    pub favorite: bool,
    pub drop_note: Option<String>,
    pub last_drop_note: Option<String>,
    pub chapters: Vec<ChapterInputDto>,
}

impl ChapterInputDto {
    pub fn into_chapter(self) -> AppResult<Chapter> {
        let title = self
            .title
            .unwrap_or_else(|| format!("Chapter {}", self.number));
        let mut chapter = Chapter::new(self.number, title, parse_timestamp(&self.release_date)?);
        chapter.id = parse_optional_id(self.id.as_deref())?;
        chapter.is_read = self.is_read;
        chapter.last_read_at = self.last_read_at.as_deref().map(parse_timestamp).transpose()?;
        chapter.read_url = self.read_url;
        Ok(chapter)
    }
}

impl TitleInputDto {
    /// Parse into a Title. Facet values must be one of the closed sets.
    pub fn into_title(self) -> AppResult<Title> {
        let gender: Gender = self.gender.parse()?;
        let release_day: Weekday = self.release_day.parse()?;

        let mut title = Title::new(self.title, self.author, gender, release_day);
        title.id = parse_optional_id(self.id.as_deref())?;
        if let Some(illustrator) = self.illustrator {
            title.illustrator = illustrator;
        }
        title.alternative_titles = self.alternative_titles;
        title.description = self.description;
        title.cover_image = self.cover_image;
        title.official_url = self.official_url;
        title.publisher = self.publisher;
        title.country = self.country;
        title.categories = self.categories;
        title.release_year = self.release_year;
        if let Some(status) = self.publication_status {
            title.publication_status = status.parse::<PublicationStatus>()?;
        }
        title.mature = self.mature;
        title.has_new_chapter = self.has_new_chapter;
        title.next_chapter_date = self
            .next_chapter_date
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        // A fresh drop note wins over the remembered one
        let last_drop_note = non_blank(self.drop_note).or_else(|| non_blank(self.last_drop_note));
        title.status = ReadingStatus::from_flags(StatusFlags {
            reading: self.reading,
            plan_to_read: self.plan_to_read,
            on_hold: self.on_hold,
            dropped: self.dropped,
            rereading: self.rereading,
            drop_note: last_drop_note.clone(),
        })?;
        title.last_drop_note = last_drop_note;
        title.favorite = self.favorite;

        title.chapters = self
            .chapters
            .into_iter()
            .map(ChapterInputDto::into_chapter)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(title)
    }

    /// Same as `into_title` but the id is mandatory
    pub fn into_existing_title(self) -> AppResult<Title> {
        if self.id.is_none() {
            return Err(AppError::Domain(DomainError::InvariantViolation(
                "id is required to update a title".to_string(),
            )));
        }
        self.into_title()
    }
}

fn non_blank(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.trim().is_empty())
}

// ============================================================================
// FILTER DTOs
// ============================================================================

/// Every value a filter sidebar can offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsDto {
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
    pub release_days: Vec<String>,
}

impl From<FacetOptions> for FilterOptionsDto {
    fn from(options: FacetOptions) -> Self {
        Self {
            genders: Gender::ALL.iter().map(|g| g.to_string()).collect(),
            categories: options.categories,
            countries: options.countries,
            release_days: Weekday::ALL.iter().map(|d| d.to_string()).collect(),
        }
    }
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntryDto {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreShareDto {
    pub label: String,
    pub count: usize,
    pub share_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub completion: CompletionStats,
    /// Only labels with a positive count, in chart order
    pub status_chart: Vec<ChartEntryDto>,
    pub top_genres: Vec<GenreShareDto>,
    pub recently_read: Vec<TitleSummaryDto>,
    pub reading_history: ReadingHistory,
}

impl From<Dashboard> for DashboardDto {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            completion: dashboard.completion,
            status_chart: dashboard
                .status_counts
                .non_zero()
                .into_iter()
                .map(|(label, count)| ChartEntryDto {
                    label: label.to_string(),
                    count,
                })
                .collect(),
            top_genres: dashboard
                .top_genres
                .into_iter()
                .map(|genre| GenreShareDto {
                    label: genre.gender.to_string(),
                    count: genre.count,
                    share_percent: genre.share_percent,
                })
                .collect(),
            recently_read: summaries(&dashboard.recently_read),
            reading_history: dashboard.reading_history,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsDto {
    pub new_chapters: Vec<TitleSummaryDto>,
    pub upcoming: Vec<TitleSummaryDto>,
}

impl From<Notifications> for NotificationsDto {
    fn from(notifications: Notifications) -> Self {
        Self {
            new_chapters: summaries(&notifications.new_chapters),
            upcoming: summaries(&notifications.upcoming),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayDto {
    /// YYYY-MM-DD
    pub date: String,
    pub weekday: String,
    pub is_today: bool,
    pub titles: Vec<TitleSummaryDto>,
}

impl From<CalendarDay> for CalendarDayDto {
    fn from(day: CalendarDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            weekday: day.weekday.to_string(),
            is_today: day.is_today,
            titles: summaries(&day.titles),
        }
    }
}

pub fn parse_calendar_date(value: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDto {
    pub continue_reading: Vec<TitleSummaryDto>,
    pub next_releases: Vec<TitleSummaryDto>,
    pub recently_updated: Vec<TitleSummaryDto>,
}

impl From<HomeSections> for HomeDto {
    fn from(home: HomeSections) -> Self {
        Self {
            continue_reading: summaries(&home.continue_reading),
            next_releases: summaries(&home.next_releases),
            recently_updated: summaries(&home.recently_updated),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListDto {
    pub ongoing: Vec<TitleSummaryDto>,
    pub not_started: Vec<TitleSummaryDto>,
    pub completed: Vec<TitleSummaryDto>,
}

impl From<ReadingList> for ReadingListDto {
    fn from(list: ReadingList) -> Self {
        Self {
            ongoing: summaries(&list.ongoing),
            not_started: summaries(&list.not_started),
            completed: summaries(&list.completed),
        }
    }
}
