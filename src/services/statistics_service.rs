// src/services/statistics_service.rs
//
// Read-only views over the current snapshot: dashboard, notifications,
// release calendar, home sections and the reading list.
// Nothing here is cached; every call recomputes from the snapshot.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::CatalogConfig;
use crate::domain::statistics::{self, CompletionStats, GenreCount, ReadingHistory, StatusCounts};
use crate::domain::{Title, Weekday};
use crate::error::AppResult;
use crate::infrastructure::Clock;
use crate::repositories::TitleRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub completion: CompletionStats,
    pub status_counts: StatusCounts,
    pub top_genres: Vec<GenreCount>,
    pub recently_read: Vec<Title>,
    pub reading_history: ReadingHistory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notifications {
    pub new_chapters: Vec<Title>,
    pub upcoming: Vec<Title>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub is_today: bool,
    pub titles: Vec<Title>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections {
    pub continue_reading: Vec<Title>,
    pub next_releases: Vec<Title>,
    pub recently_updated: Vec<Title>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingList {
    pub ongoing: Vec<Title>,
    pub not_started: Vec<Title>,
    pub completed: Vec<Title>,
}

fn owned(titles: Vec<&Title>) -> Vec<Title> {
    titles.into_iter().cloned().collect()
}

pub struct StatisticsService {
    title_repo: Arc<dyn TitleRepository>,
    clock: Arc<dyn Clock>,
    config: CatalogConfig,
}

impl StatisticsService {
    pub fn new(
        title_repo: Arc<dyn TitleRepository>,
        clock: Arc<dyn Clock>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            title_repo,
            clock,
            config,
        }
    }

    pub fn dashboard(&self) -> AppResult<Dashboard> {
        let titles = self.title_repo.snapshot()?;

        Ok(Dashboard {
            completion: statistics::completion_stats(&titles),
            status_counts: statistics::status_counts(&titles),
            top_genres: statistics::top_genres(&titles, self.config.top_genres_limit),
            recently_read: owned(statistics::recently_read(
                &titles,
                self.config.recently_read_limit,
            )),
            reading_history: statistics::reading_history(
                &titles,
                self.config.minutes_per_chapter,
            ),
        })
    }

    pub fn notifications(&self) -> AppResult<Notifications> {
        let titles = self.title_repo.snapshot()?;
        let now = self.clock.now();

        Ok(Notifications {
            new_chapters: owned(statistics::new_chapter_titles(&titles)),
            upcoming: owned(statistics::upcoming_releases(
                &titles,
                self.config.upcoming_window_days,
                now,
            )),
        })
    }

    /// The week containing `date`, or the current week
    pub fn calendar(&self, date: Option<NaiveDate>) -> AppResult<Vec<CalendarDay>> {
        let titles = self.title_repo.snapshot()?;
        let today = self.clock.now().date_naive();

        Ok(statistics::week_schedule(&titles, date.unwrap_or(today))
            .into_iter()
            .map(|day| CalendarDay {
                date: day.date,
                weekday: day.weekday,
                is_today: day.date == today,
                titles: owned(day.titles),
            })
            .collect())
    }

    /// Titles releasing on `date`
    pub fn releases_on(&self, date: NaiveDate) -> AppResult<Vec<Title>> {
        let titles = self.title_repo.snapshot()?;
        Ok(owned(statistics::releases_on(&titles, date)))
    }

    pub fn home(&self) -> AppResult<HomeSections> {
        let titles = self.title_repo.snapshot()?;
        let limit = self.config.home_section_limit;

        Ok(HomeSections {
            continue_reading: owned(statistics::continue_reading(&titles, limit)),
            next_releases: owned(statistics::next_releases(&titles, limit)),
            recently_updated: owned(statistics::recently_updated(&titles, limit)),
        })
    }

    pub fn reading_list(&self) -> AppResult<ReadingList> {
        let titles = self.title_repo.snapshot()?;
        let buckets = statistics::progress_buckets(&titles);

        Ok(ReadingList {
            ongoing: owned(buckets.ongoing),
            not_started: owned(buckets.not_started),
            completed: owned(buckets.completed),
        })
    }
}
