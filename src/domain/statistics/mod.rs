//! Derived reading statistics.
//!
//! 1. Statistics are NEVER stored; they are recomputed from a catalog snapshot
//! 2. Every function is pure and independent of the others
//! 3. "Completed" is derived from chapter state, never a stored flag

pub mod aggregation;
pub mod entity;

pub use aggregation::{
    completion_stats, continue_reading, new_chapter_titles, next_releases, progress_buckets,
    reading_history, recently_read, recently_updated, releases_by_weekday, releases_on,
    status_counts, title_progress, top_genres, upcoming_releases, week_schedule,
};
pub use entity::{
    CompletionStats, DaySchedule, GenreCount, ProgressBuckets, ReadingHistory, StatusCounts,
    StatusLabel, TitleProgress,
};
