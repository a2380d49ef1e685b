// src/domain/statistics/aggregation.rs
//
// Aggregation Engine
//
// Pure, stateless derivations over a list of Titles.
// - Never mutates input
// - Orderings are explicit and stable (ties keep input order)
// - "now" is always passed in, never read from the system clock

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::entity::{
    CompletionStats, DaySchedule, GenreCount, ProgressBuckets, ReadingHistory, StatusCounts,
    StatusLabel, TitleProgress,
};
use crate::domain::title::{Gender, Title, Weekday};

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

pub fn completion_stats(titles: &[Title]) -> CompletionStats {
    let total_chapters: usize = titles.iter().map(Title::chapter_count).sum();
    let read_chapters: usize = titles.iter().map(Title::read_count).sum();

    CompletionStats {
        total_titles: titles.len(),
        total_chapters,
        read_chapters,
        percent: rounded_percent(read_chapters, total_chapters),
    }
}

pub fn status_counts(titles: &[Title]) -> StatusCounts {
    let counts = StatusLabel::ALL
        .into_iter()
        .map(|label| (label, titles.iter().filter(|t| label.applies_to(t)).count()))
        .collect::<BTreeMap<_, _>>();
    StatusCounts(counts)
}

/// Titles grouped by gender facet, largest group first.
/// Ties keep the order in which the gender was first seen.
pub fn top_genres(titles: &[Title], limit: usize) -> Vec<GenreCount> {
    let mut groups: Vec<(Gender, usize)> = Vec::new();
    for title in titles {
        match groups.iter_mut().find(|(g, _)| *g == title.gender) {
            Some((_, count)) => *count += 1,
            None => groups.push((title.gender, 1)),
        }
    }

    // sort_by is stable
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .take(limit)
        .map(|(gender, count)| GenreCount {
            gender,
            count,
            share_percent: rounded_percent(count, titles.len()),
        })
        .collect()
}

/// Titles with at least one read chapter, most recently read first.
/// A Title whose read chapters carry no timestamp sorts last.
pub fn recently_read(titles: &[Title], limit: usize) -> Vec<&Title> {
    let mut read: Vec<&Title> = titles.iter().filter(|t| t.read_count() > 0).collect();
    read.sort_by_key(|t| Reverse(t.latest_read_at()));
    read.truncate(limit);
    read
}

/// Titles whose next chapter lands in `(now, now + within_days]`, soonest first.
/// A window reaching past the representable range has no upper bound.
pub fn upcoming_releases(titles: &[Title], within_days: i64, now: DateTime<Utc>) -> Vec<&Title> {
    let horizon = Duration::try_days(within_days).and_then(|d| now.checked_add_signed(d));
    let mut upcoming: Vec<&Title> = titles
        .iter()
        .filter(|t| match t.next_chapter_date {
            Some(d) => d > now && horizon.map_or(true, |h| d <= h),
            None => false,
        })
        .collect();
    upcoming.sort_by_key(|t| t.next_chapter_date);
    upcoming
}

/// Every weekday is present, even without releases
pub fn releases_by_weekday(titles: &[Title]) -> BTreeMap<Weekday, Vec<&Title>> {
    let mut by_day: BTreeMap<Weekday, Vec<&Title>> =
        Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect();
    for title in titles {
        by_day.entry(title.release_day).or_default().push(title);
    }
    by_day
}

/// Titles releasing on the weekday of `date`
pub fn releases_on(titles: &[Title], date: NaiveDate) -> Vec<&Title> {
    let weekday = Weekday::from(date.weekday());
    titles.iter().filter(|t| t.release_day == weekday).collect()
}

/// The Sunday-first week containing `date`
pub fn week_schedule(titles: &[Title], date: NaiveDate) -> Vec<DaySchedule<'_>> {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    (0..7)
        .map(|offset| {
            let day = start + Duration::days(offset);
            DaySchedule {
                date: day,
                weekday: Weekday::from(day.weekday()),
                titles: releases_on(titles, day),
            }
        })
        .collect()
}

pub fn reading_history(titles: &[Title], minutes_per_chapter: u32) -> ReadingHistory {
    let read_chapters: usize = titles.iter().map(Title::read_count).sum();
    let completed_titles = titles.iter().filter(|t| t.is_completed()).count();
    let minutes = read_chapters as f64 * f64::from(minutes_per_chapter);

    ReadingHistory {
        read_chapters,
        estimated_hours: (minutes / 60.0).round() as u64,
        completed_titles,
        total_titles: titles.len(),
        completed_percent: rounded_percent(completed_titles, titles.len()),
        rereading: titles.iter().filter(|t| t.is_rereading()).count(),
    }
}

pub fn title_progress(title: &Title) -> TitleProgress {
    TitleProgress {
        read_chapters: title.read_count(),
        total_chapters: title.chapter_count(),
        percent: title.progress_percent(),
    }
}

pub fn progress_buckets(titles: &[Title]) -> ProgressBuckets<'_> {
    let mut buckets = ProgressBuckets::default();
    for title in titles {
        if title.is_completed() {
            buckets.completed.push(title);
        } else if title.read_count() > 0 {
            buckets.ongoing.push(title);
        } else {
            buckets.not_started.push(title);
        }
    }
    buckets
}

/// Started but unfinished Titles, furthest along first
pub fn continue_reading(titles: &[Title], limit: usize) -> Vec<&Title> {
    let mut ongoing = progress_buckets(titles).ongoing;
    ongoing.sort_by(|a, b| b.progress_percent().total_cmp(&a.progress_percent()));
    ongoing.truncate(limit);
    ongoing
}

pub fn new_chapter_titles(titles: &[Title]) -> Vec<&Title> {
    titles.iter().filter(|t| t.has_new_chapter).collect()
}

/// Titles with a known next release, soonest first, regardless of window
pub fn next_releases(titles: &[Title], limit: usize) -> Vec<&Title> {
    let mut scheduled: Vec<&Title> = titles
        .iter()
        .filter(|t| t.next_chapter_date.is_some())
        .collect();
    scheduled.sort_by_key(|t| t.next_chapter_date);
    scheduled.truncate(limit);
    scheduled
}

/// Titles with chapters, newest chapter release first
pub fn recently_updated(titles: &[Title], limit: usize) -> Vec<&Title> {
    let mut updated: Vec<&Title> = titles.iter().filter(|t| !t.chapters.is_empty()).collect();
    updated.sort_by_key(|t| Reverse(t.latest_release_date()));
    updated.truncate(limit);
    updated
}
