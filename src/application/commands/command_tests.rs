// src/application/commands/command_tests.rs
//
// End-to-end command tests against a seeded AppState

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::application::{AppState, ErrorResponse, ErrorType, TitleInputDto};
use crate::config::CatalogConfig;
use crate::domain::{FacetValue, FilterOptions, Gender};
use crate::infrastructure::ManualClock;
use crate::seed::StaticSeedProvider;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn state() -> AppState {
    AppState::bootstrap(
        CatalogConfig::default(),
        &StaticSeedProvider::new(now()),
        Arc::new(ManualClock::new(now())),
    )
    .unwrap()
}

fn error_type(message: &str) -> ErrorType {
    serde_json::from_str::<ErrorResponse>(message).unwrap().error_type
}

#[test]
fn test_bootstrap_rejects_invalid_config() {
    let config = CatalogConfig {
        upcoming_window_days: 0,
        ..Default::default()
    };
    let result = AppState::bootstrap(
        config,
        &StaticSeedProvider::new(now()),
        Arc::new(ManualClock::new(now())),
    );
    assert!(result.is_err());
}

#[test]
fn test_list_and_get_title() {
    let state = state();
    let titles = list_titles(&state).unwrap();
    assert_eq!(titles.len(), 8);

    let detail = get_title(titles[0].id.clone(), &state).unwrap().unwrap();
    assert_eq!(detail.title, "Solo Leveling");
    assert_eq!(detail.chapters[0].number, 178);
    assert_eq!(detail.total_chapters, 178);
}

#[test]
fn test_unknown_title_is_absent_not_error() {
    let state = state();
    let missing = uuid::Uuid::new_v4().to_string();

    assert!(get_title(missing.clone(), &state).unwrap().is_none());
    assert!(toggle_favorite(missing.clone(), &state).is_ok());
    assert!(remove_title(missing, &state).is_ok());
    assert_eq!(list_titles(&state).unwrap().len(), 8);
}

#[test]
fn test_invalid_id_is_validation_error() {
    let state = state();
    let err = get_title("not-a-uuid".to_string(), &state).unwrap_err();
    assert_eq!(error_type(&err), ErrorType::Validation);
}

#[test]
fn test_mark_chapter_read_and_take_notice() {
    let state = state();
    let detail = get_title(list_titles(&state).unwrap()[0].id.clone(), &state)
        .unwrap()
        .unwrap();
    let newest = &detail.chapters[0];
    assert!(!newest.is_read);

    mark_chapter_read(detail.id.clone(), newest.id.clone(), true, &state).unwrap();

    let updated = get_title(detail.id.clone(), &state).unwrap().unwrap();
    assert!(updated.chapters[0].is_read);
    assert_eq!(updated.chapters[0].last_read_at, Some(now().to_rfc3339()));
    assert_eq!(
        take_notices(&state),
        vec!["Marked Chapter 178 of Solo Leveling as read"]
    );
}

#[test]
fn test_set_reading_status_flags() {
    let state = state();
    let id = list_titles(&state).unwrap()[1].id.clone();

    set_reading_status(id.clone(), "rereading".to_string(), true, None, &state).unwrap();
    let detail = get_title(id.clone(), &state).unwrap().unwrap();
    assert!(detail.reading && detail.rereading);

    let note = Some("Lost interest".to_string());
    set_reading_status(id.clone(), "dropped".to_string(), true, note, &state).unwrap();
    let detail = get_title(id.clone(), &state).unwrap().unwrap();
    assert!(detail.dropped && !detail.reading && !detail.rereading);
    assert_eq!(detail.drop_note.as_deref(), Some("Lost interest"));

    let err = set_reading_status(id, "finished".to_string(), true, None, &state).unwrap_err();
    assert_eq!(error_type(&err), ErrorType::Validation);
}

#[test]
fn test_update_while_undropped_keeps_drop_note() {
    let state = state();
    let id = list_titles(&state).unwrap()[2].id.clone();

    let note = Some("Too slow".to_string());
    set_reading_status(id.clone(), "dropped".to_string(), true, note, &state).unwrap();
    set_reading_status(id.clone(), "dropped".to_string(), false, None, &state).unwrap();

    let detail = get_title(id.clone(), &state).unwrap().unwrap();
    assert_eq!(detail.drop_note, None);
    let input = TitleInputDto {
        id: Some(id.clone()),
        title: detail.title.clone(),
        author: detail.author.clone(),
        gender: detail.gender.clone(),
        release_day: detail.release_day.clone(),
        favorite: true,
        ..Default::default()
    };
    update_title(input, &state).unwrap();

    set_reading_status(id.clone(), "dropped".to_string(), true, None, &state).unwrap();
    let detail = get_title(id, &state).unwrap().unwrap();
    assert!(detail.favorite);
    assert_eq!(detail.drop_note.as_deref(), Some("Too slow"));
}

#[test]
fn test_add_duplicate_title_is_reported() {
    let state = state();
    let existing = list_titles(&state).unwrap()[0].id.clone();
    let input = TitleInputDto {
        id: Some(existing),
        title: "Copy".to_string(),
        author: "Someone".to_string(),
        gender: "Other".to_string(),
        release_day: "Monday".to_string(),
        ..Default::default()
    };

    let err = add_title(input, &state).unwrap_err();
    assert_eq!(error_type(&err), ErrorType::DomainError);
    assert_eq!(list_titles(&state).unwrap().len(), 8);
}

#[test]
fn test_add_update_remove_round() {
    let state = state();
    let input = TitleInputDto {
        title: "New Series".to_string(),
        author: "Someone".to_string(),
        gender: "Yuri".to_string(),
        release_day: "Friday".to_string(),
        ..Default::default()
    };

    let id = add_title(input.clone(), &state).unwrap();
    assert_eq!(list_titles(&state).unwrap().len(), 9);

    let renamed = TitleInputDto {
        id: Some(id.clone()),
        title: "Renamed Series".to_string(),
        favorite: true,
        ..input
    };
    update_title(renamed, &state).unwrap();
    let detail = get_title(id.clone(), &state).unwrap().unwrap();
    assert_eq!(detail.title, "Renamed Series");
    assert!(detail.favorite);

    remove_title(id.clone(), &state).unwrap();
    assert!(get_title(id, &state).unwrap().is_none());
}

#[test]
fn test_filters_and_search() {
    let state = state();

    let yaoi = toggle_filter(FacetValue::Gender(Gender::Yaoi), true, &state).unwrap();
    let names: Vec<_> = yaoi.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(names, vec!["Heartstopper", "Love for Sale"]);

    let searched = search_titles("  heart ".to_string(), &state).unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(get_filtered_titles(&state).unwrap().len(), 1);

    let all = clear_filters(&state).unwrap();
    assert_eq!(all.len(), 8);

    let korean = apply_filters(
        FilterOptions {
            country: vec!["South Korea".to_string()],
            ..Default::default()
        },
        &state,
    )
    .unwrap();
    assert_eq!(korean.len(), 5);
    assert_eq!(get_current_filters(&state).unwrap().country.len(), 1);
}

#[test]
fn test_filter_options_listing() {
    let state = state();
    let options = get_filter_options(&state).unwrap();
    assert_eq!(options.genders, vec!["Straight", "Yaoi", "Yuri", "Other"]);
    assert_eq!(options.release_days[0], "Monday");
    assert_eq!(
        options.countries,
        vec!["China", "Japan", "South Korea", "United Kingdom"]
    );
    assert!(options.categories.contains(&"Martial Arts".to_string()));
}

#[test]
fn test_statistics_views() {
    let state = state();

    let dashboard = get_dashboard(&state).unwrap();
    assert_eq!(dashboard.completion.total_titles, 8);
    assert_eq!(dashboard.top_genres[0].label, "Straight");
    assert_eq!(dashboard.recently_read.len(), 5);
    assert!(dashboard.status_chart.is_empty());

    let notifications = get_notifications(&state).unwrap();
    assert_eq!(notifications.new_chapters.len(), 4);
    assert_eq!(notifications.upcoming.len(), 8);
    assert_eq!(notifications.upcoming[0].title, "The God of High School");

    let week = get_calendar(Some("2024-05-01".to_string()), &state).unwrap();
    assert_eq!(week[0].date, "2024-04-28");
    assert_eq!(week[3].weekday, "Wednesday");
    assert_eq!(week[3].titles.len(), 2);
    assert!(get_calendar(Some("May 1st".to_string()), &state).is_err());

    let home = get_home(&state).unwrap();
    assert_eq!(home.next_releases.len(), 6);

    let list = get_reading_list(&state).unwrap();
    assert_eq!(list.ongoing.len(), 8);
}
