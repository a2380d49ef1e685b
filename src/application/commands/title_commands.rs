// src/application/commands/title_commands.rs
//
// Title Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use uuid::Uuid;

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{DomainError, StatusKind};

pub(crate) fn parse_id(value: &str, what: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value)
        .map_err(|e| ErrorResponse::validation(format!("Invalid {} id: {}", what, e)).to_json())
}

/// List the whole catalog
pub fn list_titles(state: &AppState) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state.catalog_service.titles().to_error_response()?;
    Ok(summaries(titles.iter()))
}

/// Get a single Title, chapters included
pub fn get_title(title_id: String, state: &AppState) -> Result<Option<TitleDto>, String> {
    let id = parse_id(&title_id, "title")?;
    let title = state.catalog_service.get_title(id).to_error_response()?;
    Ok(title.as_ref().map(TitleDto::from))
}

/// Add a Title; fails on a duplicate id
pub fn add_title(dto: TitleInputDto, state: &AppState) -> Result<String, String> {
    let title = dto.into_title().to_error_response()?;
    let id = state.catalog_service.add_title(title).to_error_response()?;
    Ok(id.to_string())
}

/// Replace a Title wholesale; unknown ids are ignored
pub fn update_title(dto: TitleInputDto, state: &AppState) -> Result<(), String> {
    let title = dto.into_existing_title().to_error_response()?;
    state.catalog_service.update_title(title).to_error_response()
}

pub fn remove_title(title_id: String, state: &AppState) -> Result<(), String> {
    let id = parse_id(&title_id, "title")?;
    state.catalog_service.remove_title(id).to_error_response()
}

pub fn mark_chapter_read(
    title_id: String,
    chapter_id: String,
    is_read: bool,
    state: &AppState,
) -> Result<(), String> {
    let title_id = parse_id(&title_id, "title")?;
    let chapter_id = parse_id(&chapter_id, "chapter")?;
    state
        .catalog_service
        .set_chapter_read(title_id, chapter_id, is_read)
        .to_error_response()
}

/// `status` is one of reading, planToRead, onHold, dropped, rereading
pub fn set_reading_status(
    title_id: String,
    status: String,
    value: bool,
    note: Option<String>,
    state: &AppState,
) -> Result<(), String> {
    let id = parse_id(&title_id, "title")?;
    let status: StatusKind = status
        .parse()
        .map_err(|e: DomainError| ErrorResponse::validation(e.to_string()).to_json())?;
    state
        .catalog_service
        .set_status(id, status, value, note)
        .to_error_response()
}

pub fn toggle_favorite(title_id: String, state: &AppState) -> Result<(), String> {
    let id = parse_id(&title_id, "title")?;
    state.catalog_service.toggle_favorite(id).to_error_response()
}

/// Notices produced since the last call, oldest first
pub fn take_notices(state: &AppState) -> Vec<String> {
    state.event_bus.drain_notices()
}
