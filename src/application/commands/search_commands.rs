// src/application/commands/search_commands.rs
//
// Search & filter command handlers.
// Filter selections arrive as typed FilterOptions / FacetValue, so an unknown
// facet or value is rejected while deserializing, before any handler runs.

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::{FacetValue, FilterOptions};

pub fn search_titles(query: String, state: &AppState) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state.catalog_service.search(&query).to_error_response()?;
    Ok(summaries(&titles))
}

pub fn apply_filters(
    options: FilterOptions,
    state: &AppState,
) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state.catalog_service.apply_filters(options).to_error_response()?;
    Ok(summaries(&titles))
}

/// Check or uncheck a single facet value
pub fn toggle_filter(
    value: FacetValue,
    checked: bool,
    state: &AppState,
) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state
        .catalog_service
        .toggle_filter(value, checked)
        .to_error_response()?;
    Ok(summaries(&titles))
}

pub fn clear_filters(state: &AppState) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state.catalog_service.clear_filters().to_error_response()?;
    Ok(summaries(&titles))
}

pub fn get_filtered_titles(state: &AppState) -> Result<Vec<TitleSummaryDto>, String> {
    let titles = state.catalog_service.filtered_titles().to_error_response()?;
    Ok(summaries(&titles))
}

pub fn get_current_filters(state: &AppState) -> Result<FilterOptions, String> {
    state.catalog_service.current_filters().to_error_response()
}

pub fn get_filter_options(state: &AppState) -> Result<FilterOptionsDto, String> {
    let options = state.catalog_service.facet_options().to_error_response()?;
    Ok(FilterOptionsDto::from(options))
}
