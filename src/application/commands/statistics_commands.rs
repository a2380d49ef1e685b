// src/application/commands/statistics_commands.rs

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};

pub fn get_dashboard(state: &AppState) -> Result<DashboardDto, String> {
    let dashboard = state.statistics_service.dashboard().to_error_response()?;
    Ok(DashboardDto::from(dashboard))
}

pub fn get_notifications(state: &AppState) -> Result<NotificationsDto, String> {
    let notifications = state.statistics_service.notifications().to_error_response()?;
    Ok(NotificationsDto::from(notifications))
}

/// Week containing `date` (YYYY-MM-DD), or the current week
pub fn get_calendar(date: Option<String>, state: &AppState) -> Result<Vec<CalendarDayDto>, String> {
    let date = date
        .as_deref()
        .map(parse_calendar_date)
        .transpose()
        .to_error_response()?;
    let week = state.statistics_service.calendar(date).to_error_response()?;
    Ok(week.into_iter().map(CalendarDayDto::from).collect())
}

pub fn get_home(state: &AppState) -> Result<HomeDto, String> {
    let home = state.statistics_service.home().to_error_response()?;
    Ok(HomeDto::from(home))
}

pub fn get_reading_list(state: &AppState) -> Result<ReadingListDto, String> {
    let list = state.statistics_service.reading_list().to_error_response()?;
    Ok(ReadingListDto::from(list))
}
