// src/application/state.rs

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::infrastructure::Clock;
use crate::repositories::{InMemoryTitleRepository, TitleRepository};
use crate::seed::SeedProvider;
use crate::services::{CatalogService, StatisticsService};

/// Application state shared by every command.
/// Built once at startup and passed by reference; there is no global instance.
pub struct AppState {
    pub config: CatalogConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    pub statistics_service: Arc<StatisticsService>,
}

impl AppState {
    /// Wire repository, bus and services, then load the initial catalog
    pub fn bootstrap(
        config: CatalogConfig,
        seed: &dyn SeedProvider,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        config.validate()?;

        let title_repo: Arc<dyn TitleRepository> = Arc::new(InMemoryTitleRepository::new());
        let event_bus = Arc::new(EventBus::new());

        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&title_repo),
            Arc::clone(&event_bus),
            Arc::clone(&clock),
        ));
        let statistics_service = Arc::new(StatisticsService::new(
            Arc::clone(&title_repo),
            clock,
            config.clone(),
        ));

        let count = catalog_service.seed(seed)?;
        log::info!("Application state ready ({} titles)", count);

        Ok(Self {
            config,
            event_bus,
            catalog_service,
            statistics_service,
        })
    }
}
