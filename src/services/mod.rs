// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod statistics_service;


pub use catalog_service::{CatalogService, FacetOptions};

pub use statistics_service::{
    CalendarDay, Dashboard, HomeSections, Notifications, ReadingList, StatisticsService,
};
