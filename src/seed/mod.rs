// src/seed/mod.rs
//
// Initial catalog data
//
// RULES:
// - The catalog is populated exactly once, at startup
// - Providers are opaque: the store never cares where Titles come from
// - Seeded Titles go through the same validation as added ones

pub mod static_data;

pub use static_data::StaticSeedProvider;

use crate::domain::Title;
use crate::error::AppResult;

/// Supplies the initial list of Titles
#[cfg_attr(test, mockall::automock)]
pub trait SeedProvider: Send + Sync {
    fn load(&self) -> AppResult<Vec<Title>>;
}
