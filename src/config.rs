// src/config.rs
//
// Catalog configuration
//
// Stored as JSON. A missing file means defaults; a broken file is an error.
// Path structure: {CONFIG_DIR}/manhwahub/config.json, or $MANHWAHUB_CONFIG

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV_VAR: &str = "MANHWAHUB_CONFIG";

/// Largest accepted upcoming-release window, in days
pub const MAX_UPCOMING_WINDOW_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Days ahead that count as an upcoming release
    pub upcoming_window_days: i64,
    /// Entries in the dashboard "recently read" list
    pub recently_read_limit: usize,
    /// Entries in the dashboard "top genres" list
    pub top_genres_limit: usize,
    /// Entries per home section (continue reading, next releases, recently updated)
    pub home_section_limit: usize,
    /// Reading-time estimate per chapter
    pub minutes_per_chapter: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: 7,
            recently_read_limit: 5,
            top_genres_limit: 5,
            home_section_limit: 6,
            minutes_per_chapter: 5,
        }
    }
}

impl CatalogConfig {
    /// Default configuration file path
    pub fn default_path() -> AppResult<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("manhwahub").join("config.json"))
    }

    /// Load from the default location
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`; defaults when the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.upcoming_window_days <= 0 {
            return Err(AppError::Config(
                "upcomingWindowDays must be positive".to_string(),
            ));
        }
        if self.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS {
            return Err(AppError::Config(format!(
                "upcomingWindowDays must be at most {}",
                MAX_UPCOMING_WINDOW_DAYS
            )));
        }
        let limits = [
            ("recentlyReadLimit", self.recently_read_limit),
            ("topGenresLimit", self.top_genres_limit),
            ("homeSectionLimit", self.home_section_limit),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, limit)| *limit == 0) {
            return Err(AppError::Config(format!("{} must be positive", name)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"upcomingWindowDays": 3}}"#).unwrap();

        let config = CatalogConfig::load_from(file.path()).unwrap();
        assert_eq!(config.upcoming_window_days, 3);
        assert_eq!(config.recently_read_limit, 5);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            CatalogConfig::load_from(file.path()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_huge_window_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"upcomingWindowDays": 1000000000}}"#).unwrap();

        assert!(matches!(
            CatalogConfig::load_from(file.path()),
            Err(AppError::Config(_))
        ));

        let at_limit = CatalogConfig {
            upcoming_window_days: MAX_UPCOMING_WINDOW_DAYS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let config = CatalogConfig {
            top_genres_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
