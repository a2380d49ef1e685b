// src/main.rs
//
// Bootstrap binary: load configuration, seed the catalog and print the
// dashboard, home sections and notifications as JSON.

use std::sync::Arc;

use anyhow::{anyhow, Context};

use manhwahub::application::commands::{get_dashboard, get_home, get_notifications};
use manhwahub::application::state::AppState;
use manhwahub::config::CatalogConfig;
use manhwahub::infrastructure::{Clock, SystemClock};
use manhwahub::seed::StaticSeedProvider;

fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. CONFIGURATION
    let config = CatalogConfig::load().context("loading catalog configuration")?;

    // 3. APPLICATION STATE
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let seed = StaticSeedProvider::new(clock.now());
    let state = AppState::bootstrap(config, &seed, clock).context("bootstrapping catalog")?;

    // 4. VIEWS
    let summary = serde_json::json!({
        "dashboard": get_dashboard(&state).map_err(|e| anyhow!(e))?,
        "home": get_home(&state).map_err(|e| anyhow!(e))?,
        "notifications": get_notifications(&state).map_err(|e| anyhow!(e))?,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
