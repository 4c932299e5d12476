// Growth report demo binary
//
// Purpose: print the widget view for one species/range selection as JSON
// Usage: SPECIES=basil TIME_RANGE=week GROWTH_SEED=7 cargo run --bin growth_report
// Optional: GROWTH_CONFIG=path/to/config.json (env vars override the file)

use growth_tracker_rust::{GrowthTracker, TimeRange, TrackerConfig};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_tracker_rust=info,growth_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let species = std::env::var("SPECIES").unwrap_or_else(|_| "tomato".to_string());
    let range_raw = std::env::var("TIME_RANGE").unwrap_or_else(|_| "month".to_string());
    let range = TimeRange::parse_or_default(&range_raw);

    let base = match std::env::var("GROWTH_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading config from {}", path);
            TrackerConfig::load(Path::new(&path))?
        }
        Err(_) => TrackerConfig::default(),
    };
    let config = base.with_overrides(|key| std::env::var(key).ok())?;

    let mut tracker = GrowthTracker::new(config);

    tracing::info!("Configuration:");
    tracing::info!("  SPECIES: {}", species);
    tracing::info!("  TIME_RANGE: {} (requested '{}')", range, range_raw);
    tracing::info!("  SEED: {:?}", tracker.config().seed);
    tracing::info!("  MIN_DAILY_GROWTH: {}", tracker.config().min_daily_growth);

    let report = tracker.report(&species, range);
    tracing::info!(
        "Generated {} points, health {}",
        report.series.len(),
        report.summary.health_status.display_text()
    );

    println!("{}", serde_json::to_string_pretty(&report.view())?);
    Ok(())
}
