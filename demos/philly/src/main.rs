//! philly — command-line client for the philaspot parking engine.
//!
//! Generates the Philadelphia dataset, optionally files a few crowd
//! reports, then prints ranked parking near one destination followed by
//! the analytics snapshot.
//!
//! ```text
//! philly "Reading Terminal Market" --radius 0.5 --sort price
//! philly "Citizens Bank Park" --report facility_5=full --report facility_5=full
//! RUST_LOG=ps_spatial=debug philly --json
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ps_core::LocationKind;
use ps_data::Dataset;
use ps_data::export::write_csv;
use ps_engine::config::{self, DEFAULT_CONFIG_PATH};
use ps_engine::{EngineBuilder, ParkingEngine};
use ps_reports::{FeedFilter, ReportStatus, ReportStore};
use ps_spatial::{RankOptions, SortKey};

#[derive(Parser)]
#[command(name = "philly")]
#[command(about = "Find parking near a Philadelphia destination", long_about = None)]
struct Cli {
    /// Destination name, exactly as in the destination table
    #[arg(default_value = "Independence Hall")]
    destination: String,

    /// TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Search radius in miles (defaults to the configured walking distance)
    #[arg(short, long)]
    radius: Option<f64>,

    /// distance | price | availability | report_count
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Override the generator seed
    #[arg(long)]
    seed: Option<u64>,

    /// Show at most this many options
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// File a report before searching, as LOCATION_ID=STATUS (repeatable)
    #[arg(long, value_name = "ID=STATUS")]
    report: Vec<String>,

    /// Write the generated tables as CSV into this directory
    #[arg(long, value_name = "DIR")]
    export_csv: Option<PathBuf>,

    /// Print the search result and analytics as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("invalid [logging] level")?;
    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();

    // 1. Build the engine (generates the dataset once).
    let t0 = Instant::now();
    let mut builder = EngineBuilder::from_config(&config)?;
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let engine = builder.build()?;
    info!(app = %config.app.name, elapsed_ms = t0.elapsed().as_millis() as u64, "Engine built");

    if let Some(dir) = &cli.export_csv {
        std::fs::create_dir_all(dir)?;
        write_csv(dir, engine.dataset())?;
        info!(dir = %dir.display(), "Dataset exported");
    }

    // 2. Session and reports.
    let store = engine.open_session(format!("philly-{}", std::process::id()));
    for entry in &cli.report {
        file_report(&engine, &store, entry)?;
    }

    // 3. Search.
    let mut prefs = engine.default_preferences().clone();
    if let Some(sort) = cli.sort {
        prefs.sort_by = sort;
    }
    let radius = cli.radius.unwrap_or(prefs.max_walk_distance);
    let result = engine.search(&store, &cli.destination, radius, &prefs)?;
    let analytics = engine.analytics(&store);

    if cli.json {
        let out = serde_json::json!({ "search": result, "analytics": analytics });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("=== philly — philaspot parking engine ===");
    println!(
        "Destination: {}  |  {}  |  {}",
        result.destination.name, result.destination.category, result.destination.parking
    );
    println!(
        "Radius: {:.2} mi  |  Found: {} ({} garages/lots, {} meters, {} permit blocks)",
        result.search_radius,
        result.total_found,
        result.garages.len(),
        result.meters.len(),
        result.permits.len()
    );
    println!();

    let ranked = result.ranked(&RankOptions::from(&prefs).with_limit(cli.limit));
    println!(
        "{:<22} {:<8} {:>7} {:>6} {:>8} {:>7} {:<8}  {}",
        "Id", "Kind", "Miles", "Walk", "$/hr", "Avail", "Conf", "Name"
    );
    println!("{}", "-".repeat(96));
    for option in &ranked {
        let prediction = option.prediction();
        println!(
            "{:<22} {:<8} {:>7.2} {:>4}m {:>8} {:>6}% {:<8}  {}",
            option.id(),
            option.kind().as_str(),
            option.distance_miles(),
            option.walking_minutes(),
            option.hourly_price().map_or_else(|| "permit".to_owned(), |p| format!("{p:.2}")),
            prediction.percent(),
            prediction.confidence.as_str(),
            option.title(),
        );
    }
    if ranked.is_empty() {
        println!("(no options match the configured preferences)");
    }
    println!();

    if !store.is_empty() {
        let feed = engine.feed(&store, &FeedFilter::default());
        println!(
            "Recent reports: {} ({} available, {} full, {} locations)",
            feed.stats.total, feed.stats.available, feed.stats.full, feed.stats.unique_locations
        );
        for entry in &feed.entries {
            println!("  {:<22} {:<12} {}", entry.report.location_id.as_str(), entry.report.status.as_str(), entry.age);
        }
        println!();
    }

    println!(
        "Locations: {}  |  Garage occupancy: {:.1}%  |  Reports: {} ({} in the last hour)",
        analytics.total_locations.total(),
        analytics.garage_occupancy.occupancy_rate,
        analytics.user_engagement.total_reports,
        analytics.user_engagement.reports_last_hour
    );

    Ok(())
}

/// Parse `ID=STATUS` and submit it against the engine clock.
fn file_report(engine: &ParkingEngine, store: &ReportStore, entry: &str) -> Result<()> {
    let Some((id, status)) = entry.split_once('=') else {
        bail!("report {entry:?} must look like LOCATION_ID=STATUS");
    };
    let id = id.trim();
    let status: ReportStatus = status.parse()?;
    let kind = kind_of(engine.dataset(), id)
        .with_context(|| format!("unknown location id {id:?}"))?;
    let report = engine.report(store, id, kind, status, None);
    info!(id = report.id.0, location = id, %status, "Report filed");
    Ok(())
}

fn kind_of(dataset: &Dataset, id: &str) -> Option<LocationKind> {
    if let Some(f) = dataset.facilities.iter().find(|f| f.id.as_str() == id) {
        return Some(f.kind.kind());
    }
    if dataset.meters.iter().any(|m| m.id.as_str() == id) {
        return Some(LocationKind::Meter);
    }
    if dataset.permits.iter().any(|p| p.id.as_str() == id) {
        return Some(LocationKind::Permit);
    }
    None
}
