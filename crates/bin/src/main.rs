//! Stayscout CLI binary.
//!
//! Fetches a city listings snapshot, trains the baseline price model, and
//! prints the training summary and neighbourhood price table.

mod service;
mod store;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use service::AnalyticsService;
use stayscout::registry::{CITY_REGISTRY, available_cities};
use stayscout_data::ListingsClient;
use stayscout_model::TrainConfig;
use stayscout_output::{ExportFormat, export_feature_impacts, top_features};
use stayscout_prep::CleanConfig;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stayscout")]
#[command(about = "Stayscout: short-term rental price analytics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the baseline price model on a city snapshot
    Train {
        /// City name (see `cities` for the registry)
        city: String,

        /// Snapshot date, YYYY-MM-DD
        date: NaiveDate,

        /// Property types rarer than this are grouped as "Other"
        #[arg(long, default_value = "100")]
        min_property_type_count: u32,

        /// Random seed for the train/test split
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Re-download the snapshot even if cached
        #[arg(long)]
        refresh: bool,

        /// Write the feature-impact table to this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (csv, json, or pretty-json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// List cities with known snapshots
    Cities,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            city,
            date,
            min_property_type_count,
            seed,
            refresh,
            export,
            format,
        } => {
            let clean_config = CleanConfig {
                min_property_type_count,
            };
            let train_config = TrainConfig {
                seed,
                ..TrainConfig::default()
            };
            let format = parse_export_format(&format)?;
            train(
                &city,
                date,
                &clean_config,
                &train_config,
                refresh,
                export.as_deref(),
                format,
            )
            .await?;
        }
        Commands::Cities => list_cities(),
    }

    Ok(())
}

async fn train(
    city: &str,
    date: NaiveDate,
    clean_config: &CleanConfig,
    train_config: &TrainConfig,
    refresh: bool,
    export: Option<&std::path::Path>,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ListingsClient::new(default_cache_root())?;
    let service = AnalyticsService::new(client);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Training on {} ({})...", city, date));

    let result = service
        .train_snapshot(city, date, clean_config, train_config, refresh)
        .await;
    match &result {
        Ok(run) => pb.finish_with_message(format!("Trained on {} listings", run.listings)),
        Err(_) => pb.finish_with_message("Failed!"),
    }
    result?;

    let run = service
        .latest()
        .ok_or("training finished but no result was published")?;

    println!("\n{}", run.report());
    println!("Source: {}", run.source_url);
    println!("\nAverage price by neighbourhood:");
    println!("{}", run.neighbourhood_prices.head(Some(10)));

    if let Some(path) = export {
        export_feature_impacts(path, &run.feature_impact, format)?;
        println!(
            "Wrote {} feature impacts to {}",
            run.feature_impact.len(),
            path.display()
        );
    } else {
        // Console already shows the top of the table through the report;
        // note how much more an export would include.
        let shown = top_features(&run.feature_impact, 12).len();
        if run.feature_impact.len() > shown {
            println!(
                "({} more features; use --export to write the full table)",
                run.feature_impact.len() - shown
            );
        }
    }

    Ok(())
}

fn list_cities() {
    println!("Cities with known snapshots:");
    for city in CITY_REGISTRY {
        println!("  {:<14} {}/{}", city.city, city.country, city.region);
    }
    println!(
        "\nBrowse https://insideairbnb.com/get-the-data/ for snapshot dates; \
         registered names: {}",
        available_cities().join(", ")
    );
}

/// Platform cache directory for downloaded snapshots.
///
/// Linux: `~/.cache/stayscout/`, macOS: `~/Library/Caches/stayscout/`,
/// Windows: `%LOCALAPPDATA%\stayscout\`.
fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stayscout")
}

fn parse_export_format(format: &str) -> Result<ExportFormat, String> {
    match format.to_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "pretty-json" | "pretty" => Ok(ExportFormat::PrettyJson),
        other => Err(format!(
            "unknown format '{}', expected csv, json, or pretty-json",
            other
        )),
    }
}
