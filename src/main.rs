use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_point_search::api::{HttpPointLookup, PointLookup};
use travel_point_search::config::{FileConfig, FormConfig};
use travel_point_search::intent::classify;
use travel_point_search::query::PointQuery;

/// One-shot point search against a travel-search service: classifies the
/// search term the same way the form's autocomplete does and prints the
/// matching points.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Search term: a point name, an ID fragment, or "x,y" coordinates.
    /// Omit it with --bounds to only print the data-source bounds.
    pub term: Option<String>,

    /// Base URL of the travel-search service.
    #[clap(long, default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Data source to search in.
    #[clap(short, long, default_value = "")]
    pub database: String,

    /// Maximum number of points to return.
    #[clap(short, long, default_value_t = travel_point_search::query::DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,

    /// Resolve an exact point ID instead of running a classified search.
    #[clap(long, conflicts_with = "term")]
    pub resolve: Option<String>,

    /// Print coordinate and travel-time bounds of the data source.
    #[clap(long)]
    pub bounds: bool,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Path to a TOML config file; its values override the CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = FormConfig::resolve(
        FormConfig {
            api_base_url: cli_args.base_url.clone(),
            database: cli_args.database.clone(),
            search_limit: cli_args.limit,
            request_timeout_secs: cli_args.timeout_secs,
            ..FormConfig::default()
        },
        file_config,
    )?;

    let lookup = HttpPointLookup::new(config.api_base_url.clone(), config.request_timeout_secs)?;

    if cli_args.bounds {
        print_bounds(&lookup, &config.database).await;
    }

    if let Some(id) = &cli_args.resolve {
        match lookup.find_point_by_id(id, &config.database).await {
            Some(point) => println!("{}\n  {}", point.name, point.details()),
            None => bail!("No point with ID {id:?} in data source {:?}", config.database),
        }
        return Ok(());
    }

    let Some(term) = &cli_args.term else {
        if cli_args.bounds {
            return Ok(());
        }
        bail!("Nothing to do: pass a search term, --resolve or --bounds");
    };

    let Some(intent) = classify(term) else {
        bail!("Blank search term");
    };
    info!("Classified {:?} as {:?}", term, intent);

    let query = PointQuery::new(intent, config.database.clone(), config.search_limit);
    let points = lookup.search_points(&query).await;

    if points.is_empty() {
        println!("No points found");
        return Ok(());
    }
    for point in points {
        println!("{}\n  {}", point.name, point.details());
    }

    Ok(())
}

async fn print_bounds(lookup: &HttpPointLookup, database: &str) {
    match lookup.point_bounds(database).await {
        Some(bounds) => {
            println!(
                "Coordinate bounds: X {:.2} to {:.2}, Y {:.2} to {:.2}",
                bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
            );
        }
        None => println!("No coordinate bounds for data source {database:?}"),
    }

    match lookup.travel_bounds(database).await {
        Some(bounds) => {
            println!(
                "Departures: {} to {}\nArrivals: {} to {}",
                bounds.min_departure, bounds.max_departure, bounds.min_arrival, bounds.max_arrival
            );
        }
        None => println!("No travel-time bounds for data source {database:?}"),
    }
}
