mod plan;
mod stations;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fuelroute-cli")]
#[command(about = "Fuel route planner command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest and geocode fuel stations from an OPIS retail price CSV.
    LoadStations {
        /// Path to the CSV file.
        #[arg(long)]
        path: PathBuf,
    },
    /// Plan a trip between two place names and print the plan as JSON.
    Plan {
        /// Start location, e.g. "New York, NY".
        #[arg(long)]
        start: String,
        /// Finish location, e.g. "Los Angeles, CA".
        #[arg(long)]
        finish: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = fuelroute_core::load_app_config_from_env()?;
    let pool_config = fuelroute_db::PoolConfig::from_app_config(&config);
    let pool = fuelroute_db::connect_pool(&config.database_url, pool_config).await?;
    fuelroute_db::run_migrations(&pool).await?;

    match cli.command {
        Commands::LoadStations { path } => stations::load_stations(&pool, &config, &path).await,
        Commands::Plan { start, finish } => plan::run(&pool, &config, &start, &finish).await,
    }
}
