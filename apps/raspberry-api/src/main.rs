//! Raspberry API - award interval read service
//!
//! Loads the nominee list into SQLite at startup, computes the producer
//! award intervals, then serves them over HTTP. A failed load aborts startup.

use anyhow::{Context, Result};
use raspberry_api::{config::AppConfig, routes, telemetry, AppState};
use raspberry_csv::CsvMovieReader;
use raspberry_domain::MoviesService;
use raspberry_sqlite::SqliteMovieRepository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    info!("Starting Raspberry awards API");

    let repository = SqliteMovieRepository::open(&config.database)?;
    let service = MoviesService::new(repository, CsvMovieReader::default());

    let report = service
        .load_movies_from_csv(&config.csv_path)
        .await
        .with_context(|| format!("Failed to load movie list from '{}'", config.csv_path))?;

    info!(
        batch_id = %report.batch_id,
        loaded_at = %report.loaded_at,
        valid = report.valid_movies,
        invalid = report.invalid_movies.len(),
        min_awards = report.min_awards,
        max_awards = report.max_awards,
        "Movie list loaded"
    );

    let state = AppState::new(service);
    let app = routes::create_router(state);

    let addr = config.bind_address();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
