//! Holder Leaderboard API Server
//!
//! Serves the holder leaderboard computed from the indexer's transfer and swap tables.

use std::{env, net::SocketAddr, sync::Arc};

use leaderboard_engine::{leaderboard::format_address, EngineConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    error::ApiError,
    source::{PgRecordSource, RecordSource},
};

mod error;
mod routes;
mod source;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub config: EngineConfig,
}

mod defaults {
    pub const API_PORT: &str = "8080";
    pub const API_HOST: &str = "0.0.0.0";
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "leaderboard_api=debug,leaderboard_engine=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Holder Leaderboard API Server...");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        "Deployer address: {}",
        format_address(&config.deployer_address)
    );

    // Initialize database connection
    let db_pool = leaderboard_db::initialize_database().await?;
    let schema = leaderboard_db::database_schema()?;
    tracing::info!("Connected to database (schema: {})", schema);

    // Create app state
    let state = Arc::new(AppState {
        source: Arc::new(PgRecordSource::new(db_pool, schema)),
        config,
    });

    let app = routes::app(state);

    // Get port from environment
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| defaults::API_PORT.to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let host = env::var("API_HOST").unwrap_or_else(|_| defaults::API_HOST.to_string());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
