//! Sensor Value API Server
//!
//! Thin HTTP front over the sample aggregator: the latest averaged reading,
//! a health summary, and a small embedded dashboard. Handlers only read
//! atomics, so requests never touch the acquisition path.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use crate::config::{PipelineConfig, ServerConfig};

use sample_aggregator::{AcquisitionStats, LatestValue};

/// Errors that keep the server from running
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configuration could not be loaded
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    /// The listener could not be bound or the server failed while serving
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state shared across handlers
pub struct AppState {
    /// Latest-value slot written by the frame handler
    pub latest: Arc<LatestValue>,
    /// Acquisition counters
    pub stats: Arc<AcquisitionStats>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state around the aggregator's shared handles
    pub fn new(latest: Arc<LatestValue>, stats: Arc<AcquisitionStats>) -> Self {
        Self {
            latest,
            stats,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
    pub metrics: SystemMetrics,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub acquisition: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

/// System metrics
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub frames_handled: u64,
    pub samples_matched: u64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/data", get(routes::data::get_data))
        .route("/api/v1/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let frames = state.stats.frames();
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            acquisition: ComponentHealth {
                status: if frames > 0 { "ok" } else { "waiting" }.to_string(),
            },
        },
        metrics: SystemMetrics {
            frames_handled: frames,
            samples_matched: state.stats.matched_samples(),
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until a shutdown signal arrives
pub async fn run_server(addr: &str, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler the server just keeps serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
