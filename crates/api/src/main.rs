//! Sensor Node - Main Entry Point

use adc_continuous::SimulatedDriver;
use api::{init_logging, run_server, AppState, PipelineConfig};
use sample_aggregator::SampleAggregator;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Sensor Node v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting analog acquisition pipeline...");

    let config = PipelineConfig::load()?;

    // Bring the acquisition up before accepting requests, so the server
    // never serves without a producer behind it.
    let mut aggregator = SampleAggregator::new(SimulatedDriver::new());
    aggregator.start(config.acquisition.clone())?;

    let state = Arc::new(AppState::new(aggregator.latest(), aggregator.stats()));
    run_server(&config.server.bind_addr, state).await?;

    aggregator.stop()?;
    info!("Sensor node shut down");

    Ok(())
}
