//! Node Configuration
//!
//! Layered configuration: defaults, then an optional `sensor-node.toml`
//! next to the binary, then `SENSOR_NODE_*` environment overrides. Every
//! field has a default, so a bare node runs with no config at all.

use config::{Config, ConfigError, Environment, File};
use sample_aggregator::AcquisitionConfig;
use serde::Deserialize;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, `host:port`
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Full node configuration: HTTP server plus the acquisition session
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub server: ServerConfig,
    pub acquisition: AcquisitionConfig,
}

impl PipelineConfig {
    /// Load the layered configuration
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("sensor-node").required(false))
            .add_source(Environment::with_prefix("SENSOR_NODE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
