//! Live Value Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Response for the live value endpoint
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// Latest per-frame average of the sampled channel
    #[serde(rename = "adcValue")]
    pub adc_value: u32,
}

/// Get the latest averaged reading
pub async fn get_data(State(state): State<Arc<AppState>>) -> Json<DataResponse> {
    Json(DataResponse {
        adc_value: state.latest.get(),
    })
}
