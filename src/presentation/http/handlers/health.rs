//! Health Check Handlers
//!
//! # Endpoints
//! - `GET /health` - Basic health check with the running version
//! - `GET /health/live` - Liveness check (is the server running?)

use axum::Json;
use serde::{Deserialize, Serialize};

/// Basic health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Simple liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Liveness check - returns 200 while the process can serve requests
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".into(),
    })
}
