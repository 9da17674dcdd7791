//! Response DTOs for the line board API
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Number of lines on the board as of its last purge
    pub lines: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(lines: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            lines,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
