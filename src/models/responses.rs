use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinates, OutageEvent};

/// Response for the events listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub count: usize,
    pub events: Vec<OutageEvent>,
}

/// Response for a successful geocode lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub address: String,
    pub coordinates: Coordinates,
}

/// Response for a successful nearest-outages query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestResponse {
    pub query_address: String,
    pub coordinates: Coordinates,
    pub events: Vec<OutageEvent>,
}

/// Error body returned when the queried address cannot be geocoded
///
/// Carries only the original query string; no coordinates, no events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestErrorResponse {
    pub error: String,
    pub query_address: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
