use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the geocode endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeocodeQuery {
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
}

/// Query parameters for the nearest-outages endpoint
///
/// `limit` is optional; the handler falls back to the configured default
/// when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearestQuery {
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    pub limit: Option<i64>,
}
