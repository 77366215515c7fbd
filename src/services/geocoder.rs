use crate::models::Coordinates;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when geocoding an address
///
/// Callers treat every variant uniformly as "address not found"; the
/// variants keep the root cause visible in logs.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("No match for address: {0}")]
    NoMatch(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// US Census geocoder client
///
/// Converts a free-text address into coordinates via the onelineaddress
/// endpoint.
pub struct GeocodeClient {
    base_url: String,
    benchmark: String,
    client: Client,
}

impl GeocodeClient {
    /// Create a new geocoder client
    pub fn new(base_url: String, benchmark: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            benchmark,
            client,
        }
    }

    /// Geocode a free-text address to coordinates
    ///
    /// Takes the **first** match only; no disambiguation among multiple
    /// candidate addresses.
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let url = format!(
            "{}?address={}&benchmark={}&format=json",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(address),
            urlencoding::encode(&self.benchmark),
        );

        tracing::debug!("Geocoding address via: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodeError::ApiError(format!(
                "Geocoder returned status: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let matches = json
            .get("result")
            .and_then(|r| r.get("addressMatches"))
            .and_then(|m| m.as_array())
            .ok_or_else(|| GeocodeError::InvalidResponse("Missing addressMatches array".into()))?;

        let first = matches
            .first()
            .ok_or_else(|| GeocodeError::NoMatch(address.to_string()))?;

        let coords = first
            .get("coordinates")
            .ok_or_else(|| GeocodeError::InvalidResponse("Match missing coordinates".into()))?;

        // The Census geocoder reports x = longitude, y = latitude
        let lng = coords
            .get("x")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| GeocodeError::InvalidResponse("Coordinates missing x".into()))?;
        let lat = coords
            .get("y")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| GeocodeError::InvalidResponse("Coordinates missing y".into()))?;

        Ok(Coordinates { lat, lng })
    }
}
