use crate::core::rank_nearest;
use crate::models::{Coordinates, OutageEvent};
use crate::services::{EventFeedClient, GeocodeClient};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the proximity query orchestrator
///
/// Geocode failure is the single error path of the whole query; a feed
/// failure degrades to an empty event list instead.
#[derive(Debug, Error)]
pub enum ProximityError {
    #[error("Could not geocode address: {0}")]
    AddressNotFound(String),
}

/// Result of a nearest-outages query
#[derive(Debug, Clone)]
pub struct NearestOutages {
    pub coordinates: Coordinates,
    pub events: Vec<OutageEvent>,
}

/// Query orchestrator composing the geocoder, the outage feed and the
/// proximity ranker to answer "nearest outages to this address"
#[derive(Clone)]
pub struct ProximityService {
    geocoder: Arc<GeocodeClient>,
    feed: Arc<EventFeedClient>,
}

impl ProximityService {
    pub fn new(geocoder: Arc<GeocodeClient>, feed: Arc<EventFeedClient>) -> Self {
        Self { geocoder, feed }
    }

    /// Geocode an address, then rank live events against it
    ///
    /// Every geocode failure kind (timeout, bad address, provider outage)
    /// collapses to `AddressNotFound`; the root cause is only visible in
    /// logs.
    pub async fn nearest_by_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<NearestOutages, ProximityError> {
        let coordinates = match self.geocoder.geocode(address).await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::info!("Geocode failed for {:?}: {}", address, e);
                return Err(ProximityError::AddressNotFound(address.to_string()));
            }
        };

        tracing::debug!(
            "Resolved {:?} to ({}, {})",
            address,
            coordinates.lat,
            coordinates.lng
        );

        Ok(self.nearest_to(coordinates, limit).await)
    }

    /// Rank live events against an already-resolved coordinate
    pub async fn nearest_to(&self, coordinates: Coordinates, limit: usize) -> NearestOutages {
        let events = self.feed.fetch_events().await;
        let events = rank_nearest(coordinates, events, limit);

        NearestOutages {
            coordinates,
            events,
        }
    }
}
