use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::QuerySettings;
use crate::models::{
    ErrorResponse, EventsResponse, GeocodeQuery, GeocodeResponse, HealthResponse,
    NearestErrorResponse, NearestQuery, NearestResponse,
};
use crate::services::{EventFeedClient, GeocodeClient, ProximityError, ProximityService};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<GeocodeClient>,
    pub feed: Arc<EventFeedClient>,
    pub proximity: ProximityService,
    pub limits: QuerySettings,
}

/// Configure all outage-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/events", web::get().to(list_events))
        .route("/geocode", web::get().to(geocode_address))
        .route("/nearest", web::get().to(nearest_outages));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List all current outage events
///
/// GET /events
///
/// Never fails: an upstream error degrades to an empty list.
async fn list_events(state: web::Data<AppState>) -> impl Responder {
    let events = state.feed.fetch_events().await;

    HttpResponse::Ok().json(EventsResponse {
        count: events.len(),
        events,
    })
}

/// Geocode an address
///
/// GET /geocode?address=<address>
async fn geocode_address(
    state: web::Data<AppState>,
    query: web::Query<GeocodeQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.geocoder.geocode(&query.address).await {
        Ok(coordinates) => HttpResponse::Ok().json(GeocodeResponse {
            address: query.address.clone(),
            coordinates,
        }),
        Err(e) => {
            tracing::info!("Geocode failed for {:?}: {}", query.address, e);
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "Could not geocode address",
            }))
        }
    }
}

/// Find nearest outage events to an address
///
/// GET /nearest?address=<address>&limit=<n>
///
/// `limit` defaults to the configured value and is capped at the configured
/// maximum. A non-positive limit yields an empty list rather than an error.
async fn nearest_outages(
    state: web::Data<AppState>,
    query: web::Query<NearestQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = query
        .limit
        .unwrap_or(i64::from(state.limits.default_limit))
        .min(i64::from(state.limits.max_limit));
    let limit = usize::try_from(limit).unwrap_or(0);

    tracing::info!(
        "Finding nearest outages for {:?}, limit: {}",
        query.address,
        limit
    );

    match state.proximity.nearest_by_address(&query.address, limit).await {
        Ok(result) => HttpResponse::Ok().json(NearestResponse {
            query_address: query.address.clone(),
            coordinates: result.coordinates,
            events: result.events,
        }),
        Err(ProximityError::AddressNotFound(address)) => {
            HttpResponse::NotFound().json(NearestErrorResponse {
                error: "Could not geocode address".to_string(),
                query_address: address,
            })
        }
    }
}
