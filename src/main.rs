mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use routes::handle_query_payload_error;
use routes::outages::AppState;
use services::{EventFeedClient, GeocodeClient, ProximityService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; env vars override the configured values
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting NES outage proximity service...");
    info!("Configuration loaded successfully");

    // Initialize upstream clients
    let geocoder = Arc::new(GeocodeClient::new(
        settings.geocoder.base_url,
        settings.geocoder.benchmark,
        settings.geocoder.timeout_secs,
    ));

    info!("Geocoder client initialized");

    let feed = Arc::new(EventFeedClient::new(
        settings.feed.base_url,
        settings.feed.timeout_secs,
    ));

    info!("Outage feed client initialized");

    let proximity = ProximityService::new(Arc::clone(&geocoder), Arc::clone(&feed));

    // Build application state
    let app_state = AppState {
        geocoder,
        feed,
        proximity,
        limits: settings.query,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);
    info!("  GET /nearest?address=<address>&limit=<n>");
    info!("  GET /events");
    info!("  GET /geocode?address=<address>");
    info!("  GET /health");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
