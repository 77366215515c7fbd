use crate::models::{FeedRecord, OutageEvent};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the outage feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// NES outage-feed client
///
/// Fetches the full current outage list in one GET; the provider does no
/// pagination.
pub struct EventFeedClient {
    base_url: String,
    client: Client,
}

impl EventFeedClient {
    /// Create a new feed client
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch all current outage events
    ///
    /// Never fails visibly: any network or parse failure is logged and
    /// degrades to an empty list.
    pub async fn fetch_events(&self) -> Vec<OutageEvent> {
        match self.try_fetch().await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to fetch outage events, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<OutageEvent>, FeedError> {
        tracing::debug!("Fetching outage events from: {}", self.base_url);

        let response = self.client.get(&self.base_url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::ApiError(format!(
                "Feed returned status: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let items = json
            .as_array()
            .ok_or_else(|| FeedError::InvalidResponse("Expected a JSON array of events".into()))?;

        // A record that cannot parse at all is skipped; a record with
        // missing fields parses with defaults via FeedRecord.
        let events: Vec<OutageEvent> = items
            .iter()
            .filter_map(|item| serde_json::from_value::<FeedRecord>(item.clone()).ok())
            .map(OutageEvent::from)
            .collect();

        tracing::debug!("Fetched {} outage events", events.len());

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_events_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id":101,"identifier":"EVT-101","title":"Outage near Broadway","status":"active",
                     "cause":"equipment failure","numPeople":120,"startTime":1700000000,
                     "lastUpdatedTime":1700000600,"latitude":36.16,"longitude":-86.78},
                    {"id":102,"identifier":"EVT-102","title":"Outage in Donelson","status":"restored",
                     "cause":null,"numPeople":8,"startTime":1700001000,
                     "lastUpdatedTime":1700001300,"latitude":36.17,"longitude":-86.67}
                ]"#,
            )
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, 101);
        assert_eq!(events[0].identifier, "EVT-101");
        assert_eq!(events[0].num_people, 120);
        assert_eq!(events[0].cause.as_deref(), Some("equipment failure"));
        assert_eq!(events[1].cause, None);
        assert!(events.iter().all(|e| e.distance_miles.is_none()));
    }

    #[tokio::test]
    async fn test_fetch_events_defaults_missing_fields() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":7,"title":"Partial record"}]"#)
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 7);
        assert_eq!(events[0].identifier, "");
        assert_eq!(events[0].status, "");
        assert_eq!(events[0].num_people, 0);
        assert_eq!(events[0].start_time, 0);
        assert_eq!(events[0].latitude, 0.0);
        assert_eq!(events[0].longitude, 0.0);
        assert_eq!(events[0].cause, None);
    }

    #[tokio::test]
    async fn test_fetch_events_skips_unparseable_record() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id":"not-a-number","title":"Broken record"},
                    {"id":5,"identifier":"EVT-5","title":"Good record","status":"active",
                     "numPeople":3,"startTime":1,"lastUpdatedTime":2,"latitude":36.1,"longitude":-86.7}
                ]"#,
            )
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 5);
    }

    #[tokio::test]
    async fn test_fetch_events_malformed_json_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not valid json")
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_events_server_error_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_events_non_array_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"events":[]}"#)
            .create_async()
            .await;

        let client = EventFeedClient::new(server.url(), 10);
        let events = client.fetch_events().await;

        assert!(events.is_empty());
    }
}
