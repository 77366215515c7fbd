use serde::{Deserialize, Serialize};

/// Geographic coordinates in WGS84 degrees
///
/// Latitude is valid in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single reported outage with location, timing and severity metadata
///
/// `distance_miles` starts unset and is populated by the proximity ranker
/// relative to the query's reference point. It is never persisted; each
/// query recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutageEvent {
    pub id: i64,
    pub identifier: String,
    pub title: String,
    pub status: String,
    pub cause: Option<String>,
    pub num_people: i64,
    pub start_time: i64,
    pub last_updated_time: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_miles: Option<f64>,
}

impl OutageEvent {
    /// The event's reported location as a coordinate pair
    pub fn location(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Raw record shape returned by the outage feed
///
/// Every field is defaulted so a partially-populated upstream record still
/// parses; at worst that one record carries zeroed fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub num_people: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub last_updated_time: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl From<FeedRecord> for OutageEvent {
    fn from(record: FeedRecord) -> Self {
        OutageEvent {
            id: record.id,
            identifier: record.identifier,
            title: record.title,
            status: record.status,
            cause: record.cause,
            num_people: record.num_people,
            start_time: record.start_time,
            last_updated_time: record.last_updated_time,
            latitude: record.latitude,
            longitude: record.longitude,
            distance_miles: None,
        }
    }
}
