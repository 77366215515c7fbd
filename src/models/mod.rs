// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, FeedRecord, OutageEvent};
pub use requests::{GeocodeQuery, NearestQuery};
pub use responses::{
    ErrorResponse, EventsResponse, GeocodeResponse, HealthResponse, NearestErrorResponse,
    NearestResponse,
};
