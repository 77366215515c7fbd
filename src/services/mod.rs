// Service exports
pub mod feed;
pub mod geocoder;
pub mod proximity;

pub use feed::{EventFeedClient, FeedError};
pub use geocoder::{GeocodeClient, GeocodeError};
pub use proximity::{NearestOutages, ProximityError, ProximityService};
