use crate::core::distance::haversine_miles;
use crate::models::{Coordinates, OutageEvent};

/// Rank events by distance from a reference point
///
/// Annotates every event's `distance_miles` relative to `reference`, sorts
/// ascending and truncates to the closest `limit`. The sort is stable, so
/// events at identical distances keep their feed order. An event without a
/// computed distance orders last (not reachable after annotation, since
/// every event is annotated first).
///
/// `limit == 0` yields an empty result; a `limit` larger than the number of
/// events yields all of them.
pub fn rank_nearest(
    reference: Coordinates,
    events: Vec<OutageEvent>,
    limit: usize,
) -> Vec<OutageEvent> {
    let mut ranked: Vec<OutageEvent> = events
        .into_iter()
        .map(|mut event| {
            event.distance_miles = Some(haversine_miles(
                reference.lat,
                reference.lng,
                event.latitude,
                event.longitude,
            ));
            event
        })
        .collect();

    ranked.sort_by(|a, b| {
        let da = a.distance_miles.unwrap_or(f64::INFINITY);
        let db = b.distance_miles.unwrap_or(f64::INFINITY);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked.truncate(limit);
    ranked
}
