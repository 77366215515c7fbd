/// Earth's radius in miles (spherical approximation)
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the haversine great-circle distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lng1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lng2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles. The spherical approximation carries ~0.5% error vs.
/// true ellipsoidal distance. NaN inputs propagate to a NaN result.
#[inline]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_zero() {
        let distance = haversine_miles(36.1627, -86.7816, 36.1627, -86.7816);
        assert!(distance.abs() < 1e-9, "Expected 0, got {}", distance);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_miles(36.1627, -86.7816, 35.1495, -90.0490);
        let d2 = haversine_miles(35.1495, -90.0490, 36.1627, -86.7816);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_nashville_to_memphis() {
        // Nashville to Memphis is approximately 195 miles
        let distance = haversine_miles(36.1627, -86.7816, 35.1495, -90.0490);
        let error = (distance - 195.0).abs() / 195.0;
        assert!(error < 0.01, "Distance should be ~195mi, got {}", distance);
    }

    #[test]
    fn test_short_distance() {
        // Downtown Nashville to East Nashville, roughly 2-3 miles
        let distance = haversine_miles(36.1627, -86.7816, 36.1770, -86.7516);
        assert!(
            distance > 1.0 && distance < 4.0,
            "Expected a couple of miles, got {}",
            distance
        );
    }
}
