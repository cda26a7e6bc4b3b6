use crate::models::Location;

/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two points in meters
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// Coordinates are not range-checked. NaN in, NaN out.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Check whether a target point lies within `radius_m` meters of the origin
///
/// An unknown origin is never within range. The boundary is inclusive.
#[inline]
pub fn is_within_radius(
    origin: Option<&Location>,
    target_lat: f64,
    target_lon: f64,
    radius_m: f64,
) -> bool {
    let Some(origin) = origin else {
        return false;
    };

    haversine_distance(origin.latitude, origin.longitude, target_lat, target_lon) <= radius_m
}
