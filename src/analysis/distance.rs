use crate::analysis::constants::EARTH_RADIUS_KM;
use crate::models::coordinate::Coordinate;

/// Great-circle distance in kilometres between two points given in decimal degrees,
/// using the haversine formula on a spherical earth.
///
/// Inputs are not range checked.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Same as [`distance_km`] for two [`Coordinate`]s.
pub fn distance_between(from: Coordinate, to: Coordinate) -> f64 {
    distance_km(from.latitude, from.longitude, to.latitude, to.longitude)
}
