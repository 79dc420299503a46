use serde::{Deserialize, Serialize};

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

/// Location as exchanged with the map client (`{lat, lng}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for UserLocation {
    fn from(c: Coordinate) -> Self {
        UserLocation {
            lat: c.latitude,
            lng: c.longitude,
        }
    }
}

impl From<UserLocation> for Coordinate {
    fn from(l: UserLocation) -> Self {
        Coordinate::new(l.lat, l.lng)
    }
}
