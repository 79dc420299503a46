use serde::Deserialize;

use crate::error::{ApiError, INVALID_COORDINATES, MISSING_COORDINATES};
use crate::models::coordinate::Coordinate;

/// `?lat=..&lng=..`, kept as text so absence and junk get distinct messages.
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl CoordinateQuery {
    pub fn coordinate(&self) -> Result<Coordinate, ApiError> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        let (Some(lat), Some(lng)) = (present(&self.lat), present(&self.lng)) else {
            return Err(ApiError::bad_request(MISSING_COORDINATES));
        };

        match (lat.parse::<f64>(), lng.parse::<f64>()) {
            (Ok(lat), Ok(lng)) if lat.is_finite() && lng.is_finite() => {
                Ok(Coordinate::new(lat, lng))
            }
            _ => Err(ApiError::bad_request(INVALID_COORDINATES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, lng: Option<&str>) -> CoordinateQuery {
        CoordinateQuery {
            lat: lat.map(String::from),
            lng: lng.map(String::from),
        }
    }

    #[test]
    fn parses_both_values() {
        assert_eq!(
            query(Some("12.97"), Some(" 77.59")).coordinate().unwrap(),
            Coordinate::new(12.97, 77.59)
        );
        assert_eq!(
            query(Some("0"), Some("0")).coordinate().unwrap(),
            Coordinate::new(0.0, 0.0)
        );
    }

    #[test]
    fn missing_or_empty_values_are_required() {
        for q in [
            query(None, Some("1")),
            query(Some("1"), None),
            query(Some(""), Some("1")),
            query(None, None),
        ] {
            let err = q.coordinate().unwrap_err();
            assert_eq!(err.to_string(), MISSING_COORDINATES);
        }
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = query(Some("north"), Some("1")).coordinate().unwrap_err();
        assert_eq!(err.to_string(), INVALID_COORDINATES);
        assert!(query(Some("inf"), Some("1")).coordinate().is_err());
    }
}
