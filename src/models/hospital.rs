use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::coordinate::Coordinate;
use crate::models::dataset::{DatasetError, load_rows};

const COLUMNS: [&str; 4] = ["Hospital Name", "Latitude", "Longitude", "Distance"];

#[derive(Debug, Clone, PartialEq)]
pub struct HospitalRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `Distance` column as published; listings compute their own.
    #[allow(dead_code)]
    pub default_distance: f64,
}

impl HospitalRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A hospital as listed to the client, relative to a query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalWithDistance {
    pub name: String,
    /// `[longitude, latitude]`, the order map clients expect.
    pub coordinates: [f64; 2],
    /// Kilometres from the query point.
    pub distance: f64,
    #[serde(default)]
    pub address: String,
}

pub fn load_hospitals(path: &Path) -> Result<Vec<HospitalRecord>, DatasetError> {
    load_rows(path, &COLUMNS, |row| {
        Ok(HospitalRecord {
            name: row.text(0).to_string(),
            latitude: row.number(1, COLUMNS[1])?,
            longitude: row.number(2, COLUMNS[2])?,
            default_distance: row.number(3, COLUMNS[3])?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_hospitals_and_skips_bad_rows() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Hospital Name,Latitude,Longitude,Distance\n\
             \"Victoria Hospital, Fort\",12.9634,77.5737,2.5\n\
             Broken,north,77.5,1\n\
             Manipal,12.9583,77.6484,6.1\n"
        )
        .unwrap();

        let hospitals = load_hospitals(file.path()).unwrap();

        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].name, "Victoria Hospital, Fort");
        assert_eq!(hospitals[0].default_distance, 2.5);
        assert_eq!(hospitals[1].coordinate(), Coordinate::new(12.9583, 77.6484));
    }

    #[test]
    fn missing_distance_column_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Hospital Name,Latitude,Longitude\nA,1,2\n").unwrap();

        assert!(matches!(
            load_hospitals(file.path()),
            Err(DatasetError::MissingColumn {
                column: "Distance",
                ..
            })
        ));
    }

    #[test]
    fn alert_payload_without_address_deserializes() {
        let hospital: HospitalWithDistance = serde_json::from_str(
            r#"{"name":"Manipal","coordinates":[77.6484,12.9583],"distance":3.25}"#,
        )
        .unwrap();
        assert_eq!(hospital.address, "");
        assert_eq!(hospital.coordinates, [77.6484, 12.9583]);
    }
}
