use std::path::Path;

use serde::Serialize;

use crate::models::coordinate::Coordinate;
use crate::models::dataset::{DatasetError, load_rows};

const COLUMNS: [&str; 5] = [
    "Latitude",
    "Longitude",
    "severity",
    "Weather Condition",
    "Road Surface Condition",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub severity: f64,
    /// Free-text weather label as recorded, e.g. "Light Rain".
    pub weather: String,
    pub road_surface: String,
}

pub fn load_accidents(path: &Path) -> Result<Vec<AccidentRecord>, DatasetError> {
    load_rows(path, &COLUMNS, |row| {
        Ok(AccidentRecord {
            latitude: row.number(0, COLUMNS[0])?,
            longitude: row.number(1, COLUMNS[1])?,
            severity: row.number(2, COLUMNS[2])?,
            weather: row.text(3).to_string(),
            road_surface: row.text(4).to_string(),
        })
    })
}

/// Mean position of the given accidents, `None` when there are none.
pub fn centroid(accidents: &[AccidentRecord]) -> Option<Coordinate> {
    if accidents.is_empty() {
        return None;
    }
    let n = accidents.len() as f64;
    let (lat, lon) = accidents
        .iter()
        .fold((0.0, 0.0), |(lat, lon), a| (lat + a.latitude, lon + a.longitude));
    Some(Coordinate::new(lat / n, lon / n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_by_header_name() {
        let file = csv_file(
            "Accident ID,Latitude,Longitude,severity,Weather Condition,Road Surface Condition\n\
             1,12.97,77.59,3,Light Rain,Wet\n\
             2, 12.93 ,77.62,1,Clear,Dry\n",
        );

        let accidents = load_accidents(file.path()).unwrap();

        assert_eq!(accidents.len(), 2);
        assert_eq!(
            accidents[0],
            AccidentRecord {
                latitude: 12.97,
                longitude: 77.59,
                severity: 3.0,
                weather: "Light Rain".to_string(),
                road_surface: "Wet".to_string(),
            }
        );
        assert_eq!(accidents[1].latitude, 12.93);
    }

    #[test]
    fn skips_rows_with_unparseable_numbers() {
        let file = csv_file(
            "Latitude,Longitude,severity,Weather Condition,Road Surface Condition\n\
             12.97,77.59,severe,Rain,Wet\n\
             ,77.59,2,Rain,Wet\n\
             12.97,77.59,2,Rain\n\
             12.97,77.59,2,Fog,Dry\n",
        );

        let accidents = load_accidents(file.path()).unwrap();

        assert_eq!(accidents.len(), 1);
        assert_eq!(accidents[0].weather, "Fog");
        assert!(accidents.iter().all(|a| a.latitude.is_finite()));
    }

    #[test]
    fn missing_column_fails_the_load() {
        let file = csv_file("Latitude,Longitude,severity\n12.97,77.59,2\n");

        let err = load_accidents(file.path()).unwrap_err();

        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                column: "Weather Condition",
                ..
            }
        ));
    }

    #[test]
    fn missing_file_fails_the_load() {
        let err = load_accidents(Path::new("/nonexistent/accidents.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = AccidentRecord {
            latitude: 1.5,
            longitude: 2.5,
            severity: 2.0,
            weather: "Rain".to_string(),
            road_surface: "Wet".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["roadSurface"], "Wet");
        assert_eq!(json["weather"], "Rain");
        assert_eq!(json["severity"], 2.0);
    }

    #[test]
    fn centroid_is_mean_position() {
        let at = |latitude, longitude| AccidentRecord {
            latitude,
            longitude,
            severity: 1.0,
            weather: String::new(),
            road_surface: String::new(),
        };
        let c = centroid(&[at(10.0, 70.0), at(12.0, 80.0)]).unwrap();
        assert_eq!(c, Coordinate::new(11.0, 75.0));
        assert!(centroid(&[]).is_none());
    }
}
