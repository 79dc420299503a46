use crate::analysis::constants::NEARBY_RADIUS_KM;
use crate::analysis::distance::distance_between;
use crate::models::coordinate::Coordinate;
use crate::models::hospital::{HospitalRecord, HospitalWithDistance};

/// Hospitals within [`NEARBY_RADIUS_KM`] of `origin`, nearest first.
///
/// Equal distances keep their input order. Each address notes how far the
/// hospital is from `hotspot`.
pub fn find_nearby(
    hospitals: &[HospitalRecord],
    origin: Coordinate,
    hotspot: Coordinate,
) -> Vec<HospitalWithDistance> {
    let mut nearby: Vec<HospitalWithDistance> = hospitals
        .iter()
        .map(|hospital| {
            let at = hospital.coordinate();
            let distance = distance_between(origin, at);
            let hotspot_distance = distance_between(at, hotspot);

            HospitalWithDistance {
                name: hospital.name.clone(),
                coordinates: [hospital.longitude, hospital.latitude],
                distance,
                address: format!(
                    "{} ({:.2}km from accident prone area)",
                    hospital.name, hotspot_distance
                ),
            }
        })
        .filter(|h| h.distance <= NEARBY_RADIUS_KM)
        .collect();

    // sort_by is stable
    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    nearby
}
