use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::coordinate::UserLocation;
use crate::models::hospital::HospitalWithDistance;

/// Body of `POST /api/emergency`. Both fields are required but checked by the
/// handler so that a missing one gets a descriptive 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRequest {
    pub user_location: Option<UserLocation>,
    pub hospital: Option<HospitalWithDistance>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAlert {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_location: UserLocation,
    pub hospital: HospitalWithDistance,
}

impl EmergencyAlert {
    pub fn new(user_location: UserLocation, hospital: HospitalWithDistance) -> Self {
        EmergencyAlert {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_location,
            hospital,
        }
    }
}
