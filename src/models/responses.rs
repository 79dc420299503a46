use serde::Serialize;

use crate::models::coordinate::UserLocation;
use crate::models::hospital::HospitalWithDistance;
use crate::models::risk::RiskAssessment;
use crate::models::weather::WeatherSnapshot;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyHospitalsResponse {
    pub success: bool,
    pub hospitals: Vec<HospitalWithDistance>,
    pub user_location: UserLocation,
    pub weather: WeatherSnapshot,
    pub weather_analysis: RiskAssessment,
}

#[derive(Debug, Serialize)]
pub struct WeatherReportResponse {
    pub success: bool,
    pub weather: WeatherSnapshot,
    pub analysis: RiskAssessment,
}

#[derive(Debug, Serialize)]
pub struct EmergencyResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
