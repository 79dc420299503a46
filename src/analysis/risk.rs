use crate::analysis::constants::*;
use crate::models::accident::AccidentRecord;
use crate::models::risk::{RiskAssessment, RiskLevel};
use crate::models::weather::WeatherSnapshot;

/// Scores current conditions against the accident history.
///
/// An accident counts as similar when its recorded weather label contains the
/// current condition category, ignoring case ("Light Rain" matches "Rain").
pub fn analyze(accidents: &[AccidentRecord], weather: &WeatherSnapshot) -> RiskAssessment {
    let current = weather.weather.to_lowercase();
    let similar_accidents = accidents
        .iter()
        .filter(|a| a.weather.to_lowercase().contains(&current))
        .count();

    let risk_level = risk_level(similar_accidents);

    RiskAssessment {
        risk_level,
        similar_accidents,
        weather_recommendations: recommendations(weather, risk_level),
    }
}

pub fn risk_level(similar_accidents: usize) -> RiskLevel {
    if similar_accidents > HIGH_RISK_ABOVE {
        RiskLevel::High
    } else if similar_accidents > MEDIUM_RISK_ABOVE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Advisories in a fixed order: temperature, condition, wind, visibility, risk.
pub fn recommendations(weather: &WeatherSnapshot, risk_level: RiskLevel) -> Vec<String> {
    let mut out = Vec::new();

    if weather.temperature < COLD_BELOW_CELSIUS {
        out.push(COLD_ADVISORY);
    } else if weather.temperature > HEAT_ABOVE_CELSIUS {
        out.push(HEAT_ADVISORY);
    }

    match weather.weather.to_lowercase().as_str() {
        "rain" => out.push(RAIN_ADVISORY),
        "snow" => out.push(SNOW_ADVISORY),
        "fog" => out.push(FOG_ADVISORY),
        "thunderstorm" => out.push(THUNDERSTORM_ADVISORY),
        _ => {}
    }

    if weather.wind_speed > STRONG_WIND_ABOVE_MS {
        out.push(WIND_ADVISORY);
    }

    if weather.visibility < LOW_VISIBILITY_BELOW_M {
        out.push(VISIBILITY_ADVISORY);
    }

    match risk_level {
        RiskLevel::High => out.push(HIGH_RISK_ADVISORY),
        RiskLevel::Medium => out.push(MEDIUM_RISK_ADVISORY),
        RiskLevel::Low => {}
    }

    out.into_iter().map(String::from).collect()
}
