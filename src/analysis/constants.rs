// great-circle distance
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// hospital search
pub const NEARBY_RADIUS_KM: f64 = 20.0;

// risk thresholds, counted in accidents recorded under similar weather
pub const HIGH_RISK_ABOVE: usize = 5;
pub const MEDIUM_RISK_ABOVE: usize = 2;

// weather advisories (metric units as returned by the weather source)
pub const COLD_BELOW_CELSIUS: f64 = 5.0;
pub const HEAT_ABOVE_CELSIUS: f64 = 35.0;
pub const STRONG_WIND_ABOVE_MS: f64 = 20.0;
pub const LOW_VISIBILITY_BELOW_M: i64 = 1000;

// advisory texts
pub const COLD_ADVISORY: &str = "⚠️ Cold weather conditions. Watch for ice formation.";
pub const HEAT_ADVISORY: &str = "🌡️ High temperature. Ensure proper vehicle cooling.";
pub const RAIN_ADVISORY: &str = "🌧️ Wet conditions. Maintain safe distance and reduce speed.";
pub const SNOW_ADVISORY: &str = "❄️ Snow conditions. Use winter tires and drive slowly.";
pub const FOG_ADVISORY: &str = "🌫️ Foggy conditions. Use fog lights and maintain extra distance.";
pub const THUNDERSTORM_ADVISORY: &str =
    "⛈️ Thunderstorm conditions. Consider delaying travel if possible.";
pub const WIND_ADVISORY: &str = "💨 Strong winds. Keep firm grip on steering wheel.";
pub const VISIBILITY_ADVISORY: &str =
    "👁️ Low visibility. Use headlights and maintain extra caution.";
pub const HIGH_RISK_ADVISORY: &str =
    "🚨 High accident risk in current conditions. Maximum caution required.";
pub const MEDIUM_RISK_ADVISORY: &str = "⚠️ Moderate accident risk. Exercise increased caution.";
