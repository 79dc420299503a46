use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::models::emergency::EmergencyAlert;

/// Destination for emergency alerts.
///
/// `notify` only dispatches. Delivery happens off the request path and its
/// failures are logged, not returned.
pub trait AlertNotifier: Send + Sync {
    fn notify(&self, alert: EmergencyAlert) -> Result<()>;
}

fn log_alert(alert: &EmergencyAlert) {
    let [lon, lat] = alert.hospital.coordinates;
    let location = format!("[{}, {}]", lon, lat);
    let distance = format!("{:.2}km", alert.hospital.distance);
    warn!(
        alert_id = %alert.id,
        time = %alert.timestamp.to_rfc3339(),
        hospital = %alert.hospital.name,
        location = %location,
        distance = %distance,
        user_lat = alert.user_location.lat,
        user_lng = alert.user_location.lng,
        "EMERGENCY ALERT"
    );
}

/// Writes alerts to the log.
pub struct LogNotifier;

impl AlertNotifier for LogNotifier {
    fn notify(&self, alert: EmergencyAlert) -> Result<()> {
        log_alert(&alert);
        Ok(())
    }
}

/// Logs alerts and forwards them as JSON to a webhook.
pub struct WebhookNotifier {
    http: reqwest::Client,
    url: url::Url,
}

impl WebhookNotifier {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        Ok(WebhookNotifier {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            url: url::Url::parse(url)?,
        })
    }
}

impl AlertNotifier for WebhookNotifier {
    fn notify(&self, alert: EmergencyAlert) -> Result<()> {
        log_alert(&alert);

        let http = self.http.clone();
        let url = self.url.clone();
        tokio::spawn(async move {
            let id = alert.id;
            match http.post(url).json(&alert).send().await {
                Ok(resp) if resp.status().is_success() => {
                    info!("alert {} delivered to webhook", id);
                }
                Ok(resp) => {
                    error!("webhook rejected alert {}: {}", id, resp.status());
                }
                Err(e) => {
                    error!("failed to deliver alert {}: {:?}", id, e);
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::coordinate::UserLocation;
    use crate::models::hospital::HospitalWithDistance;

    fn alert() -> EmergencyAlert {
        EmergencyAlert::new(
            UserLocation { lat: 1.0, lng: 1.0 },
            HospitalWithDistance {
                name: "City Hospital".to_string(),
                coordinates: [77.59, 12.97],
                distance: 1.234,
                address: String::new(),
            },
        )
    }

    #[test]
    fn log_notifier_accepts_alerts() {
        assert!(LogNotifier.notify(alert()).is_ok());
    }

    #[test]
    fn webhook_notifier_requires_valid_url() {
        assert!(WebhookNotifier::new("::", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn webhook_delivery_failure_stays_off_the_request_path() {
        // nothing listens on port 9; delivery fails in the background
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/alerts", Duration::from_millis(200))
            .unwrap();
        assert!(notifier.notify(alert()).is_ok());
    }

    #[test]
    fn alert_serializes_for_delivery() {
        let json = serde_json::to_value(alert()).unwrap();
        assert_eq!(json["hospital"]["name"], "City Hospital");
        assert_eq!(json["userLocation"]["lat"], 1.0);
        assert!(json["id"].is_string());
        assert!(json["timestamp"].is_string());
    }
}
