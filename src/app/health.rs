use crate::utils::monitor::UptimeMonitor;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Payload of the status endpoint. Pure status echo; no computation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub ok: bool,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: f64,
    pub environment: String,
}

impl HealthStatus {
    pub fn capture(monitor: &UptimeMonitor, environment: &str) -> Self {
        Self {
            ok: true,
            timestamp: Utc::now(),
            uptime_seconds: monitor.uptime_seconds(),
            environment: environment.to_string(),
        }
    }
}

fn serialize_iso8601<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
