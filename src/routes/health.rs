//! Health check endpoint for container orchestration.
//!
//! A liveness probe that returns 200 OK with a JSON status document whenever the
//! process can answer HTTP. Used by Kubernetes probes and load balancers.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body of a `GET /health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// ISO 8601 UTC with millisecond precision, e.g. `2026-10-17T12:00:00.123Z`
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy_at(now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy_at(Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        let body = serde_json::to_value(HealthResponse::healthy_at(now)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "healthy", "timestamp": "2026-10-17T12:00:00.123Z"})
        );
    }

    #[test]
    fn test_timestamp_keeps_zero_millis() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let response = HealthResponse::healthy_at(now);
        assert_eq!(response.timestamp, "2026-01-02T03:04:05.000Z");
    }

    #[tokio::test]
    async fn test_health_handler_reports_healthy() {
        let Json(response) = health().await;
        assert_eq!(response.status, "healthy");
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
