//! Liveness poller state and its presentation.
//!
//! # Design
//! - Every completed probe builds a fresh [`HealthStatus`]; nothing is merged.
//! - HTTP failures are "unhealthy", transport failures are "error".

use crate::core::probe::ProbeError;
use crate::core::ui::{StatusIcon, Tone};
use chrono::{DateTime, Utc};

/// Coarse liveness state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthState {
    /// The backend answered with 2xx.
    Healthy,
    /// The backend answered with a non-2xx status.
    Unhealthy,
    /// No probe has completed yet.
    #[default]
    Loading,
    /// The request did not produce a usable response.
    Error,
}

impl HealthState {
    /// Chip tone for the state.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Healthy => Tone::Success,
            Self::Unhealthy | Self::Error => Tone::Error,
            Self::Loading => Tone::Info,
        }
    }

    /// Icon drawn beside the backend title.
    #[must_use]
    pub const fn icon(self) -> StatusIcon {
        match self {
            Self::Healthy => StatusIcon::Success,
            Self::Unhealthy | Self::Error => StatusIcon::Error,
            Self::Loading => StatusIcon::Spinner,
        }
    }

    /// Human readable summary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "API is healthy",
            Self::Unhealthy => "API is unhealthy",
            Self::Error => "API connection error",
            Self::Loading => "Checking API status...",
        }
    }
}

/// Latest liveness snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthStatus {
    /// Coarse state.
    pub status: HealthState,
    /// Wall-clock time around the request in milliseconds.
    pub response_time_ms: Option<u64>,
    /// When the probe resolved.
    pub last_checked: Option<DateTime<Utc>>,
    /// Inline error message for unhealthy/error states.
    pub error: Option<String>,
}

impl HealthStatus {
    /// Build the snapshot for a resolved probe.
    #[must_use]
    pub fn from_probe(
        outcome: &Result<(), ProbeError>,
        response_time_ms: u64,
        checked_at: DateTime<Utc>,
    ) -> Self {
        let (status, error) = match outcome {
            Ok(()) => (HealthState::Healthy, None),
            Err(err) if err.is_http() => (HealthState::Unhealthy, Some(err.to_string())),
            Err(err) => (HealthState::Error, Some(err.to_string())),
        };
        Self {
            status,
            response_time_ms: Some(response_time_ms),
            last_checked: Some(checked_at),
            error,
        }
    }
}

/// Milliseconds between two `Date.now()` readings, clamped at zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_ms(started_at_ms: f64, finished_at_ms: f64) -> u64 {
    let delta = (finished_at_ms - started_at_ms).round();
    if delta.is_finite() && delta > 0.0 {
        delta as u64
    } else {
        0
    }
}

/// Render a response time, treating zero as unknown.
#[must_use]
pub fn format_response_time(response_time_ms: Option<u64>) -> String {
    match response_time_ms {
        Some(ms) if ms > 0 => format!("{ms}ms"),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::check_status;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn ok_response_within_50ms_is_healthy() {
        let status = HealthStatus::from_probe(&Ok(()), elapsed_ms(1_000.0, 1_050.0), now());
        assert_eq!(status.status, HealthState::Healthy);
        assert_eq!(status.response_time_ms, Some(50));
        assert_eq!(status.last_checked, Some(now()));
        assert_eq!(status.error, None);
    }

    #[test]
    fn every_2xx_status_is_healthy() {
        for code in 200..300 {
            let outcome = check_status(code, "");
            let status = HealthStatus::from_probe(&outcome, 12, now());
            assert_eq!(status.status, HealthState::Healthy, "status {code}");
            assert!(status.error.is_none());
        }
    }

    #[test]
    fn non_2xx_statuses_are_unhealthy_with_code() {
        for code in [100, 101, 199, 300, 304, 400, 401, 404, 418, 500, 502, 503] {
            let outcome = check_status(code, "Whatever");
            let status = HealthStatus::from_probe(&outcome, 7, now());
            assert_eq!(status.status, HealthState::Unhealthy, "status {code}");
            let error = status.error.expect("error message");
            assert!(error.contains(&code.to_string()));
        }
    }

    #[test]
    fn service_unavailable_message() {
        let outcome = check_status(503, "Service Unavailable");
        let status = HealthStatus::from_probe(&outcome, 20, now());
        assert_eq!(status.status, HealthState::Unhealthy);
        assert_eq!(status.error.as_deref(), Some("HTTP 503: Service Unavailable"));
    }

    #[test]
    fn transport_failure_is_error_with_message() {
        for message in ["Failed to fetch", "NetworkError when attempting to fetch resource.", ""] {
            let outcome = Err(ProbeError::transport(message));
            let status = HealthStatus::from_probe(&outcome, 3, now());
            assert_eq!(status.status, HealthState::Error);
            assert_eq!(status.error.as_deref(), Some(message));
        }
    }

    #[test]
    fn elapsed_never_goes_negative() {
        assert_eq!(elapsed_ms(100.0, 90.0), 0);
        assert_eq!(elapsed_ms(100.0, f64::NAN), 0);
        assert_eq!(elapsed_ms(0.0, 49.6), 50);
    }

    #[test]
    fn presentation_covers_every_state() {
        assert_eq!(HealthStatus::default().status, HealthState::Loading);
        assert_eq!(HealthState::Loading.icon(), StatusIcon::Spinner);
        assert_eq!(HealthState::Loading.tone(), Tone::Info);
        assert_eq!(HealthState::Healthy.tone(), Tone::Success);
        assert_eq!(HealthState::Error.label(), "API connection error");
        assert_eq!(HealthState::Unhealthy.icon(), StatusIcon::Error);
    }

    #[test]
    fn response_time_formatting() {
        assert_eq!(format_response_time(Some(50)), "50ms");
        assert_eq!(format_response_time(Some(0)), "N/A");
        assert_eq!(format_response_time(None), "N/A");
    }
}
