//! Provider probe poller state, request building and presentation.
//!
//! # Design
//! - Completion replaces the whole [`LlmStatus`]; only `begin` keeps the
//!   previous results so the list does not flicker while a refresh runs.
//! - Presentation is an exhaustive match over [`ProviderStatus`].

use crate::core::poll::PollPhase;
use crate::core::probe::ProbeError;
use crate::core::ui::{StatusIcon, Tone};
use chrono::{DateTime, Utc};
use pulse_api_models::{HEALTH_LLM_PATH, ProviderProbeResponse, ProviderResult, ProviderStatus};

/// Latest provider probe snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LlmStatus {
    /// Results in backend order.
    pub results: Vec<ProviderResult>,
    /// When the last fetch resolved.
    pub last_checked: Option<DateTime<Utc>>,
    /// Fetch lifecycle; `Loading` while a request is outstanding.
    pub phase: PollPhase,
    /// Inline error for the last failed fetch.
    pub error: Option<String>,
}

impl LlmStatus {
    /// Whether a fetch started through the poller is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// State while a fetch is in flight: previous results stay visible, the
    /// error is cleared.
    #[must_use]
    pub fn begin(&self) -> Self {
        Self {
            results: self.results.clone(),
            last_checked: self.last_checked,
            phase: self.phase.start(),
            error: None,
        }
    }

    /// Snapshot for a resolved fetch.
    #[must_use]
    pub fn complete(
        outcome: Result<ProviderProbeResponse, ProbeError>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        match outcome {
            Ok(response) => Self {
                results: response.results,
                last_checked: Some(checked_at),
                phase: PollPhase::Loading.resolve(true),
                error: None,
            },
            Err(err) => Self {
                results: Vec::new(),
                last_checked: Some(checked_at),
                phase: PollPhase::Loading.resolve(false),
                error: Some(err.to_string()),
            },
        }
    }

    /// Number of providers reporting `ok`.
    #[must_use]
    pub fn working_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_ok()).count()
    }

    /// Summary chip text, e.g. `"1/1 Working"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} Working", self.working_count(), self.results.len())
    }
}

/// Relative probe path with its query string.
///
/// `force_refresh` is only present when forcing; `prompt` is omitted when empty.
#[must_use]
pub fn probe_path(force_refresh: bool, prompt: &str) -> String {
    let mut params = Vec::with_capacity(2);
    if force_refresh {
        params.push("force_refresh=true".to_string());
    }
    if !prompt.is_empty() {
        params.push(format!("prompt={}", urlencoding::encode(prompt)));
    }
    if params.is_empty() {
        HEALTH_LLM_PATH.to_string()
    } else {
        format!("{HEALTH_LLM_PATH}?{}", params.join("&"))
    }
}

/// Icon, tone and label for one provider row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderBadge {
    /// Glyph beside the provider name.
    pub icon: StatusIcon,
    /// Chip tone.
    pub tone: Tone,
    /// Chip label.
    pub label: &'static str,
}

/// Map a probe status to its badge.
#[must_use]
pub const fn provider_badge(status: &ProviderStatus) -> ProviderBadge {
    match status {
        ProviderStatus::Ok => ProviderBadge {
            icon: StatusIcon::Success,
            tone: Tone::Success,
            label: "Working",
        },
        ProviderStatus::Failed => ProviderBadge {
            icon: StatusIcon::Error,
            tone: Tone::Error,
            label: "Failed",
        },
        ProviderStatus::Timeout => ProviderBadge {
            icon: StatusIcon::Error,
            tone: Tone::Error,
            label: "Timeout",
        },
        ProviderStatus::NotConfigured => ProviderBadge {
            icon: StatusIcon::Schedule,
            tone: Tone::Warning,
            label: "Not Configured",
        },
        ProviderStatus::Unknown(_) => ProviderBadge {
            icon: StatusIcon::Schedule,
            tone: Tone::Neutral,
            label: "Unknown",
        },
    }
}

/// Elapsed seconds with two decimals; `None` when absent or zero.
#[must_use]
pub fn format_elapsed(elapsed: Option<f64>) -> Option<String> {
    elapsed
        .filter(|secs| secs.is_finite() && secs.abs() > f64::EPSILON)
        .map(|secs| format!("{secs:.2}s"))
}

/// Next expanded row after clicking `provider`; clicking the open row closes it.
#[must_use]
pub fn toggle_expanded(current: Option<&str>, provider: &str) -> Option<String> {
    if current == Some(provider) {
        None
    } else {
        Some(provider.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pulse_api_models::NOT_CONFIGURED_WIRE;

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, secs)
            .single()
            .expect("valid timestamp")
    }

    fn decode(body: &str) -> ProviderProbeResponse {
        serde_json::from_str(body).expect("fixture decodes")
    }

    #[test]
    fn forced_refresh_includes_flag() {
        let path = probe_path(true, "hi");
        assert!(path.contains("force_refresh=true"));
        assert_eq!(path, "health/llm?force_refresh=true&prompt=hi");
    }

    #[test]
    fn unforced_refresh_omits_flag() {
        let path = probe_path(false, "hi");
        assert!(!path.contains("force_refresh"));
        assert_eq!(path, "health/llm?prompt=hi");
    }

    #[test]
    fn empty_prompt_is_omitted() {
        assert_eq!(probe_path(false, ""), "health/llm");
        assert_eq!(probe_path(true, ""), "health/llm?force_refresh=true");
    }

    #[test]
    fn prompt_is_percent_encoded() {
        let path = probe_path(false, "cat's name & more?");
        assert_eq!(path, "health/llm?prompt=cat%27s%20name%20%26%20more%3F");
    }

    #[test]
    fn single_working_provider_scenario() {
        let body = r#"{"results":[{"provider":"openai","status":"ok","output":"x","prompt":"p","elapsed":1.2}]}"#;
        let status = LlmStatus::complete(Ok(decode(body)), at(0));
        assert_eq!(status.summary(), "1/1 Working");
        assert_eq!(status.results.len(), 1);
        let badge = provider_badge(&status.results[0].status);
        assert_eq!(badge.icon, StatusIcon::Success);
        assert_eq!(badge.label, "Working");
        assert_eq!(format_elapsed(status.results[0].elapsed).as_deref(), Some("1.20s"));
        assert!(!status.is_loading());
    }

    #[test]
    fn not_configured_scenario() {
        let body = format!(
            r#"{{"results":[{{"provider":"anthropic","status":"{NOT_CONFIGURED_WIRE}","output":"","prompt":"p"}}]}}"#
        );
        let status = LlmStatus::complete(Ok(decode(&body)), at(0));
        let badge = provider_badge(&status.results[0].status);
        assert_eq!(badge.label, "Not Configured");
        assert_eq!(badge.tone, Tone::Warning);
        assert_eq!(status.summary(), "0/1 Working");
        assert_eq!(format_elapsed(status.results[0].elapsed), None);
    }

    #[test]
    fn badges_cover_failures_and_unknown() {
        assert_eq!(provider_badge(&ProviderStatus::Failed).label, "Failed");
        assert_eq!(provider_badge(&ProviderStatus::Timeout).label, "Timeout");
        assert_eq!(provider_badge(&ProviderStatus::Timeout).tone, Tone::Error);
        let unknown = provider_badge(&ProviderStatus::Unknown("weird".into()));
        assert_eq!(unknown.label, "Unknown");
        assert_eq!(unknown.tone, Tone::Neutral);
    }

    #[test]
    fn begin_keeps_results_and_clears_error() {
        let loaded = LlmStatus::complete(
            Ok(decode(r#"{"results":[{"provider":"openai","status":"ok"}]}"#)),
            at(1),
        );
        let failed = LlmStatus {
            error: Some("HTTP 500: Internal Server Error".into()),
            ..loaded
        };
        let pending = failed.begin();
        assert!(pending.is_loading());
        assert_eq!(pending.error, None);
        assert_eq!(pending.results, failed.results);
        assert_eq!(pending.last_checked, Some(at(1)));
    }

    #[test]
    fn http_failure_clears_results() {
        let loaded = LlmStatus::complete(
            Ok(decode(r#"{"results":[{"provider":"openai","status":"ok"}]}"#)),
            at(1),
        );
        let pending = loaded.begin();
        let failed = LlmStatus::complete(
            Err(ProbeError::Http {
                status: 502,
                status_text: "Bad Gateway".into(),
            }),
            at(2),
        );
        assert!(!pending.results.is_empty());
        assert!(failed.results.is_empty());
        assert_eq!(failed.error.as_deref(), Some("HTTP 502: Bad Gateway"));
        assert_eq!(failed.last_checked, Some(at(2)));
        assert_eq!(failed.phase, PollPhase::Failed);
    }

    #[test]
    fn transport_failure_uses_message() {
        let failed = LlmStatus::complete(Err(ProbeError::transport("Failed to fetch")), at(3));
        assert!(failed.results.is_empty());
        assert_eq!(failed.error.as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn missing_results_field_yields_empty_list() {
        let status = LlmStatus::complete(Ok(decode("{}")), at(4));
        assert!(status.results.is_empty());
        assert_eq!(status.summary(), "0/0 Working");
        assert_eq!(status.error, None);
    }

    #[test]
    fn elapsed_formatting_skips_zero() {
        assert_eq!(format_elapsed(Some(0.0)), None);
        assert_eq!(format_elapsed(None), None);
        assert_eq!(format_elapsed(Some(0.456)).as_deref(), Some("0.46s"));
    }

    #[test]
    fn expanding_toggles_single_row() {
        assert_eq!(toggle_expanded(None, "openai").as_deref(), Some("openai"));
        assert_eq!(toggle_expanded(Some("openai"), "openai"), None);
        assert_eq!(
            toggle_expanded(Some("openai"), "anthropic").as_deref(),
            Some("anthropic")
        );
    }
}
