#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Pulse health endpoints.
//!
//! The backend exposes two probes: `GET /health/general` (liveness, body
//! ignored beyond being JSON) and `GET /health/llm` which returns one
//! [`ProviderResult`] per configured external provider. These types keep the
//! wire contract in one place so the UI decodes exactly what the server emits.
use serde::{Deserialize, Serialize};

/// Relative path of the liveness endpoint.
pub const HEALTH_GENERAL_PATH: &str = "health/general";
/// Relative path of the provider probe endpoint.
pub const HEALTH_LLM_PATH: &str = "health/llm";

/// Wire text the backend emits for providers without credentials.
pub const NOT_CONFIGURED_WIRE: &str =
    "no request was made because there was no configuration present for this provider";

/// Outcome of a single provider probe.
///
/// Unrecognised strings are preserved in [`ProviderStatus::Unknown`] so a newer
/// backend never breaks decoding of the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderStatus {
    /// The provider answered the probe prompt.
    Ok,
    /// The provider returned an error.
    Failed,
    /// The provider did not answer in time.
    Timeout,
    /// No request was made because the provider has no configuration.
    NotConfigured,
    /// Any status string this client does not know about.
    Unknown(String),
}

impl ProviderStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Ok => "ok",
            Self::Failed => "failed",
            Self::Timeout => "timeout",
            Self::NotConfigured => NOT_CONFIGURED_WIRE,
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    /// Whether the provider is reachable and answering.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<String> for ProviderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ok" => Self::Ok,
            "failed" => Self::Failed,
            "timeout" => Self::Timeout,
            NOT_CONFIGURED_WIRE => Self::NotConfigured,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ProviderStatus> for String {
    fn from(value: ProviderStatus) -> Self {
        match value {
            ProviderStatus::Unknown(raw) => raw,
            other => other.as_wire().to_string(),
        }
    }
}

/// Probe result reported for one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Provider name (e.g. `openai`).
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Round-trip time in seconds, when a request was made.
    pub elapsed: Option<f64>,
    #[serde(default)]
    /// Raw provider output.
    pub output: String,
    #[serde(default)]
    /// Prompt that was sent to the provider.
    pub prompt: String,
    /// Probe outcome.
    pub status: ProviderStatus,
}

/// Response body of `GET /health/llm`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderProbeResponse {
    #[serde(default)]
    /// Results in backend order; empty when the field is absent.
    pub results: Vec<ProviderResult>,
}
