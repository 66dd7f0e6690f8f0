//! App-wide yewdux store for the status page.
//!
//! # Design
//! - One store per page session; the pollers write, views only select.
//! - Reducers are plain functions so the poll cycle is testable natively.
//! - Completions are applied in resolution order with no sequencing guard.

use crate::core::health::HealthStatus;
use crate::core::poll::PollPhase;
use crate::core::probe::ProbeError;
use crate::core::prompt::DEFAULT_PROMPT;
use crate::core::providers::{LlmStatus, toggle_expanded};
use chrono::{DateTime, Utc};
use pulse_api_models::ProviderProbeResponse;
use yewdux::store::Store;

/// Shared status page state.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct StatusStore {
    /// Latest liveness snapshot.
    pub health: HealthStatus,
    /// Liveness request lifecycle, drives the "Checking..." indicator.
    pub health_phase: PollPhase,
    /// Latest provider snapshot.
    pub providers: LlmStatus,
    /// Prompt sent with every provider probe.
    pub prompt: String,
    /// Provider row currently expanded.
    pub expanded: Option<String>,
}

impl Default for StatusStore {
    fn default() -> Self {
        Self {
            health: HealthStatus::default(),
            health_phase: PollPhase::Idle,
            providers: LlmStatus::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            expanded: None,
        }
    }
}

impl StatusStore {
    /// Whether a liveness request is in flight.
    #[must_use]
    pub const fn is_polling(&self) -> bool {
        self.health_phase.is_loading()
    }
}

/// Mark a liveness request as started.
pub fn begin_health_check(store: &mut StatusStore) {
    store.health_phase = store.health_phase.start();
}

/// Apply a resolved liveness request.
pub fn finish_health_check(
    store: &mut StatusStore,
    outcome: &Result<(), ProbeError>,
    response_time_ms: u64,
    checked_at: DateTime<Utc>,
) {
    store.health = HealthStatus::from_probe(outcome, response_time_ms, checked_at);
    store.health_phase = store.health_phase.resolve(outcome.is_ok());
}

/// Mark a provider request as started.
pub fn begin_provider_fetch(store: &mut StatusStore) {
    store.providers = store.providers.begin();
}

/// Apply a resolved provider request.
pub fn finish_provider_fetch(
    store: &mut StatusStore,
    outcome: Result<ProviderProbeResponse, ProbeError>,
    checked_at: DateTime<Utc>,
) {
    store.providers = LlmStatus::complete(outcome, checked_at);
}

/// Replace the in-memory prompt.
pub fn set_prompt(store: &mut StatusStore, prompt: String) {
    store.prompt = prompt;
}

/// Expand `provider`, or collapse it when already open.
pub fn toggle_provider(store: &mut StatusStore, provider: &str) {
    store.expanded = toggle_expanded(store.expanded.as_deref(), provider);
}
