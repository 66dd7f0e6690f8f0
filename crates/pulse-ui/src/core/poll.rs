//! Poll cadence and the shared fetch lifecycle.

use chrono::{DateTime, Local, Utc};

/// Interval between liveness probes.
pub const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;
/// Interval between provider probes.
pub const PROVIDER_POLL_INTERVAL_MS: u32 = 120_000;

/// Lifecycle of a poller between ticks.
///
/// There is no terminal state: every tick or manual trigger moves back to
/// [`PollPhase::Loading`]. Completion is applied unconditionally, so when two
/// requests overlap the last one to resolve decides the phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PollPhase {
    /// No request has been issued yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last resolved request succeeded.
    Succeeded,
    /// The last resolved request failed.
    Failed,
}

impl PollPhase {
    /// Transition taken when a request starts.
    #[must_use]
    pub const fn start(self) -> Self {
        Self::Loading
    }

    /// Transition taken when a request resolves.
    #[must_use]
    pub const fn resolve(self, succeeded: bool) -> Self {
        if succeeded {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Local `HH:MM:SS` of the last completed poll, or `"Never"`.
#[must_use]
pub fn format_last_checked(last_checked: Option<DateTime<Utc>>) -> String {
    last_checked.map_or_else(
        || "Never".to_string(),
        |at| at.with_timezone(&Local).format("%H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::{PollPhase, format_last_checked};
    use chrono::Utc;

    #[test]
    fn cycle_repeats_without_terminal_state() {
        let phase = PollPhase::default();
        assert_eq!(phase, PollPhase::Idle);
        let phase = phase.start();
        assert!(phase.is_loading());
        let phase = phase.resolve(true);
        assert_eq!(phase, PollPhase::Succeeded);
        let phase = phase.start().resolve(false);
        assert_eq!(phase, PollPhase::Failed);
        assert!(phase.start().is_loading());
    }

    #[test]
    fn last_checked_formatting() {
        assert_eq!(format_last_checked(None), "Never");
        let rendered = format_last_checked(Some(Utc::now()));
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered.matches(':').count(), 2);
    }
}
