//! Error model shared by both pollers.
//!
//! # Design
//! - Only two failure kinds exist: a non-2xx answer and everything else.
//! - `Display` is the exact text rendered inline in the affected status block.

use thiserror::Error;

/// Failure of a single probe request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase reported by the browser.
        status_text: String,
    },
    /// Network failure, aborted request, or malformed JSON body.
    #[error("{0}")]
    Transport(String),
}

impl ProbeError {
    /// Wrap any transport/decoder failure, keeping its message verbatim.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Whether the failure came from an HTTP status rather than the transport.
    #[must_use]
    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

/// Classify a response status line.
///
/// # Errors
/// Returns [`ProbeError::Http`] for any status outside `200..=299`.
pub fn check_status(status: u16, status_text: &str) -> Result<(), ProbeError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ProbeError::Http {
            status,
            status_text: status_text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_inclusive() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());
        assert!(check_status(299, "").is_ok());
    }

    #[test]
    fn statuses_outside_2xx_carry_the_code() {
        for status in [100, 199, 300, 301, 404, 500, 503, 599] {
            let err = check_status(status, "Nope").expect_err("non-2xx must fail");
            assert!(err.is_http());
            assert!(err.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn http_error_message_matches_status_line() {
        let err = check_status(503, "Service Unavailable").expect_err("503 fails");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn transport_error_keeps_message() {
        let err = ProbeError::transport("Failed to fetch");
        assert!(!err.is_http());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
