//! Probe outcome and metrics event data models

use crate::types::ProbeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Event kind identifying the probed operation
pub const EVENT_KIND_TCP: &str = "TCP";
/// Event name label for the connect-read-close cycle
pub const EVENT_NAME_CONNECT: &str = "connect";

/// The uniform result of one connect-read-close cycle.
///
/// Exactly one of `payload` and `error` is set; `elapsed_ms` is always
/// present and spans from the instant before the connect attempt to the
/// instant the outcome was finalized, inclusive of any time spent reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Wall-clock time for the whole cycle, in milliseconds
    pub elapsed_ms: f64,

    /// Decoded response text on success
    pub payload: Option<String>,

    /// Failure classification on timeout or socket error
    pub error: Option<ProbeError>,

    /// Timestamp when the outcome was finalized
    pub timestamp: DateTime<Utc>,
}

impl ProbeOutcome {
    /// Create a successful outcome carrying the decoded payload
    pub fn success(elapsed: Duration, payload: String) -> Self {
        Self {
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            payload: Some(payload),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a timed-out outcome
    pub fn timed_out(elapsed: Duration) -> Self {
        Self {
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            payload: None,
            error: Some(ProbeError::Timeout),
            timestamp: Utc::now(),
        }
    }

    /// Create a failed outcome with the given classification
    pub fn failed(elapsed: Duration, error: ProbeError) -> Self {
        Self {
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            payload: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Check if this probe succeeded
    pub fn is_successful(&self) -> bool {
        self.error.is_none()
    }

    /// Length of the received payload, 0 when absent
    pub fn payload_length(&self) -> usize {
        self.payload.as_ref().map(|p| p.len()).unwrap_or(0)
    }
}

/// One self-contained metrics record, emitted exactly once per probe
/// attempt regardless of success or failure, and handed to the
/// [`EventSink`](crate::sink::EventSink) collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsEvent {
    /// Operation kind, always `"TCP"` for this harness
    pub kind: String,

    /// Operation label, always `"connect"` for this harness
    pub name: String,

    /// Elapsed time for the probe in milliseconds
    pub elapsed_ms: f64,

    /// Length of the received payload, 0 on failure
    pub payload_length: usize,

    /// Failure classification, `None` on success
    pub error: Option<ProbeError>,

    /// Timestamp carried over from the probe outcome
    pub timestamp: DateTime<Utc>,
}

impl MetricsEvent {
    /// Translate a probe outcome into its metrics event
    pub fn from_outcome(outcome: &ProbeOutcome) -> Self {
        Self {
            kind: EVENT_KIND_TCP.to_string(),
            name: EVENT_NAME_CONNECT.to_string(),
            elapsed_ms: outcome.elapsed_ms,
            payload_length: outcome.payload_length(),
            error: outcome.error.clone(),
            timestamp: outcome.timestamp,
        }
    }

    /// Check if this event records a successful probe
    pub fn is_successful(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_has_payload_and_no_error() {
        let outcome = ProbeOutcome::success(Duration::from_millis(12), "1.2.3.4:56789".to_string());
        assert!(outcome.is_successful());
        assert!(outcome.error.is_none());
        assert_eq!(outcome.payload_length(), 13);
        assert!(outcome.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_timed_out_outcome_has_no_payload() {
        let outcome = ProbeOutcome::timed_out(Duration::from_secs(5));
        assert!(!outcome.is_successful());
        assert_eq!(outcome.payload, None);
        assert_eq!(outcome.error, Some(ProbeError::Timeout));
        assert_eq!(outcome.payload_length(), 0);
    }

    #[test]
    fn test_failed_outcome_carries_detail() {
        let outcome = ProbeOutcome::failed(
            Duration::from_millis(3),
            ProbeError::Connection("connection refused".to_string()),
        );
        assert!(!outcome.is_successful());
        assert_eq!(
            outcome.error,
            Some(ProbeError::Connection("connection refused".to_string()))
        );
    }

    #[test]
    fn test_event_from_successful_outcome() {
        let outcome = ProbeOutcome::success(Duration::from_millis(42), "1.2.3.4:56789".to_string());
        let event = MetricsEvent::from_outcome(&outcome);

        assert_eq!(event.kind, "TCP");
        assert_eq!(event.name, "connect");
        assert_eq!(event.payload_length, 13);
        assert!(event.error.is_none());
        assert!(event.is_successful());
        assert_eq!(event.elapsed_ms, outcome.elapsed_ms);
    }

    #[test]
    fn test_event_from_failed_outcome() {
        let outcome = ProbeOutcome::timed_out(Duration::from_secs(5));
        let event = MetricsEvent::from_outcome(&outcome);

        assert_eq!(event.payload_length, 0);
        assert_eq!(event.error, Some(ProbeError::Timeout));
        assert!(!event.is_successful());
    }

    #[test]
    fn test_event_serializes_to_json() {
        let outcome = ProbeOutcome::success(Duration::from_millis(10), "ok".to_string());
        let event = MetricsEvent::from_outcome(&outcome);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains("\"kind\":\"TCP\""));
        assert!(json.contains("\"name\":\"connect\""));
        assert!(json.contains("\"payload_length\":2"));
    }
}
