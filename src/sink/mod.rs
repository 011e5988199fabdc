//! Event sink interface and bundled implementations
//!
//! The sink is the single boundary between the harness core and the
//! surrounding reporting framework: one `record` call per probe attempt,
//! success or failure. Sinks must tolerate concurrent delivery from
//! multiple simulated clients; every event is a self-contained immutable
//! record, so no cross-event state is required.

use crate::logging::LoggerHandle;
use crate::models::MetricsEvent;
use std::sync::Mutex;

/// Consumer of per-probe metrics events
pub trait EventSink: Send + Sync {
    /// Record one metrics event. Called exactly once per probe attempt.
    fn record(&self, event: MetricsEvent);
}

/// Sink that writes one log line per event through the injected logger.
/// Successful probes log at info level, failed probes at warn.
pub struct LoggingSink {
    logger: LoggerHandle,
}

impl LoggingSink {
    pub fn new(logger: LoggerHandle) -> Self {
        Self { logger }
    }
}

impl EventSink for LoggingSink {
    fn record(&self, event: MetricsEvent) {
        match &event.error {
            None => {
                self.logger.info(&format!(
                    "{} {} ok: {:.1}ms, {} bytes",
                    event.kind, event.name, event.elapsed_ms, event.payload_length
                ));
            }
            Some(error) => {
                self.logger.warn(&format!(
                    "{} {} failed [{}]: {} ({:.1}ms)",
                    event.kind,
                    event.name,
                    error.category(),
                    error,
                    event.elapsed_ms
                ));
            }
        }
    }
}

/// Sink that collects events in memory. Used by tests and by embedders
/// that want to drain events after a run.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<MetricsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events recorded so far
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all recorded events, leaving the sink empty
    pub fn drain(&self) -> Vec<MetricsEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<MetricsEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: MetricsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProbeOutcome;
    use std::sync::Arc;
    use std::time::Duration;

    fn sample_event() -> MetricsEvent {
        let outcome = ProbeOutcome::success(Duration::from_millis(5), "ping".to_string());
        MetricsEvent::from_outcome(&outcome)
    }

    #[test]
    fn test_memory_sink_collects_events() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(sample_event());
        sink.record(sample_event());

        assert_eq!(sink.len(), 2);
        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_concurrent_delivery() {
        let sink = Arc::new(MemorySink::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let sink = sink.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    sink.record(sample_event());
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 8 * 50);
        // Every event survived delivery intact
        for event in sink.events() {
            assert_eq!(event.kind, "TCP");
            assert_eq!(event.payload_length, 4);
        }
    }
}
