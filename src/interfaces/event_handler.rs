// ============================================================================
// Event Handler Interface
// Defines the contract for observing the decimal reader
// ============================================================================

use crate::numeric::{DecimalString, NumericError};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the decimal reader, one per input line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ReaderEvent {
    /// Line certified as a decimal
    LineAccepted {
        line_number: usize,
        value: DecimalString,
    },

    /// Line failed validation
    LineRejected {
        line_number: usize,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
        error: NumericError,
    },

    /// Line skipped by configuration (blank or comment)
    LineIgnored { line_number: usize },
}

#[cfg(feature = "serde")]
fn serialize_display<S: serde::Serializer>(
    error: &NumericError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Event handler trait for processing reader events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a reader event
    fn on_event(&self, event: ReaderEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ReaderEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ReaderEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ReaderEvent) {
        match &event {
            ReaderEvent::LineRejected { line_number, error } => {
                tracing::debug!(line_number, %error, "Decimal reader rejected line");
            },
            _ => tracing::debug!("Decimal reader event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<ReaderEvent>>);

    impl EventHandler for Recording {
        fn on_event(&self, event: ReaderEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ReaderEvent::LineIgnored { line_number: 1 });
        // Should not panic
    }

    #[test]
    fn test_logging_handler_accepts_all_events() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            ReaderEvent::LineIgnored { line_number: 1 },
            ReaderEvent::LineRejected {
                line_number: 2,
                error: NumericError::Empty,
            },
        ]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let handler = Recording(Mutex::new(Vec::new()));
        handler.on_events(vec![
            ReaderEvent::LineIgnored { line_number: 1 },
            ReaderEvent::LineIgnored { line_number: 2 },
        ]);
        let seen = handler.0.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ReaderEvent::LineIgnored { line_number: 1 },
                ReaderEvent::LineIgnored { line_number: 2 },
            ]
        );
    }
}
