// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod line_source;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, ReaderEvent};
pub use line_source::{LineSource, SourceError};
