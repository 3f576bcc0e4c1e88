// ============================================================================
// Domain Models Module
// Configuration value objects
// ============================================================================

pub mod config;

pub use config::{InvalidLinePolicy, ReaderConfig};
