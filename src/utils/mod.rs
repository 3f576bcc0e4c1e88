// ============================================================================
// Utilities Module
// Line source implementations for feeding the decimal reader
// ============================================================================

mod file_lines;

pub use file_lines::{load_lines, FileLineSource, InMemoryLineSource};

#[cfg(feature = "async")]
pub use file_lines::load_lines_async;
