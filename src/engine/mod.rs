// ============================================================================
// Engine Module
// Orchestration over the numeric core: reading lines and exact summation
// ============================================================================

mod accumulator;
mod reader;

pub use accumulator::{par_sum, sum, Accumulator};
pub use reader::{DecimalReader, ParsedLine, ReadError, ReadReport, RejectedLine};
