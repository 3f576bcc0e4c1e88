// ============================================================================
// Text Decimal Library
// Exact signed decimal addition over text, without binary floating point
// ============================================================================

//! # Text Decimal
//!
//! Exact arithmetic over decimal numbers kept as text.
//!
//! ## Features
//!
//! - **Strict grammar** `[+-]?[0-9]+(\.[0-9]+)?`, checked once at the edge
//! - **Exact signed addition** of unbounded-length decimals, digit by digit
//! - **Normalized results**: no trailing fraction zeros, no `"-0"`
//! - **Lossy `f64` conversion** when an approximation is acceptable
//! - **Line reader** turning text sources into certified decimals
//! - **Parallel exact summation** over scoped threads
//!
//! ## Example
//!
//! ```rust
//! use text_decimal::prelude::*;
//!
//! assert!(is_valid("-3.5"));
//! assert!(!is_valid("1."));
//!
//! assert_eq!(add("10", "-3.5"), "6.5");
//! assert_eq!(add("999", "1"), "1000");
//! assert_eq!(add("5", "-5"), "0");
//!
//! let a: DecimalString = "0.1".parse().unwrap();
//! let b: DecimalString = "0.2".parse().unwrap();
//! assert_eq!((&a + &b).as_str(), "0.3");
//! assert!((to_approximate("0.3") - 0.3).abs() < 1e-12);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{InvalidLinePolicy, ReaderConfig};
    pub use crate::engine::{
        par_sum, sum, Accumulator, DecimalReader, ParsedLine, ReadError, ReadReport, RejectedLine,
    };
    pub use crate::interfaces::{
        EventHandler, LineSource, LoggingEventHandler, NoOpEventHandler, ReaderEvent, SourceError,
    };
    pub use crate::numeric::{
        add, is_valid, to_approximate, validate, DecimalString, NumericError, NumericResult,
    };
    pub use crate::utils::{FileLineSource, InMemoryLineSource};
}
