// ============================================================================
// Numeric Module
// Exact decimal arithmetic over text
// ============================================================================
//
// This module provides:
// - is_valid / validate: the decimal grammar `[+-]?[0-9]+(\.[0-9]+)?`
// - add: exact signed addition of two certified decimal strings
// - to_approximate: lossy conversion to f64
// - DecimalString: typed certified decimal text
// - NumericError: error types for validation and conversion
//
// Design principles:
// - No fixed-width integers or floats in exact arithmetic
// - Digit-by-digit schoolbook algorithms, unbounded operand length
// - Pure functions: no state, no I/O, inputs borrowed and never mutated
// - Validation happens once, at the edge; the engine trusts its input

mod approximate;
mod arithmetic;
mod decimal_string;
mod digits;
mod errors;
mod grammar;

pub use approximate::to_approximate;
pub use arithmetic::add;
pub use decimal_string::DecimalString;
pub use errors::{NumericError, NumericResult};
pub use grammar::{is_valid, validate};
