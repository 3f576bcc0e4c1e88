// ============================================================================
// Numeric Errors
// Error types for decimal validation and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while certifying or converting decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input was the empty string
    Empty,
    /// A character outside the grammar, or a grammar character out of place
    UnexpectedCharacter {
        /// Byte offset of the offending character
        position: usize,
        /// The offending character
        found: char,
    },
    /// No digit before the decimal point (e.g. `".5"`, `"-"`)
    MissingIntegerDigits,
    /// A decimal point with no digit after it (e.g. `"1."`)
    MissingFractionDigits,
    /// Value exceeds the range of the conversion target
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "invalid decimal: empty input"),
            NumericError::UnexpectedCharacter { position, found } => {
                write!(
                    f,
                    "invalid decimal: unexpected character {:?} at byte {}",
                    found, position
                )
            },
            NumericError::MissingIntegerDigits => {
                write!(f, "invalid decimal: integer part requires at least one digit")
            },
            NumericError::MissingFractionDigits => write!(
                f,
                "invalid decimal: decimal point must be followed by at least one digit"
            ),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the target range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::UnexpectedCharacter {
                position: 2,
                found: 'x'
            }
            .to_string(),
            "invalid decimal: unexpected character 'x' at byte 2"
        );
        assert_eq!(
            NumericError::Empty.to_string(),
            "invalid decimal: empty input"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(
            NumericError::MissingIntegerDigits,
            NumericError::MissingFractionDigits
        );
    }
}
