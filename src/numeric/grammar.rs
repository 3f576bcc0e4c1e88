// ============================================================================
// Decimal Grammar
// Validation of `[+-]?[0-9]+(\.[0-9]+)?` tokens
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Returns `true` if `token` is a decimal accepted by the arithmetic engine.
///
/// Accepted: an optional leading `+` or `-`, one or more digits, then
/// optionally a `.` followed by one or more digits. Whitespace is never
/// trimmed. Never panics.
///
/// # Example
/// ```
/// use text_decimal::numeric::is_valid;
///
/// assert!(is_valid("-12.50"));
/// assert!(!is_valid("1."));
/// assert!(!is_valid(" 1"));
/// ```
#[inline]
pub fn is_valid(token: &str) -> bool {
    validate(token).is_ok()
}

/// Validate `token` against the decimal grammar, reporting the first problem.
///
/// # Errors
/// - `Empty` for the empty string
/// - `MissingIntegerDigits` when no digit precedes the point (`"+"`, `".5"`)
/// - `MissingFractionDigits` for a trailing bare point (`"1."`)
/// - `UnexpectedCharacter` for anything else out of place
pub fn validate(token: &str) -> NumericResult<()> {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return Err(NumericError::Empty);
    }

    let mut pos = match bytes[0] {
        b'+' | b'-' => 1,
        _ => 0,
    };

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    if pos == int_start {
        return match bytes.get(pos) {
            None | Some(b'.') => Err(NumericError::MissingIntegerDigits),
            Some(_) => Err(unexpected(token, pos)),
        };
    }

    match bytes.get(pos) {
        None => return Ok(()),
        Some(b'.') => pos += 1,
        Some(_) => return Err(unexpected(token, pos)),
    }

    let frac_start = pos;
    pos += count_digits(&bytes[pos..]);
    if pos == frac_start && pos == bytes.len() {
        return Err(NumericError::MissingFractionDigits);
    }
    if pos != bytes.len() {
        return Err(unexpected(token, pos));
    }

    Ok(())
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Everything before `pos` is ASCII, so `pos` is a char boundary.
fn unexpected(token: &str, pos: usize) -> NumericError {
    let found = token[pos..].chars().next().unwrap_or('\u{FFFD}');
    NumericError::UnexpectedCharacter {
        position: pos,
        found,
    }
}
