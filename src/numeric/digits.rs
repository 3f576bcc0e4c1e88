// ============================================================================
// Unsigned Digit Sequences
// Schoolbook add/sub/compare over ASCII digit strings, most significant first
// ============================================================================
//
// Every function here takes digit-only input (no sign, no point) and never
// converts to a fixed-width integer, so operand length is unbounded.
// Results are accumulated least-significant digit first and reversed once.

use std::cmp::Ordering;

/// Strip leading zeros, keeping at least one digit.
///
/// `"007"` -> `"7"`, `"000"` -> `"0"`.
#[inline]
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

/// Sum of two unsigned digit sequences.
///
/// Output length is at most `max(a.len(), b.len()) + 1`.
pub(crate) fn unsigned_add(a: &str, b: &str) -> String {
    let mut lhs = a.bytes().rev();
    let mut rhs = b.bytes().rev();
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;

    loop {
        let (x, y) = (lhs.next(), rhs.next());
        if x.is_none() && y.is_none() {
            break;
        }
        let sum = digit(x) + digit(y) + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }

    from_reversed(&out)
}

/// Difference `a - b` of two unsigned digit sequences, leading zeros stripped.
///
/// Requires `a >= b`; checked in debug builds.
pub(crate) fn unsigned_sub(a: &str, b: &str) -> String {
    debug_assert!(
        unsigned_cmp(a, b) != Ordering::Less,
        "unsigned_sub requires minuend >= subtrahend: {a} - {b}"
    );

    let mut rhs = b.bytes().rev();
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u8;

    for x in a.bytes().rev() {
        let subtrahend = digit(rhs.next()) + borrow;
        let minuend = x - b'0';
        if minuend < subtrahend {
            out.push(b'0' + minuend + 10 - subtrahend);
            borrow = 1;
        } else {
            out.push(b'0' + minuend - subtrahend);
            borrow = 0;
        }
    }

    let result = from_reversed(&out);
    strip_leading_zeros(&result).to_string()
}

/// Compare two unsigned digit sequences by value.
///
/// Leading zeros are ignored, so `"007"` equals `"7"`.
pub(crate) fn unsigned_cmp(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    // Same length and no leading zeros: byte order is numeric order
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[inline]
fn digit(byte: Option<u8>) -> u8 {
    byte.map_or(0, |b| b - b'0')
}

fn from_reversed(digits: &[u8]) -> String {
    digits.iter().rev().map(|&b| char::from(b)).collect()
}
