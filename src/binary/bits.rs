//! Binary-string to integer conversion.
//!
//! The USCC moves numbers around as text. Two conventions meet here:
//! - raw instruction field slices: unsigned, fixed width, no prefix
//!   (`"0000000101"` is 5)
//! - formatted values: `0b`-prefixed with a leading `-` for negatives
//!   (`"-0b101"` is -5), the form the calculator historically used for
//!   results
//!
//! [`parse_bits`] accepts both, so anything [`format_bits`] produces can
//! be read back. Everywhere else in the crate numbers are native `i64`;
//! conversion happens only at this boundary.

use thiserror::Error;

/// Parse a binary string as a signed integer.
///
/// Accepts an optional leading `-` sign and an optional `0b` prefix.
pub fn parse_bits(s: &str) -> Result<i64, ParseBitsError> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits = rest.strip_prefix("0b").unwrap_or(rest);

    if digits.is_empty() {
        return Err(ParseBitsError::Empty);
    }

    // Accumulate on the signed side so i64::MIN parses without overflow.
    let mut value: i64 = 0;
    for c in digits.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => return Err(ParseBitsError::InvalidDigit(other)),
        };
        value = value
            .checked_mul(2)
            .and_then(|v| {
                if negative {
                    v.checked_sub(bit)
                } else {
                    v.checked_add(bit)
                }
            })
            .ok_or(ParseBitsError::Overflow)?;
    }

    Ok(value)
}

/// Format an integer as sign-prefixed textual binary.
///
/// Non-negative values are `0b...`, negatives `-0b...`:
/// `5` -> `"0b101"`, `-5` -> `"-0b101"`, `0` -> `"0b0"`.
pub fn format_bits(value: i64) -> String {
    if value < 0 {
        format!("-0b{:b}", value.unsigned_abs())
    } else {
        format!("0b{:b}", value)
    }
}

/// Errors that can occur when parsing a binary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBitsError {
    #[error("empty binary string")]
    Empty,

    #[error("invalid binary digit: {0:?}")]
    InvalidDigit(char),

    #[error("binary value out of range")]
    Overflow,
}
