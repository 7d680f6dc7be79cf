use memchr::memchr;

use crate::error::{AggregateError, Result};

// Integers below 2^53 and these powers of ten are exact in an f64, so one
// division gives the correctly rounded value.
const MAX_EXACT_DIGITS: usize = 15;
const POW10: [f64; MAX_EXACT_DIGITS + 1] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

/// Parses `-?[0-9]+(\.[0-9]+)?` straight from the record bytes.
pub fn parse_measurement(text: &[u8]) -> Result<f64> {
    match text.split_first() {
        Some((b'-', digits)) => parse_measurement_pos(digits, text).map(|value| -value),
        _ => parse_measurement_pos(text, text),
    }
}

fn parse_measurement_pos(digits: &[u8], text: &[u8]) -> Result<f64> {
    let (integer, fraction) = match memchr(b'.', digits) {
        Some(dot) if dot + 1 < digits.len() => (&digits[..dot], &digits[dot + 1..]),
        Some(_) => return Err(invalid(text)),
        None => (digits, &digits[digits.len()..]),
    };
    if integer.is_empty()
        || !integer.iter().all(u8::is_ascii_digit)
        || !fraction.iter().all(u8::is_ascii_digit)
    {
        return Err(invalid(text));
    }
    if integer.len() + fraction.len() > MAX_EXACT_DIGITS {
        // already validated as ASCII digits and at most one dot
        return std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| invalid(text));
    }
    let mantissa = integer
        .iter()
        .chain(fraction)
        .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));
    Ok(mantissa as f64 / POW10[fraction.len()])
}

fn invalid(text: &[u8]) -> AggregateError {
    AggregateError::InvalidMeasurement {
        text: String::from_utf8_lossy(text).into_owned(),
    }
}
