//! Tokenizing utilities for ARFF lines
//!
//! Stateless helpers shared by the header scanner, the dataset generator
//! and the summary pass.

use crate::format::constants::{MISSING_VALUE, TRIM_CHARS};
use alloc::vec::Vec;

/// Strip whitespace and single quotes from both ends of a token
pub fn trim(source: &str) -> &str {
    source.trim_matches(TRIM_CHARS)
}

/// Split a line on `delimiter` and trim every token
///
/// A trailing delimiter does not produce a trailing empty token and an
/// empty line produces no tokens at all.
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix(delimiter).unwrap_or(text);
    body.split(delimiter).map(trim).collect()
}

/// Check whether a line holds a `?` outside of any quoted span
///
/// A quoted span opens on `'` or `"` and closes only on the same
/// character. An unterminated quote simply runs to the end of the line.
pub fn contains_missing_value(line: &str) -> bool {
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == MISSING_VALUE => return true,
            Some(open) if c == open => quote = None,
            _ => {}
        }
    }
    false
}

/// Parse the longest prefix of `token` that reads as an `f32`
///
/// Accepts an optional sign, decimal digits with an optional fraction and
/// exponent, `0x` hexadecimal floats with an optional binary exponent, and
/// `inf`, `infinity` or `nan` in any case. Trailing characters after the
/// numeric prefix are ignored. Returns `None` when no prefix parses or when
/// a finite literal is out of the `f32` range.
pub fn parse_float_prefix(token: &str) -> Option<f32> {
    let token = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let value = if let Some(special) = parse_special(rest) {
        special
    } else {
        let value = match rest.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => parse_hex(&rest[2..]),
            _ => parse_decimal(rest)?,
        };
        if value.is_infinite() {
            return None;
        }
        value
    };

    Some(if negative { -value } else { value })
}

fn parse_special(rest: &str) -> Option<f32> {
    let starts_with = |word: &str| {
        rest.get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
    };
    if starts_with("inf") {
        Some(f32::INFINITY)
    } else if starts_with("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn parse_decimal(rest: &str) -> Option<f32> {
    let bytes = rest.as_bytes();
    let integer = digit_run(bytes, 0);
    let mut len = integer;

    let mut fraction = 0;
    if bytes.get(len) == Some(&b'.') {
        fraction = digit_run(bytes, len + 1);
        if integer > 0 || fraction > 0 {
            len += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+' | b'-')));
        let exponent = digit_run(bytes, len + 1 + sign);
        if exponent > 0 {
            len += 1 + sign + exponent;
        }
    }

    rest[..len].parse::<f32>().ok()
}

/// Hexadecimal significand with an optional `p` exponent, `0x` already
/// consumed. No digits after `0x` reads as the leading `0`.
fn parse_hex(rest: &str) -> f32 {
    let bytes = rest.as_bytes();
    let mut mantissa = 0f64;
    let mut exponent: i32 = 0;
    let mut pos = 0;

    while let Some(digit) = bytes.get(pos).and_then(|&b| char::from(b).to_digit(16)) {
        mantissa = mantissa * 16.0 + f64::from(digit);
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(digit) = bytes.get(pos).and_then(|&b| char::from(b).to_digit(16)) {
            mantissa = mantissa * 16.0 + f64::from(digit);
            exponent -= 4;
            pos += 1;
        }
    }

    if matches!(bytes.get(pos), Some(b'p' | b'P')) {
        let negative = bytes.get(pos + 1) == Some(&b'-');
        let sign = usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let start = pos + 1 + sign;
        let digits = digit_run(bytes, start);
        if digits > 0 {
            let value = bytes[start..start + digits]
                .iter()
                .fold(0i32, |acc, &b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
            exponent = if negative {
                exponent.saturating_sub(value)
            } else {
                exponent.saturating_add(value)
            };
        }
    }

    if mantissa == 0.0 {
        return 0.0;
    }
    let mut scaled = mantissa;
    for _ in 0..exponent.unsigned_abs().min(2200) {
        if exponent > 0 {
            scaled *= 2.0;
        } else {
            scaled /= 2.0;
        }
    }
    scaled as f32
}
