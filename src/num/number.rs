use crate::{Error, ErrorKind, Result};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Convert a number lexeme into `f64`.
///
/// The lexeme must match `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` in full and
/// stay within `f64` range.
pub fn parse_number(lexeme: &[u8], offset: usize) -> Result<f64> {
    if let Some(at) = grammar_violation(lexeme) {
        return Err(Error::build(
            ErrorKind::InvalidNumber,
            offset + at,
            format!("malformed number `{}`", String::from_utf8_lossy(lexeme)),
        ));
    }
    // The grammar check guarantees ASCII.
    let text = std::str::from_utf8(lexeme).map_err(|_| {
        Error::build(ErrorKind::InvalidNumber, offset, "number is not ASCII")
    })?;
    let value: f64 = text.parse().map_err(|_| {
        Error::build(
            ErrorKind::InvalidNumber,
            offset,
            format!("cannot convert `{text}`"),
        )
    })?;
    if !value.is_finite() {
        return Err(Error::build(
            ErrorKind::InvalidNumber,
            offset,
            format!("`{text}` is out of range"),
        ));
    }
    Ok(value)
}

/// Index of the first byte that breaks the JSON number grammar, if any.
fn grammar_violation(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = skip_digits(bytes, i),
        _ => return Some(i),
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let end = skip_digits(bytes, i);
        if end == i {
            return Some(i);
        }
        i = end;
    }

    if let Some(b'e' | b'E') = bytes.get(i) {
        i += 1;
        if let Some(b'+' | b'-') = bytes.get(i) {
            i += 1;
        }
        let end = skip_digits(bytes, i);
        if end == i {
            return Some(i);
        }
        i = end;
    }

    (i < bytes.len()).then_some(i)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Whether `value` prints in integer form without losing information. `-0.0` does not.
pub fn is_exact_integer(value: f64) -> bool {
    value.fract() == 0.0
        && value.abs() <= MAX_EXACT_INT
        && !(value == 0.0 && value.is_sign_negative())
}

/// Append the shortest JSON text for `value`; non-finite values render as `null`.
pub fn format_number_into(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    if is_exact_integer(value) {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(value as i64));
        return;
    }
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format_finite(value));
}
