use memchr::memchr;

use crate::{Error, ErrorKind, Result};

/// Materialize a string token's lexeme into owned text, decoding JSON escapes.
///
/// `offset` is the lexeme's position in the source buffer and is only used for error
/// locations.
pub fn decode_string(lexeme: &[u8], offset: usize) -> Result<String> {
    if memchr(b'\\', lexeme).is_none() {
        return utf8_to_string(lexeme.to_vec(), offset);
    }

    let mut out = Vec::with_capacity(lexeme.len());
    let mut idx = 0;
    while idx < lexeme.len() {
        let Some(found) = memchr(b'\\', &lexeme[idx..]) else {
            out.extend_from_slice(&lexeme[idx..]);
            break;
        };
        out.extend_from_slice(&lexeme[idx..idx + found]);
        idx += found;
        idx = unescape_at(lexeme, idx, offset, &mut out)?;
    }
    utf8_to_string(out, offset)
}

/// Decode the escape starting at the backslash at `idx`, returning the index just past it.
fn unescape_at(lexeme: &[u8], idx: usize, offset: usize, out: &mut Vec<u8>) -> Result<usize> {
    let symbol = lexeme.get(idx + 1).copied();
    let simple = match symbol {
        Some(b'"') => b'"',
        Some(b'\\') => b'\\',
        Some(b'/') => b'/',
        Some(b'b') => 0x08,
        Some(b'f') => 0x0c,
        Some(b'n') => b'\n',
        Some(b'r') => b'\r',
        Some(b't') => b'\t',
        Some(b'u') => return unescape_unicode(lexeme, idx, offset, out),
        _ => {
            return Err(Error::build(
                ErrorKind::InvalidString,
                offset + idx,
                "malformed escape sequence",
            ))
        }
    };
    out.push(simple);
    Ok(idx + 2)
}

fn unescape_unicode(lexeme: &[u8], idx: usize, offset: usize, out: &mut Vec<u8>) -> Result<usize> {
    let invalid = |at: usize, message: &str| {
        Error::build(ErrorKind::InvalidString, offset + at, message.to_string())
    };

    let high = read_hex4(lexeme, idx + 2).ok_or_else(|| invalid(idx, "malformed \\u escape"))?;
    let mut next = idx + 6;
    let code_point = match high {
        0xD800..=0xDBFF => {
            if lexeme.get(next) != Some(&b'\\') || lexeme.get(next + 1) != Some(&b'u') {
                return Err(invalid(idx, "unpaired high surrogate"));
            }
            let low = read_hex4(lexeme, next + 2)
                .ok_or_else(|| invalid(next, "malformed \\u escape"))?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(invalid(next, "high surrogate not followed by low surrogate"));
            }
            next += 6;
            0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(invalid(idx, "unpaired low surrogate")),
        _ => u32::from(high),
    };

    let ch = char::from_u32(code_point).ok_or_else(|| invalid(idx, "invalid code point"))?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    Ok(next)
}

fn read_hex4(lexeme: &[u8], start: usize) -> Option<u16> {
    let digits = lexeme.get(start..start + 4)?;
    digits.iter().try_fold(0u16, |acc, &byte| {
        let digit = (byte as char).to_digit(16)?;
        Some((acc << 4) | digit as u16)
    })
}

fn utf8_to_string(bytes: Vec<u8>, offset: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|err| {
        let valid_up_to = err.utf8_error().valid_up_to();
        Error::build(
            ErrorKind::InvalidString,
            offset + valid_up_to,
            "string is not valid UTF-8",
        )
    })
}

/// Append `value` to `out` as the body of a JSON string literal.
pub fn escape_string_into(out: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let escaped = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        if escaped.is_empty() {
            out.push_str(&format!("\\u{:04x}", byte));
        } else {
            out.push_str(escaped);
        }
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}
