pub const KEYWORDS: &[&str] = &["null", "true", "false"];

pub const MAX_DEPTH: usize = 256;

#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\r' | b'\n' | b' ')
}

/// Bytes that end a primitive lexeme without being part of it.
#[inline]
pub fn is_primitive_terminator(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b']' | b'}')
}

#[inline]
pub fn is_primitive_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
}

#[inline]
pub fn is_primitive_start(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'-' | b't' | b'f' | b'n')
}

#[inline]
pub fn is_keyword(s: &[u8]) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.as_bytes() == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_is_primitive_terminator() {
        for byte in [b'\t', b'\r', b'\n', b' ', b',', b']', b'}'] {
            assert!(is_primitive_terminator(byte));
        }
        assert!(!is_primitive_terminator(b':'));
        assert!(!is_primitive_terminator(b'{'));
        assert!(!is_primitive_terminator(b'"'));
    }

    #[rstest::rstest]
    fn test_is_primitive_start() {
        assert!(is_primitive_start(b'-'));
        assert!(is_primitive_start(b'7'));
        assert!(is_primitive_start(b'n'));
        assert!(!is_primitive_start(b'+'));
        assert!(!is_primitive_start(b'N'));
        assert!(!is_primitive_start(b'.'));
    }

    #[rstest::rstest]
    fn test_is_keyword() {
        assert!(is_keyword(b"null"));
        assert!(is_keyword(b"true"));
        assert!(is_keyword(b"false"));
        assert!(!is_keyword(b"nul"));
        assert!(!is_keyword(b"True"));
    }
}
