use memchr::memchr2;

use crate::constants::{
    is_keyword, is_primitive_byte, is_primitive_start, is_primitive_terminator, is_whitespace,
};
use crate::{Error, ErrorKind, ParseOptions, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Colon,
    Comma,
    Null,
    Boolean,
    Number,
    String,
}

impl TokenKind {
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::Null | TokenKind::Boolean | TokenKind::Number | TokenKind::String
        )
    }

    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::ObjectStart => "`{`",
            TokenKind::ObjectEnd => "`}`",
            TokenKind::ArrayStart => "`[`",
            TokenKind::ArrayEnd => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Null => "null",
            TokenKind::Boolean => "boolean",
            TokenKind::Number => "number",
            TokenKind::String => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A classified lexeme borrowed from the source buffer.
///
/// String tokens exclude the surrounding quotes and keep escape sequences verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub offset: usize,
    pub lexeme: &'a [u8],
}

impl<'a> Token<'a> {
    pub fn span(&self) -> Span {
        Span {
            start: self.offset,
            end: self.offset + self.lexeme.len(),
        }
    }
}

/// Split `input` into tokens in a single forward pass.
pub fn tokenize<'a>(input: &'a [u8], options: &ParseOptions) -> Result<Vec<Token<'a>>> {
    Scanner::new(input, options.strict).scan_all()
}

struct Scanner<'a> {
    input: &'a [u8],
    position: usize,
    strict: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8], strict: bool) -> Self {
        Self {
            input,
            position: 0,
            strict,
        }
    }

    fn scan_all(mut self) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::with_capacity(self.input.len() / 4);
        while let Some(&byte) = self.input.get(self.position) {
            let token = match byte {
                b'{' => self.punctuation(TokenKind::ObjectStart),
                b'}' => self.punctuation(TokenKind::ObjectEnd),
                b'[' => self.punctuation(TokenKind::ArrayStart),
                b']' => self.punctuation(TokenKind::ArrayEnd),
                b':' => self.punctuation(TokenKind::Colon),
                b',' => self.punctuation(TokenKind::Comma),
                b'"' => self.scan_string()?,
                _ if is_whitespace(byte) => {
                    self.position += 1;
                    continue;
                }
                _ if is_primitive_start(byte) => self.scan_primitive()?,
                _ => {
                    return Err(Error::tokenize(
                        ErrorKind::UnexpectedCharacter,
                        self.position,
                        format!("unexpected {}", describe_byte(byte)),
                    ))
                }
            };
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn punctuation(&mut self, kind: TokenKind) -> Token<'a> {
        let offset = self.position;
        self.position += 1;
        Token {
            kind,
            offset,
            lexeme: &self.input[offset..self.position],
        }
    }

    fn scan_string(&mut self) -> Result<Token<'a>> {
        let quote = self.position;
        let start = quote + 1;
        let mut idx = start;
        loop {
            let rest = &self.input[idx..];
            let Some(found) = memchr2(b'"', b'\\', rest) else {
                self.check_control_bytes(idx, rest)?;
                return Err(Error::tokenize(
                    ErrorKind::UnterminatedString,
                    quote,
                    "string is missing its closing quote",
                ));
            };
            self.check_control_bytes(idx, &rest[..found])?;
            idx += found;
            if self.input[idx] == b'"' {
                self.position = idx + 1;
                return Ok(Token {
                    kind: TokenKind::String,
                    offset: start,
                    lexeme: &self.input[start..idx],
                });
            }
            idx = self.scan_escape(quote, idx)?;
        }
    }

    /// Validates the escape starting at `backslash` and returns the index just past it.
    fn scan_escape(&self, quote: usize, backslash: usize) -> Result<usize> {
        let unterminated = || {
            Error::tokenize(
                ErrorKind::UnterminatedString,
                quote,
                "string ends inside an escape sequence",
            )
        };
        let symbol_idx = backslash + 1;
        let Some(&symbol) = self.input.get(symbol_idx) else {
            return Err(unterminated());
        };
        match symbol {
            b'"' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't' => Ok(symbol_idx + 1),
            b'u' => {
                let digits = symbol_idx + 1;
                for idx in digits..digits + 4 {
                    match self.input.get(idx) {
                        Some(byte) if byte.is_ascii_hexdigit() => {}
                        Some(&byte) => {
                            return Err(Error::tokenize(
                                ErrorKind::StringInvalidHexCharacter,
                                idx,
                                format!(
                                    "expected hex digit in \\u escape, found {}",
                                    describe_byte(byte)
                                ),
                            ))
                        }
                        None => return Err(unterminated()),
                    }
                }
                Ok(digits + 4)
            }
            _ => Err(Error::tokenize(
                ErrorKind::StringUnexpectedSymbol,
                symbol_idx,
                format!("invalid escape \\{}", describe_byte(symbol)),
            )),
        }
    }

    fn check_control_bytes(&self, base: usize, segment: &[u8]) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        match segment.iter().position(|&byte| byte < 0x20) {
            Some(pos) => Err(Error::tokenize(
                ErrorKind::StringUnexpectedSymbol,
                base + pos,
                format!("unescaped control character {}", describe_byte(segment[pos])),
            )),
            None => Ok(()),
        }
    }

    /// Scans `null`, `true`, `false` or a number lexeme. The terminator is left unconsumed.
    fn scan_primitive(&mut self) -> Result<Token<'a>> {
        let start = self.position;
        let kind = match self.input[start] {
            b'n' => TokenKind::Null,
            b't' | b'f' => TokenKind::Boolean,
            _ => TokenKind::Number,
        };

        let mut idx = start;
        while let Some(&byte) = self.input.get(idx) {
            if is_primitive_terminator(byte) {
                break;
            }
            if !is_primitive_byte(byte) {
                return Err(Error::tokenize(
                    ErrorKind::InvalidPrimitive,
                    idx,
                    format!("unexpected {} in primitive", describe_byte(byte)),
                ));
            }
            idx += 1;
        }

        let lexeme = &self.input[start..idx];
        if self.strict && !literal_matches(kind, lexeme) {
            return Err(Error::tokenize(
                ErrorKind::InvalidPrimitive,
                start,
                format!("unknown literal `{}`", String::from_utf8_lossy(lexeme)),
            ));
        }

        self.position = idx;
        Ok(Token {
            kind,
            offset: start,
            lexeme,
        })
    }
}

/// The first byte already fixed `kind`, so a keyword match is an exact literal.
fn literal_matches(kind: TokenKind, lexeme: &[u8]) -> bool {
    match kind {
        TokenKind::Null | TokenKind::Boolean => is_keyword(lexeme),
        _ => true,
    }
}

fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("`{}`", byte as char)
    } else {
        format!("byte 0x{byte:02x}")
    }
}
