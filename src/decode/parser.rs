use crate::num::parse_number;
use crate::text::decode_string;
use crate::types::{Map, Value};
use crate::{Error, ErrorKind, ParseOptions, Result};

use super::scanner::{Token, TokenKind};

/// Assemble the value tree for a token sequence produced from a buffer of `input_len` bytes.
pub fn build_tree(tokens: &[Token<'_>], input_len: usize, options: &ParseOptions) -> Result<Value> {
    let mut builder = TreeBuilder {
        tokens,
        cursor: 0,
        input_len,
        depth: 0,
        max_depth: options.max_depth,
    };
    builder.build_document()
}

struct TreeBuilder<'t, 'a> {
    tokens: &'t [Token<'a>],
    cursor: usize,
    input_len: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t, 'a> TreeBuilder<'t, 'a> {
    fn build_document(&mut self) -> Result<Value> {
        let Some(root) = self.next() else {
            return Err(Error::build(
                ErrorKind::UnexpectedRootNodeType,
                self.input_len,
                "empty document",
            ));
        };
        let value = match root.kind {
            TokenKind::ObjectStart => self.build_object(root)?,
            TokenKind::ArrayStart => self.build_array(root)?,
            kind => {
                return Err(Error::build(
                    ErrorKind::UnexpectedRootNodeType,
                    root.offset,
                    format!("document root must be an object or array, found {}", kind.describe()),
                ))
            }
        };
        if let Some(extra) = self.next() {
            return Err(Error::build(
                ErrorKind::TrailingContent,
                extra.offset,
                format!("unexpected {} after the root value", extra.kind.describe()),
            ));
        }
        Ok(value)
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).copied();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Next token inside the container opened by `open`; running out is a `kind` failure.
    fn expect_next(&mut self, kind: ErrorKind, open: &Token<'a>) -> Result<Token<'a>> {
        self.next().ok_or_else(|| {
            Error::build(
                kind,
                self.input_len,
                format!(
                    "{} opened at offset {} is never closed",
                    open.kind.describe(),
                    open.offset
                ),
            )
        })
    }

    fn enter(&mut self, open: &Token<'a>) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::build(
                ErrorKind::DepthLimitExceeded,
                open.offset,
                format!("nesting deeper than {} levels", self.max_depth),
            ));
        }
        Ok(())
    }

    fn build_value(&mut self, token: Token<'a>, context: ErrorKind) -> Result<Value> {
        match token.kind {
            TokenKind::ObjectStart => self.build_object(token),
            TokenKind::ArrayStart => self.build_array(token),
            kind if kind.is_scalar() => convert_scalar(&token),
            kind => Err(Error::build(
                context,
                token.offset,
                format!("expected a value, found {}", kind.describe()),
            )),
        }
    }

    fn build_object(&mut self, open: Token<'a>) -> Result<Value> {
        self.enter(&open)?;
        let mut map = Map::new();

        let mut token = self.expect_next(ErrorKind::InvalidObject, &open)?;
        if token.kind == TokenKind::ObjectEnd {
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            if token.kind != TokenKind::String {
                return Err(Error::build(
                    ErrorKind::InvalidObject,
                    token.offset,
                    format!("expected a string key, found {}", token.kind.describe()),
                ));
            }
            let key = decode_string(token.lexeme, token.offset)?;

            let colon = self.expect_next(ErrorKind::InvalidObject, &open)?;
            if colon.kind != TokenKind::Colon {
                return Err(Error::build(
                    ErrorKind::InvalidObject,
                    colon.offset,
                    format!("expected `:` after key, found {}", colon.kind.describe()),
                ));
            }

            let value_token = self.expect_next(ErrorKind::InvalidObject, &open)?;
            let value = self.build_value(value_token, ErrorKind::InvalidObject)?;
            // Later duplicates replace earlier values.
            map.insert(key, value);

            let separator = self.expect_next(ErrorKind::InvalidObject, &open)?;
            match separator.kind {
                TokenKind::ObjectEnd => break,
                TokenKind::Comma => token = self.expect_next(ErrorKind::InvalidObject, &open)?,
                kind => {
                    return Err(Error::build(
                        ErrorKind::InvalidObject,
                        separator.offset,
                        format!("expected `,` or `}}`, found {}", kind.describe()),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn build_array(&mut self, open: Token<'a>) -> Result<Value> {
        self.enter(&open)?;
        let mut items = Vec::new();

        let mut token = self.expect_next(ErrorKind::InvalidArray, &open)?;
        if token.kind == TokenKind::ArrayEnd {
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.build_value(token, ErrorKind::InvalidArray)?);

            let separator = self.expect_next(ErrorKind::InvalidArray, &open)?;
            match separator.kind {
                TokenKind::ArrayEnd => break,
                TokenKind::Comma => token = self.expect_next(ErrorKind::InvalidArray, &open)?,
                kind => {
                    return Err(Error::build(
                        ErrorKind::InvalidArray,
                        separator.offset,
                        format!("expected `,` or `]`, found {}", kind.describe()),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}

/// Convert a scalar token into its leaf value.
pub fn convert_scalar(token: &Token<'_>) -> Result<Value> {
    match token.kind {
        TokenKind::Null => Ok(Value::Null),
        TokenKind::Boolean => match token.lexeme.first() {
            Some(b't') => Ok(Value::Boolean(true)),
            Some(b'f') => Ok(Value::Boolean(false)),
            _ => Err(Error::build(
                ErrorKind::InvalidBoolean,
                token.offset,
                "boolean token does not start with `t` or `f`",
            )),
        },
        TokenKind::Number => parse_number(token.lexeme, token.offset).map(Value::Number),
        TokenKind::String => decode_string(token.lexeme, token.offset).map(Value::Text),
        kind => Err(Error::build(
            ErrorKind::NotAValueType,
            token.offset,
            format!("{} cannot be converted to a value", kind.describe()),
        )),
    }
}
