pub mod batch;
pub mod parser;
pub mod scanner;

pub use batch::parse_many;
pub use parser::{build_tree, convert_scalar};
pub use scanner::{Span, Token, TokenKind};

use crate::types::Value;
use crate::{ParseOptions, Result};

/// Tokenize `input` and build its value tree. Errors carry a resolved line and column.
pub fn parse_bytes(input: &[u8], options: &ParseOptions) -> Result<Value> {
    log::debug!("parsing {} bytes (strict: {})", input.len(), options.strict);
    let result = scanner::tokenize(input, options).and_then(|tokens| {
        log::trace!("scanned {} tokens", tokens.len());
        build_tree(&tokens, input.len(), options)
    });
    result.map_err(|err| {
        let err = err.resolve_location(input);
        log::debug!("rejected input: {err}");
        err
    })
}

pub fn tokenize<'a>(input: &'a [u8], options: &ParseOptions) -> Result<Vec<Token<'a>>> {
    scanner::tokenize(input, options).map_err(|err| err.resolve_location(input))
}
