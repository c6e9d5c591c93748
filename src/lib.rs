//! Two-phase JSON parser.
//!
//! A single forward scan splits the input into tokens that borrow from the buffer, then a
//! recursive-descent builder turns them into an owned [`Value`] tree. Documents must have an
//! object or array at the root.
//!
//! ```
//! let value = jsjson::parse(br#"[{"country":"Francija"},{},{"duration":151}]"#).unwrap();
//! assert_eq!(value[0]["country"].as_str(), Some("Francija"));
//! assert_eq!(value[2]["duration"].as_number(), Some(151.0));
//! ```

pub mod constants;
pub mod decode;
pub mod error;
pub mod num;
pub mod options;
pub mod text;
pub mod types;

pub use crate::decode::{parse_many, Span, Token, TokenKind};
pub use crate::error::{Error, ErrorKind, ErrorStage, Location};
pub use crate::options::ParseOptions;
pub use crate::types::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    decode::parse_bytes(input, options)
}

pub fn parse_str(input: &str) -> Result<Value> {
    parse_str_with_options(input, &ParseOptions::default())
}

pub fn parse_str_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::parse_bytes(input.as_bytes(), options)
}

/// Check that `input` is a well-formed document without keeping the tree.
pub fn validate(input: &[u8]) -> Result<()> {
    validate_with_options(input, &ParseOptions::default())
}

pub fn validate_with_options(input: &[u8], options: &ParseOptions) -> Result<()> {
    decode::parse_bytes(input, options).map(|_| ())
}

pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_>>> {
    decode::tokenize(input, &ParseOptions::default())
}
