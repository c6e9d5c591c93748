use std::fmt;

/// Failure categories reported by [`crate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("invalid primitive")]
    InvalidPrimitive,
    #[error("unexpected symbol in string escape")]
    StringUnexpectedSymbol,
    #[error("invalid hex character in unicode escape")]
    StringInvalidHexCharacter,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid object")]
    InvalidObject,
    #[error("invalid array")]
    InvalidArray,
    #[error("unexpected root node type")]
    UnexpectedRootNodeType,
    #[error("trailing content after root value")]
    TrailingContent,
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
    #[error("invalid number")]
    InvalidNumber,
    #[error("invalid boolean")]
    InvalidBoolean,
    #[error("invalid string")]
    InvalidString,
    #[error("token is not a value type")]
    NotAValueType,
}

impl ErrorKind {
    pub fn is_lexical(self) -> bool {
        matches!(
            self,
            ErrorKind::UnexpectedCharacter
                | ErrorKind::InvalidPrimitive
                | ErrorKind::StringUnexpectedSymbol
                | ErrorKind::StringInvalidHexCharacter
                | ErrorKind::UnterminatedString
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Tokenize,
    Build,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Resolve a byte offset into 1-based line and column numbers.
    pub fn from_offset(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |idx| idx + 1);
        Self {
            offset,
            line,
            column: offset - line_start + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub stage: ErrorStage,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn new(kind: ErrorKind, stage: ErrorStage, message: impl Into<String>) -> Self {
        Self {
            kind,
            stage,
            message: message.into(),
            location: None,
        }
    }

    pub fn tokenize(kind: ErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self::new(kind, ErrorStage::Tokenize, message).at_offset(offset)
    }

    pub fn build(kind: ErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self::new(kind, ErrorStage::Build, message).at_offset(offset)
    }

    /// Records the offset only; [`Error::resolve_location`] fills in line and column.
    pub fn at_offset(mut self, offset: usize) -> Self {
        self.location = Some(Location {
            offset,
            line: 0,
            column: 0,
        });
        self
    }

    pub(crate) fn resolve_location(mut self, input: &[u8]) -> Self {
        if let Some(location) = self.location {
            self.location = Some(Location::from_offset(input, location.offset));
        }
        self
    }

    pub fn offset(&self) -> Option<usize> {
        self.location.map(|location| location.offset)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
