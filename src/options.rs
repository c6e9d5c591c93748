use crate::constants::MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest container nesting accepted before failing with `DepthLimitExceeded`.
    pub max_depth: usize,
    /// Require exact `null`/`true`/`false` literals and reject raw control bytes in strings.
    pub strict: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self::default().with_strict(false)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            strict: true,
        }
    }
}
