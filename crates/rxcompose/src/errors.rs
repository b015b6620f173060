//! # Error Types

/// Errors from rxcompose operations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// The quoted form of a literal string did not read back as a pattern.
    ///
    /// This is not expected for any valid `&str` input; seeing it means the
    /// printer and parser of `regex-syntax` disagree.
    #[error("error quoting literal {input:?}: {source}")]
    LiteralQuote {
        /// The string that was being quoted.
        input: String,

        /// The parser diagnostic.
        source: regex_syntax::Error,
    },

    /// The concatenated fragments are not a valid pattern.
    #[error("error parsing {pattern:?}: {source}")]
    PatternSyntax {
        /// The full pattern text handed to the parser.
        pattern: String,

        /// The parser diagnostic.
        source: regex_syntax::Error,
    },

    /// The `regex` crate rejected a canonical pattern.
    #[cfg(feature = "regex")]
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl ComposeError {
    /// The pattern (or literal input) the error was raised for.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::LiteralQuote { input, .. } => Some(input),
            Self::PatternSyntax { pattern, .. } => Some(pattern),
            #[cfg(feature = "regex")]
            Self::Regex(_) => None,
        }
    }
}

/// Result type for rxcompose operations.
pub type ComposeResult<T> = core::result::Result<T, ComposeError>;
