use thiserror::Error;

/// Everything that can stop a translation
///
/// All variants are terminal: no stage tries to recover or emit partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A `(` without a matching `)`, or a stray `)`
    ///
    /// `position` is the byte offset of the offending delimiter in the input.
    #[error("unbalanced delimiter '{delimiter}' at position {position}")]
    UnbalancedDelimiter {
        /// The delimiter that couldn't be matched
        delimiter: char,
        /// Byte offset of that delimiter
        position: usize,
    },
    /// A run of text between operators that isn't `main[_sub][^sup]`
    #[error("malformed atom '{0}'")]
    MalformedAtom(String),
    /// A typed constructor was handed a value it can't represent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the crate
pub type Result<T, E = TranslationError> = std::result::Result<T, E>;
