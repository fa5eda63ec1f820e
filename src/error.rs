//! Error types for line encoding.

use thiserror::Error;

/// Error variants for line-encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contained a symbol other than `'0'` or `'1'`.
    #[error("invalid symbol {found:?} at position {position}: input must contain only '0' and '1'")]
    InvalidSymbol {
        /// Character index of the offending symbol.
        position: usize,
        /// The offending symbol.
        found: char,
    },

    /// NRZ-I initial level outside `{-1, +1}`.
    #[error("invalid NRZ-I initial level {0}: expected 1 or -1")]
    InvalidInitialLevel(i8),

    /// Integer is not a signal level (`-1`, `0` or `1`).
    #[error("invalid signal level: {0}")]
    InvalidLevel(i8),

    /// Scheme name not recognised.
    #[error("unknown encoding scheme: {0:?}")]
    UnknownScheme(String),
}

/// A specialized Result type for line-encoding operations.
pub type Result<T> = std::result::Result<T, Error>;
