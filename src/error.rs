//! Error types for the calculator pipeline

use thiserror::Error;

/// Failure kinds raised by [`crate::add`]
///
/// Each variant renders the exact message surfaced to callers; the variants
/// that blame specific tokens carry them raw and in input order so callers
/// can match structurally instead of parsing the message.
#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The custom-delimiter header between `//` and the first newline is malformed
    #[error("invalid delimiter format")]
    InvalidDelimiterFormat,

    /// One or more tokens are not syntactically valid numbers
    #[error("invalid input characters {}", .tokens.join(", "))]
    InvalidInputCharacters {
        /// Offending raw tokens, in input order
        tokens: Vec<String>,
    },

    /// One or more tokens are strictly negative
    #[error("negative numbers not allowed {}", .tokens.join(", "))]
    NegativeNumbersNotAllowed {
        /// Offending raw tokens, in input order, minus sign preserved
        tokens: Vec<String>,
    },
}

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, Error>;
