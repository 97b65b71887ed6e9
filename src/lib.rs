//! String-to-sum calculator with configurable delimiters
//!
//! Parses a textual list of numbers, validates every token, and reduces the
//! valid values to a single total. Separators default to comma and newline
//! and can be overridden per call with a `//...\n` header that supports
//! multi-character and multiple simultaneous delimiters. Values above 1000
//! are silently excluded from the sum; negative values and non-numeric
//! tokens are errors.
//!
//! # Example
//!
//! ```rust
//! assert_eq!(strcalc::add("1,2\n3").unwrap(), 6.0);
//! assert_eq!(strcalc::add("//[*][%]\n1*2%3").unwrap(), 6.0);
//! assert!(strcalc::add("1,-2").is_err());
//! ```

#![warn(missing_docs)]

pub mod delimiter;
pub mod error;
pub mod sum;
pub mod tokenizer;
pub mod validator;

pub use delimiter::DelimiterSpec;
pub use error::{Error, Result};

/// Sum a delimited list of numbers
///
/// The empty string short-circuits to `0`. Otherwise the input flows through
/// delimiter resolution, tokenization, validation, and the cutoff sum, in
/// that order. Each call is a pure function of its input; nothing is shared
/// between calls.
///
/// # Errors
///
/// - [`Error::InvalidDelimiterFormat`] when a `//` header is malformed
/// - [`Error::InvalidInputCharacters`] when any token is not a plain number
/// - [`Error::NegativeNumbersNotAllowed`] when any token is negative
pub fn add(input: &str) -> Result<f64> {
    if input.is_empty() {
        return Ok(0.0);
    }

    let (spec, payload) = delimiter::resolve(input)?;
    let tokens = tokenizer::tokenize(&spec, payload);
    let values = validator::validate(&tokens)?;
    Ok(sum::total(&values))
}
