//! Token validity checks
//!
//! Two independent gates decide whether a token is a plain number: a
//! character-class gate and a numeric-parse gate. Both must pass for every
//! token before signs are examined, and character failures always win over
//! sign failures, so exactly one error is ever raised per call.

use crate::error::{Error, Result};

/// Symbols that disqualify a token regardless of what the numeric parser
/// would make of it. The decimal point is deliberately absent: decimal
/// tokens are valid numbers, and a stray `.` still fails the parse gate.
const FORBIDDEN_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '[', ']', '{', '}', ';', '\'',
    '"', '\\', '|', ',', '<', '>', '/', '?', '`', '~',
];

fn has_forbidden_char(token: &str) -> bool {
    token
        .chars()
        .any(|c| c.is_ascii_alphabetic() || FORBIDDEN_SYMBOLS.contains(&c))
}

/// Explicit parse gate. Empty tokens, bare signs, padded tokens, and
/// multi-dot tokens all fail here even though the character gate lets them
/// through.
fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Validate `tokens` and yield their numeric values in order
///
/// Tokens failing either gate are collected in input order and reported
/// together as [`Error::InvalidInputCharacters`]. Only when every token is a
/// valid number are strictly negative ones collected and reported as
/// [`Error::NegativeNumbersNotAllowed`], preserving their original text.
pub fn validate(tokens: &[&str]) -> Result<Vec<f64>> {
    let mut invalid = Vec::new();
    let mut values = Vec::with_capacity(tokens.len());
    for &token in tokens {
        match parse_value(token) {
            Some(value) if !has_forbidden_char(token) => values.push((token, value)),
            _ => invalid.push(token.to_string()),
        }
    }
    if !invalid.is_empty() {
        return Err(Error::InvalidInputCharacters { tokens: invalid });
    }

    let negatives: Vec<String> = values
        .iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(token, _)| token.to_string())
        .collect();
    if !negatives.is_empty() {
        return Err(Error::NegativeNumbersNotAllowed { tokens: negatives });
    }

    Ok(values.into_iter().map(|(_, value)| value).collect())
}
