//! Custom-delimiter header detection
//!
//! Resolves the set of separator strings for an input and strips the header
//! from the numeric payload. Inputs without a `//` prefix use the default
//! comma/newline pair.

use crate::error::{Error, Result};

/// Marker introducing a custom-delimiter header
const HEADER_PREFIX: &str = "//";

/// Separators applied when the input carries no custom-delimiter header
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// Ordered set of literal separator strings used to split the payload
///
/// Invariant: at least one delimiter, each non-empty. All constructors in
/// this module uphold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSpec {
    delimiters: Vec<String>,
}

impl DelimiterSpec {
    fn new(delimiters: Vec<String>) -> Self {
        debug_assert!(!delimiters.is_empty());
        debug_assert!(delimiters.iter().all(|d| !d.is_empty()));
        Self { delimiters }
    }

    /// Literal separator strings, in declaration order
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Render the spec as a regex alternation of escaped literals
    ///
    /// Escaping keeps metacharacter delimiters (`*`, `|`, `.`) splitting on
    /// their literal value instead of being interpreted by the engine.
    pub fn to_pattern(&self) -> String {
        let escaped: Vec<String> = self.delimiters.iter().map(|d| regex::escape(d)).collect();
        escaped.join("|")
    }
}

impl Default for DelimiterSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect())
    }
}

/// Resolve the effective delimiters for `input` and strip any header
///
/// Returns the spec together with the payload to tokenize: everything
/// strictly after the header's terminating newline, or the whole input when
/// no header is present.
///
/// Two header syntaxes are accepted between `//` and the first newline:
/// one or more bracketed groups (`//[*][%]\n`, each group one delimiter,
/// possibly multi-character) or a bare run of characters forming a single
/// literal delimiter (`//;\n`, `//***\n`).
pub fn resolve(input: &str) -> Result<(DelimiterSpec, &str)> {
    let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
        return Ok((DelimiterSpec::default(), input));
    };

    // The header runs to the first newline; one without a terminator is
    // malformed, as is an empty one.
    let newline = rest.find('\n').ok_or(Error::InvalidDelimiterFormat)?;
    let header = &rest[..newline];
    let payload = &rest[newline + 1..];

    let spec = if header.contains('[') || header.contains(']') {
        parse_bracketed(header)?
    } else if header.is_empty() {
        return Err(Error::InvalidDelimiterFormat);
    } else {
        DelimiterSpec::new(vec![header.to_string()])
    };

    Ok((spec, payload))
}

/// Parse a `[delim][delim]...` header into one delimiter per group
///
/// Nothing may appear outside the bracket groups and every group must be
/// non-empty.
fn parse_bracketed(header: &str) -> Result<DelimiterSpec> {
    let mut delimiters = Vec::new();
    let mut rest = header;
    while !rest.is_empty() {
        let body = rest.strip_prefix('[').ok_or(Error::InvalidDelimiterFormat)?;
        let close = body.find(']').ok_or(Error::InvalidDelimiterFormat)?;
        if close == 0 {
            return Err(Error::InvalidDelimiterFormat);
        }
        delimiters.push(body[..close].to_string());
        rest = &body[close + 1..];
    }
    Ok(DelimiterSpec::new(delimiters))
}
