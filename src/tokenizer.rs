//! Payload splitting

use crate::delimiter::DelimiterSpec;
use regex::Regex;

/// Split `payload` on every occurrence of every delimiter in `spec`
///
/// All delimiters are applied simultaneously as alternatives, so a match of
/// any one of them ends the current token. Consecutive delimiters produce
/// empty tokens and nothing is trimmed; the validator decides what each
/// token means. An empty payload yields a single empty token.
pub fn tokenize<'a>(spec: &DelimiterSpec, payload: &'a str) -> Vec<&'a str> {
    let splitter =
        Regex::new(&spec.to_pattern()).expect("alternation of escaped literals always compiles");
    splitter.split(payload).collect()
}
