//! Placeholder grammar.
//!
//! A placeholder is `#{` followed by everything up to the first `}`. Its inner
//! text is a fallback chain of candidate keys separated by `||`. Text outside
//! placeholders, including an unterminated `#{`, is literal.

use once_cell::sync::Lazy;
use regex::Regex;
use secret_env_core::constants::{FALLBACK_SEPARATOR, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\{.*?\}").expect("placeholder pattern is valid"));

/// One `#{...}` occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    reference: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Inner text exactly as written, e.g. `"A || B"`
    pub fn reference(&self) -> &'a str {
        self.reference
    }

    /// Candidate keys in fallback order, whitespace trimmed
    pub fn candidates(&self) -> impl Iterator<Item = &'a str> {
        self.reference.split(FALLBACK_SEPARATOR).map(str::trim)
    }
}

/// A piece of a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder<'a>),
}

/// Split `raw` into literal text and placeholders, in order. Empty literals
/// between adjacent placeholders are omitted.
pub fn segments(raw: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in PLACEHOLDER_REGEX.find_iter(raw) {
        if found.start() > last {
            segments.push(Segment::Literal(&raw[last..found.start()]));
        }
        let inner =
            &raw[found.start() + PLACEHOLDER_OPEN.len()..found.end() - PLACEHOLDER_CLOSE.len()];
        segments.push(Segment::Placeholder(Placeholder { reference: inner }));
        last = found.end();
    }

    if last < raw.len() {
        segments.push(Segment::Literal(&raw[last..]));
    }

    segments
}
