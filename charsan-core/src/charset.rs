//! charset.rs - Parsing of charset specifications into character ranges.
//!
//! A charset spec is a string of literal characters mixed with range tokens.
//! Only four range tokens are understood (see [`PARSEABLE_RANGES`]); any other
//! `X-Y` occurrence is rejected. The parsed form is a sorted list of inclusive
//! ranges that can be queried directly or rendered into a regex class body.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::fmt;

use crate::errors::SanitizeError;

/// One of the range tokens a charset spec may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// `---`, a range whose both endpoints are the hyphen itself.
    Hyphen,
}

/// Every range token the parser recognizes, in lookup order.
pub const PARSEABLE_RANGES: [RangeToken; 4] = [
    RangeToken::Lowercase,
    RangeToken::Uppercase,
    RangeToken::Digit,
    RangeToken::Hyphen,
];

impl RangeToken {
    /// Inclusive endpoints of the range.
    pub const fn bounds(self) -> (char, char) {
        match self {
            RangeToken::Lowercase => ('a', 'z'),
            RangeToken::Uppercase => ('A', 'Z'),
            RangeToken::Digit => ('0', '9'),
            RangeToken::Hyphen => ('-', '-'),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RangeToken::Lowercase => "a-z",
            RangeToken::Uppercase => "A-Z",
            RangeToken::Digit => "0-9",
            RangeToken::Hyphen => "---",
        }
    }

    fn from_endpoints(lo: char, hi: char) -> Option<Self> {
        PARSEABLE_RANGES
            .into_iter()
            .find(|token| token.bounds() == (lo, hi))
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which case the input is forced into before trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePolicy {
    /// The charset holds no uppercase letters.
    Lower,
    /// The charset holds uppercase but no lowercase letters.
    Upper,
    /// Mixed-case charset, input case is left untouched.
    Preserve,
}

impl CasePolicy {
    pub fn apply(self, input: &str) -> String {
        match self {
            CasePolicy::Lower => input.to_ascii_lowercase(),
            CasePolicy::Upper => input.to_ascii_uppercase(),
            CasePolicy::Preserve => input.to_string(),
        }
    }
}

/// The expanded set of characters denoted by a charset spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    spec: String,
    /// Sorted, non-overlapping, non-adjacent inclusive ranges.
    ranges: Vec<(char, char)>,
}

impl Charset {
    /// Parses a charset spec.
    ///
    /// The spec is scanned left to right. Whenever the character after the
    /// current one is a hyphen and a third character follows, the three form a
    /// range which must be one of [`PARSEABLE_RANGES`]. Any other character is a
    /// literal, except a stray hyphen, which contributes nothing: the hyphen is
    /// only ever a member through the `---` token.
    pub fn parse(spec: &str) -> Result<Self, SanitizeError> {
        let chars: Vec<char> = spec.chars().collect();
        let mut ranges = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            if i + 2 < chars.len() && chars[i + 1] == '-' {
                let (lo, hi) = (chars[i], chars[i + 2]);
                let token = RangeToken::from_endpoints(lo, hi).ok_or_else(|| {
                    SanitizeError::InvalidCharset {
                        spec: spec.to_string(),
                        reason: format!("unsupported range '{}-{}'", lo, hi),
                    }
                })?;
                ranges.push(token.bounds());
                i += 3;
            } else if chars[i] == '-' {
                debug!("Ignoring stray hyphen at position {} of charset '{}'.", i, spec);
                i += 1;
            } else {
                ranges.push((chars[i], chars[i]));
                i += 1;
            }
        }

        if ranges.is_empty() {
            return Err(SanitizeError::InvalidCharset {
                spec: spec.to_string(),
                reason: "charset denotes no characters".to_string(),
            });
        }

        Ok(Self {
            spec: spec.to_string(),
            ranges: normalize_ranges(ranges),
        })
    }

    /// The spec this charset was parsed from.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }

    /// True if any of `lo..=hi` is in the charset.
    fn intersects(&self, lo: char, hi: char) -> bool {
        self.ranges.iter().any(|&(r_lo, r_hi)| r_lo <= hi && lo <= r_hi)
    }

    pub fn has_uppercase(&self) -> bool {
        self.intersects('A', 'Z')
    }

    pub fn has_lowercase(&self) -> bool {
        self.intersects('a', 'z')
    }

    pub fn case_policy(&self) -> CasePolicy {
        if !self.has_uppercase() {
            CasePolicy::Lower
        } else if !self.has_lowercase() {
            CasePolicy::Upper
        } else {
            CasePolicy::Preserve
        }
    }

    /// Renders the ranges as the body of a regex character class, with every
    /// endpoint escaped so it matches literally.
    pub fn class_body(&self) -> String {
        let mut body = String::new();
        for &(lo, hi) in &self.ranges {
            push_escaped(&mut body, lo);
            if lo != hi {
                body.push('-');
                push_escaped(&mut body, hi);
            }
        }
        body
    }
}

/// Escapes a single character for use inside a regex class.
pub(crate) fn push_escaped(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

fn normalize_ranges(mut ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    ranges.sort_unstable();
    let mut merged: Vec<(char, char)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if (lo as u32) <= (last.1 as u32).saturating_add(1) => {
                if hi > last.1 {
                    last.1 = hi;
                }
            }
            _ => merged.push((lo, hi)),
        }
    }
    merged
}
