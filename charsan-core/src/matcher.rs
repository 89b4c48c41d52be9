//! matcher.rs - Compiles a parsed charset into the two character matchers.
//!
//! The `valid` matcher accepts any single charset character. The `invalid`
//! matcher accepts any single character that is neither in the charset nor the
//! replacement character, so replacements already present in the input are
//! never flagged.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::charset::{push_escaped, Charset};
use crate::errors::SanitizeError;

/// Upper bound for the compiled size of a single matcher.
const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// The compiled pair of matchers for one charset and replacement.
#[derive(Debug, Clone)]
pub struct CompiledMatchers {
    /// Matches one character inside the charset.
    pub valid: Regex,
    /// Matches one character outside the charset that is not the replacement.
    pub invalid: Regex,
}

/// Compiles `valid` and `invalid` matchers for `charset`.
pub fn compile_matchers(charset: &Charset, replacement: char) -> Result<CompiledMatchers, SanitizeError> {
    let body = charset.class_body();

    let mut negated = String::with_capacity(body.len() + 8);
    negated.push_str("[^");
    negated.push_str(&body);
    push_escaped(&mut negated, replacement);
    negated.push(']');

    let valid = build(charset, &format!("[{}]", body))?;
    let invalid = build(charset, &negated)?;

    log::debug!(
        target: "charsan_core::sanitizer",
        "Compiled matchers for charset '{}': valid={} invalid={}",
        charset.spec(),
        valid.as_str(),
        invalid.as_str()
    );

    Ok(CompiledMatchers { valid, invalid })
}

fn build(charset: &Charset, pattern: &str) -> Result<Regex, SanitizeError> {
    debug!("Compiling matcher pattern '{}'.", pattern);
    RegexBuilder::new(pattern)
        .size_limit(MATCHER_SIZE_LIMIT)
        .build()
        .map_err(|e| SanitizeError::MatcherCompilation(charset.spec().to_string(), e))
}
