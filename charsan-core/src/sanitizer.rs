//! sanitizer.rs - The sanitization pipeline.
//!
//! A call runs, in order: nullish short-circuit, charset and replacement
//! validation, stringification, the already-clean fast path, case
//! normalization, trimming, inline replacement and the empty-result check.
//! [`Sanitizer`] performs the validation and matcher compilation once so a
//! configuration can be reused across many values; [`sanitize`] is the
//! one-shot form taking every parameter as a string.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::NoExpand;
use std::borrow::Cow;

use crate::charset::Charset;
use crate::errors::SanitizeError;
use crate::matcher::{compile_matchers, CompiledMatchers};
use crate::trim::TrimMode;
use crate::value::Value;

pub const DEFAULT_CHARSET: &str = "a-z0-9";
pub const DEFAULT_REPLACEMENT: &str = "-";
pub const DEFAULT_TRIM_MODE: &str = "left";

/// A validated, compiled sanitization configuration.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    charset: Charset,
    replacement: char,
    matchers: CompiledMatchers,
    trim_mode: TrimMode,
}

impl Sanitizer {
    /// Validates `charset` and `replacement` and compiles the matchers.
    pub fn new(charset: &str, replacement: &str, trim_mode: TrimMode) -> Result<Self, SanitizeError> {
        let charset = Charset::parse(charset)?;
        let replacement = parse_replacement(replacement)?;
        let matchers = compile_matchers(&charset, replacement)?;
        debug!(
            "Sanitizer ready: charset='{}' replacement='{}' trim={}",
            charset.spec(),
            replacement,
            trim_mode
        );
        Ok(Self { charset, replacement, matchers, trim_mode })
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn replacement(&self) -> char {
        self.replacement
    }

    pub fn trim_mode(&self) -> TrimMode {
        self.trim_mode
    }

    /// True if `input` would be returned unchanged: it holds no invalid
    /// character and does not start with the replacement.
    pub fn is_clean(&self, input: &str) -> bool {
        !self.matchers.invalid.is_match(input) && !input.starts_with(self.replacement)
    }

    /// Sanitizes a string. Clean input is returned borrowed.
    pub fn sanitize_str<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, SanitizeError> {
        self.run(input, || Ok(self.trim_mode))
    }

    /// Sanitizes any value. Nullish values are returned as-is.
    pub fn sanitize<V: Into<Value>>(&self, value: V) -> Result<Value, SanitizeError> {
        self.sanitize_value_with(value.into(), || Ok(self.trim_mode))
    }

    fn sanitize_value_with<F>(&self, value: Value, trim_mode: F) -> Result<Value, SanitizeError>
    where
        F: FnOnce() -> Result<TrimMode, SanitizeError>,
    {
        let text = match value {
            Value::Null | Value::Undefined => return Ok(value),
            Value::String(s) => s,
            other => other.to_string(),
        };
        let changed = match self.run(&text, trim_mode)? {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        Ok(Value::String(changed.unwrap_or(text)))
    }

    /// Fast path, then case normalization, trim, replacement and the empty
    /// check. The trim mode is resolved only once the fast path is missed.
    fn run<'a, F>(&self, input: &'a str, trim_mode: F) -> Result<Cow<'a, str>, SanitizeError>
    where
        F: FnOnce() -> Result<TrimMode, SanitizeError>,
    {
        if self.is_clean(input) {
            debug!("Input is already clean, returning it unchanged.");
            return Ok(Cow::Borrowed(input));
        }
        let trim_mode = trim_mode()?;

        let normalized = self.charset.case_policy().apply(input);
        let trimmed = trim_mode.apply(&normalized, &self.matchers.valid);

        let mut buf = [0u8; 4];
        let replacement: &str = self.replacement.encode_utf8(&mut buf);
        let replaced = self.matchers.invalid.replace_all(trimmed, NoExpand(replacement));

        if replaced.is_empty() {
            return Err(SanitizeError::Unsanitizable { value: input.to_string() });
        }

        debug!(
            "Sanitized {} chars into {} chars (trim={}).",
            input.chars().count(),
            replaced.chars().count(),
            trim_mode
        );
        Ok(Cow::Owned(replaced.into_owned()))
    }
}

fn parse_replacement(replacement: &str) -> Result<char, SanitizeError> {
    let mut chars = replacement.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SanitizeError::InvalidReplacement {
            replacement: replacement.to_string(),
        }),
    }
}

/// Sanitizes `value` in a single call.
///
/// Nullish values are returned unchanged without validating any other
/// parameter. The trim mode is only validated when the input is not already
/// clean.
///
/// ```rust
/// use charsan_core::{sanitize, Value};
///
/// let out = sanitize("fooBar3", "A-Z0-9", "-", "left").unwrap();
/// assert_eq!(out, Value::from("FOOBAR3"));
///
/// let out = sanitize(None::<&str>, "not-a-charset", "??", "sideways").unwrap();
/// assert_eq!(out, Value::Null);
/// ```
pub fn sanitize<V: Into<Value>>(
    value: V,
    charset: &str,
    replacement: &str,
    trim_mode: &str,
) -> Result<Value, SanitizeError> {
    let value = value.into();
    if value.is_nullish() {
        return Ok(value);
    }
    let sanitizer = Sanitizer::new(charset, replacement, TrimMode::default())?;
    sanitizer.sanitize_value_with(value, || trim_mode.parse())
}

/// [`sanitize`] with the default charset, replacement and trim mode.
pub fn sanitize_default<V: Into<Value>>(value: V) -> Result<Value, SanitizeError> {
    sanitize(value, DEFAULT_CHARSET, DEFAULT_REPLACEMENT, DEFAULT_TRIM_MODE)
}
