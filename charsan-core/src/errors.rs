//! errors.rs - Custom error types for the charsan-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types raised while sanitizing.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Invalid charset '{spec}': {reason}")]
    InvalidCharset { spec: String, reason: String },

    #[error("Invalid replacement '{replacement}': must be exactly one character")]
    InvalidReplacement { replacement: String },

    #[error("Invalid trim mode '{mode}': expected one of none, left, right, both")]
    InvalidTrimMode { mode: String },

    #[error("Value '{value}' cannot be sanitized: nothing survived trimming and replacement")]
    Unsanitizable { value: String },

    #[error("Failed to compile matcher for charset '{0}': {1}")]
    MatcherCompilation(String, regex::Error),
}

/// Fieldless discriminant of a [`SanitizeError`], handy for matching in callers
/// and tests without destructuring payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCharset,
    InvalidReplacement,
    InvalidTrimMode,
    Unsanitizable,
    MatcherCompilation,
}

impl SanitizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SanitizeError::InvalidCharset { .. } => ErrorKind::InvalidCharset,
            SanitizeError::InvalidReplacement { .. } => ErrorKind::InvalidReplacement,
            SanitizeError::InvalidTrimMode { .. } => ErrorKind::InvalidTrimMode,
            SanitizeError::Unsanitizable { .. } => ErrorKind::Unsanitizable,
            SanitizeError::MatcherCompilation(..) => ErrorKind::MatcherCompilation,
        }
    }
}
