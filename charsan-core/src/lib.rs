// charsan-core/src/lib.rs
//! # charsan Core Library
//!
//! `charsan-core` restricts strings to a declared character set. Given a value,
//! a charset spec, a replacement character and a trim mode, it produces a
//! string made only of charset characters and the replacement: invalid runs at
//! the ends can be trimmed, and whatever invalid characters remain are replaced
//! inline.
//!
//! The library is pure and stateless on its sanitization path. The only I/O it
//! performs is loading preset files, which is kept in `config`.
//!
//! ## Modules
//!
//! * `charset`: Parses charset specs (`a-z`, `A-Z`, `0-9`, `---` and literals).
//! * `matcher`: Compiles a charset into the valid/invalid character matchers.
//! * `trim`: Defines `TrimMode` and the `trim_left`/`trim_right` operations.
//! * `sanitizer`: The sanitization pipeline and the reusable `Sanitizer`.
//! * `value`: The input value model, including nullish markers.
//! * `config`: `SanitizeOptions` and named presets loaded from YAML.
//! * `errors`: The `SanitizeError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use charsan_core::{sanitize, Sanitizer, TrimMode, Value};
//!
//! // One-shot call with every parameter spelled out.
//! let out = sanitize("fooBar3", "acdeghijklmnopqrstuvwxyz0-9", "_", "left").unwrap();
//! assert_eq!(out, Value::from("oo_ar3"));
//!
//! // Compile once, reuse for many inputs.
//! let slug = Sanitizer::new("a-z0-9", "-", TrimMode::Both).unwrap();
//! assert_eq!(slug.sanitize_str("  Hello World! ").unwrap(), "hello-world");
//! ```
//!
//! ## Error Handling
//!
//! Sanitization returns [`SanitizeError`], whose variants distinguish a bad
//! charset, a bad replacement, a bad trim mode and an input that sanitizes to
//! nothing. Preset loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod charset;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod sanitizer;
pub mod trim;
pub mod value;

/// Re-exports the charset parser and its range tokens.
pub use charset::{CasePolicy, Charset, RangeToken, PARSEABLE_RANGES};

/// Re-exports the preset configuration types and functions.
pub use config::{merge_presets, preset_candidate_paths, Preset, PresetConfig, SanitizeOptions};

/// Re-exports the custom error type for clear error reporting.
pub use errors::{ErrorKind, SanitizeError};

pub use matcher::{compile_matchers, CompiledMatchers};

/// Re-exports the sanitization entry points.
pub use sanitizer::{
    sanitize,
    sanitize_default,
    Sanitizer,
    DEFAULT_CHARSET,
    DEFAULT_REPLACEMENT,
    DEFAULT_TRIM_MODE,
};

pub use trim::{trim_left, trim_right, TrimMode};
pub use value::Value;
