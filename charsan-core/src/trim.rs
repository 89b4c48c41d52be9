//! Trimming of invalid-character runs from either end of a string.
//!
//! License: MIT OR APACHE 2.0

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SanitizeError;

/// Controls which ends lose their leading/trailing run of invalid characters
/// before inline replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    None,
    #[default]
    Left,
    Right,
    Both,
}

impl TrimMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            TrimMode::None => "none",
            TrimMode::Left => "left",
            TrimMode::Right => "right",
            TrimMode::Both => "both",
        }
    }

    /// Applies this trim mode, returning a subslice of `input`.
    pub fn apply<'a>(self, input: &'a str, valid: &Regex) -> &'a str {
        match self {
            TrimMode::None => input,
            TrimMode::Left => trim_left(input, valid),
            TrimMode::Right => trim_right(input, valid),
            TrimMode::Both => trim_right(trim_left(input, valid), valid),
        }
    }
}

impl FromStr for TrimMode {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TrimMode::None),
            "left" => Ok(TrimMode::Left),
            "right" => Ok(TrimMode::Right),
            "both" => Ok(TrimMode::Both),
            other => Err(SanitizeError::InvalidTrimMode { mode: other.to_string() }),
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drops everything before the first valid character. Yields an empty slice if
/// there is none.
pub fn trim_left<'a>(input: &'a str, valid: &Regex) -> &'a str {
    match valid.find(input) {
        Some(m) => &input[m.start()..],
        None => "",
    }
}

/// Drops everything after the last valid character. Yields an empty slice if
/// there is none.
pub fn trim_right<'a>(input: &'a str, valid: &Regex) -> &'a str {
    match valid.find_iter(input).last() {
        Some(m) => &input[..m.end()],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Regex {
        Regex::new("[a-z]").unwrap()
    }

    #[test]
    fn test_trim_left() {
        assert_eq!(trim_left("  ab cd  ", &valid()), "ab cd  ");
        assert_eq!(trim_left("ab", &valid()), "ab");
        assert_eq!(trim_left("123", &valid()), "");
        assert_eq!(trim_left("", &valid()), "");
    }

    #[test]
    fn test_trim_right() {
        assert_eq!(trim_right("  ab cd  ", &valid()), "  ab cd");
        assert_eq!(trim_right("ab", &valid()), "ab");
        assert_eq!(trim_right("123", &valid()), "");
    }

    #[test]
    fn test_apply_modes() {
        let re = valid();
        assert_eq!(TrimMode::None.apply("--ab--", &re), "--ab--");
        assert_eq!(TrimMode::Left.apply("--ab--", &re), "ab--");
        assert_eq!(TrimMode::Right.apply("--ab--", &re), "--ab");
        assert_eq!(TrimMode::Both.apply("--ab--", &re), "ab");
        assert_eq!(TrimMode::Both.apply("----", &re), "");
    }

    #[test]
    fn test_trim_respects_multibyte_boundaries() {
        assert_eq!(TrimMode::Both.apply("ééaéb€€", &valid()), "aéb");
    }

    #[test]
    fn test_parse_and_display() {
        for mode in [TrimMode::None, TrimMode::Left, TrimMode::Right, TrimMode::Both] {
            assert_eq!(mode.as_str().parse::<TrimMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
        assert_eq!(TrimMode::default(), TrimMode::Left);
        assert!("Left".parse::<TrimMode>().is_err());
        assert!("middle".parse::<TrimMode>().is_err());
    }
}
