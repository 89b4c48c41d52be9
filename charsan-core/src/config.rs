//! Configuration management for `charsan-core`.
//!
//! This module defines [`SanitizeOptions`] and named [`Preset`]s of them. It
//! handles deserialization of YAML preset files and provides utilities for
//! loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::errors::SanitizeError;
use crate::sanitizer::{Sanitizer, DEFAULT_CHARSET, DEFAULT_REPLACEMENT};
use crate::trim::TrimMode;

/// The three parameters of a sanitization call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Charset spec, e.g. `a-z0-9`.
    pub charset: String,
    /// Single replacement character.
    pub replacement: String,
    pub trim_mode: TrimMode,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            trim_mode: TrimMode::default(),
        }
    }
}

impl SanitizeOptions {
    /// Compiles the options into a reusable [`Sanitizer`].
    pub fn build(&self) -> Result<Sanitizer, SanitizeError> {
        Sanitizer::from_options(self)
    }

    /// Checks that charset and replacement are valid.
    pub fn validate(&self) -> Result<(), SanitizeError> {
        self.build().map(|_| ())
    }
}

impl Sanitizer {
    pub fn from_options(options: &SanitizeOptions) -> Result<Self, SanitizeError> {
        Sanitizer::new(&options.charset, &options.replacement, options.trim_mode)
    }
}

/// A named set of options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub options: SanitizeOptions,
}

/// Top-level structure of a preset file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresetConfig {
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl PresetConfig {
    /// Loads presets from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading presets from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file {}", path.display()))?;
        let config: PresetConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse preset file {}", path.display()))?;

        validate_presets(&config.presets)?;
        info!("Loaded {} presets from file {}.", config.presets.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in presets from the embedded configuration.
    pub fn load_default_presets() -> Result<Self> {
        debug!("Loading default presets from embedded string...");
        let default_yaml = include_str!("../config/default_presets.yaml");
        let config: PresetConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default presets")?;

        debug!("Loaded {} default presets.", config.presets.len());
        Ok(config)
    }

    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

/// Merges user presets over the defaults. A user preset replaces the default
/// of the same name; new names are appended after the defaults.
pub fn merge_presets(default_config: PresetConfig, user_config: Option<PresetConfig>) -> PresetConfig {
    let Some(user_cfg) = user_config else {
        return default_config;
    };
    debug!(
        "Merging {} user presets over {} defaults.",
        user_cfg.presets.len(),
        default_config.presets.len()
    );

    let mut overrides: HashMap<String, Preset> = user_cfg
        .presets
        .iter()
        .map(|p| (p.name.clone(), p.clone()))
        .collect();

    let mut presets: Vec<Preset> = default_config
        .presets
        .into_iter()
        .map(|p| overrides.remove(&p.name).unwrap_or(p))
        .collect();

    // Keep the user's ordering for newly introduced presets.
    presets.extend(
        user_cfg
            .presets
            .into_iter()
            .filter(|p| overrides.contains_key(&p.name)),
    );

    debug!("Final total presets after merge: {}", presets.len());
    PresetConfig { presets }
}

/// Locations searched for a user preset file, in priority order.
pub fn preset_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::home_dir().map(|p| p.join(".charsan").join("presets.yaml")),
        dirs::config_dir().map(|p| p.join("charsan").join("presets.yaml")),
        Some(PathBuf::from("./config/presets.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

/// Validates preset integrity (names and options).
fn validate_presets(presets: &[Preset]) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for preset in presets {
        if preset.name.is_empty() {
            errors.push("A preset has an empty `name` field.".to_string());
        } else if !names.insert(preset.name.as_str()) {
            errors.push(format!("Duplicate preset name found: '{}'.", preset.name));
        }

        if let Err(e) = preset.options.validate() {
            errors.push(format!("Preset '{}': {}", preset.name, e));
        }
    }

    if !errors.is_empty() {
        Err(anyhow!("Preset validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets_are_valid() {
        let config = PresetConfig::load_default_presets().unwrap();
        validate_presets(&config.presets).unwrap();
        let slug = config.find("slug").unwrap();
        assert_eq!(slug.options.trim_mode, TrimMode::Both);
        assert_eq!(config.find("default").unwrap().options, SanitizeOptions::default());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let presets = vec![
            Preset {
                name: "a".to_string(),
                description: None,
                options: SanitizeOptions::default(),
            },
            Preset {
                name: "a".to_string(),
                description: None,
                options: SanitizeOptions {
                    replacement: "ab".to_string(),
                    ..Default::default()
                },
            },
        ];
        let msg = validate_presets(&presets).unwrap_err().to_string();
        assert!(msg.contains("Duplicate preset name found: 'a'."));
        assert!(msg.contains("exactly one character"));
    }
}
