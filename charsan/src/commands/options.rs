//! Resolves the effective `SanitizeOptions` from presets and CLI overrides.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::path::Path;

use charsan_core::{merge_presets, preset_candidate_paths, PresetConfig, SanitizeOptions, TrimMode};

/// Per-field overrides taken from the command line.
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub charset: Option<String>,
    pub replacement: Option<String>,
    pub trim_mode: Option<TrimMode>,
}

/// Loads the built-in presets merged with a user preset file.
///
/// An explicit `config` path must load. Without one, the first existing
/// candidate path is used, if any.
pub fn load_presets(config: Option<&Path>) -> Result<PresetConfig> {
    let defaults = PresetConfig::load_default_presets()?;

    let user = match config {
        Some(path) => Some(PresetConfig::load_from_file(path)?),
        None => match preset_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                info!("Found user presets at {}", path.display());
                Some(PresetConfig::load_from_file(&path)?)
            }
            None => None,
        },
    };

    Ok(merge_presets(defaults, user))
}

/// Picks `preset` from `presets` and applies `overrides` on top.
pub fn resolve_options(presets: &PresetConfig, preset: &str, overrides: OptionOverrides) -> Result<SanitizeOptions> {
    let base = presets.find(preset).ok_or_else(|| {
        let known: Vec<&str> = presets.presets.iter().map(|p| p.name.as_str()).collect();
        anyhow!("Unknown preset '{}'. Available presets: {}", preset, known.join(", "))
    })?;

    let mut options = base.options.clone();
    if let Some(charset) = overrides.charset {
        options.charset = charset;
    }
    if let Some(replacement) = overrides.replacement {
        options.replacement = replacement;
    }
    if let Some(trim_mode) = overrides.trim_mode {
        options.trim_mode = trim_mode;
    }

    debug!("Resolved options from preset '{}': {:?}", preset, options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preset_with_overrides() {
        let presets = PresetConfig::load_default_presets().unwrap();
        let options = resolve_options(
            &presets,
            "slug",
            OptionOverrides {
                replacement: Some("_".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(options.charset, "a-z0-9");
        assert_eq!(options.replacement, "_");
        assert_eq!(options.trim_mode, TrimMode::Both);
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let presets = PresetConfig::load_default_presets().unwrap();
        let err = resolve_options(&presets, "nope", OptionOverrides::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown preset 'nope'"));
        assert!(msg.contains("slug"));
    }
}
