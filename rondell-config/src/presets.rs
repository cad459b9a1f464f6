//! Preset file data model and lookup.

use std::collections::HashMap;

use rondell_model::{BannerConfig, RollingConfig, SlideshowConfig};
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Raw parsed contents of a preset file: named sections per engine kind.
#[derive(Debug, Default, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub rolling: HashMap<String, RollingConfig>,
    #[serde(default)]
    pub slideshow: HashMap<String, SlideshowConfig>,
    #[serde(default)]
    pub banner: HashMap<String, BannerConfig>,
}

/// Loaded presets, resolved by name and validated on lookup.
#[derive(Debug, Default)]
pub struct Presets {
    file: PresetFile,
}

impl Presets {
    pub fn from_file(file: PresetFile) -> Self {
        Self { file }
    }

    /// Resolve a rolling carousel preset, validated against the engine's
    /// configuration rules.
    ///
    /// Presets that omit `playground_range` (left at zero) are expected to
    /// be completed with [`RollingConfig::with_viewport`] before this call.
    pub fn rolling(&self, name: &str) -> Result<RollingConfig> {
        let config = self
            .file
            .rolling
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        rondell_core::rolling::validate(&config)?;
        Ok(config)
    }

    /// Resolve a rolling preset without validating, for callers that derive
    /// the playground range from a viewport they only learn later.
    pub fn rolling_raw(&self, name: &str) -> Result<RollingConfig> {
        self.file
            .rolling
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Resolve a slideshow preset.
    pub fn slideshow(&self, name: &str) -> Result<SlideshowConfig> {
        self.file
            .slideshow
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Resolve a banner preset.
    pub fn banner(&self, name: &str) -> Result<BannerConfig> {
        self.file
            .banner
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Names of all rolling presets in the file.
    pub fn rolling_names(&self) -> Vec<&str> {
        self.file.rolling.keys().map(String::as_str).collect()
    }
}
