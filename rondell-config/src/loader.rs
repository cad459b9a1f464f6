//! Preset file discovery and parsing.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::presets::{PresetFile, Presets};

/// File name tried when no explicit path or environment override is given.
pub const DEFAULT_PRESETS_FILE: &str = "rondell.toml";

/// Environment variable overriding the preset file path.
pub const PRESETS_ENV_VAR: &str = "RONDELL_PRESETS";

/// Load presets from an explicit file path.
pub fn load_path(path: impl AsRef<Path>) -> Result<Presets> {
    let raw = fs::read_to_string(path.as_ref())?;
    load_str(&raw)
}

/// Parse presets from TOML source.
pub fn load_str(raw: &str) -> Result<Presets> {
    let file: PresetFile = toml::from_str(raw)?;
    Ok(Presets::from_file(file))
}

/// Load presets from the `RONDELL_PRESETS` path when set, falling back to
/// `rondell.toml` in the working directory.
pub fn load_default() -> Result<Presets> {
    let path =
        std::env::var(PRESETS_ENV_VAR).unwrap_or_else(|_| DEFAULT_PRESETS_FILE.to_string());
    log::debug!("loading layout presets from {path}");
    load_path(path)
}
