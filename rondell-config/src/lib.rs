//! # Rondell Config
//!
//! Preset loading for the Rondell layout engines: named layout
//! configurations in a TOML file, resolved and validated before they reach
//! an engine.
//!
//! ```toml
//! [rolling.hero]
//! card_width = 450.0
//! card_height = 550.0
//! total_cards = 8
//!
//! [slideshow.legs]
//! total_slides = 6
//! wrap = "finite"
//! ```
//!
//! Load order: an explicit path via [`load_path`], or [`load_default`]
//! which honors the `RONDELL_PRESETS` environment variable before falling
//! back to `rondell.toml` in the working directory.

#![allow(missing_docs)]

pub mod error;
pub mod loader;
pub mod presets;

pub use error::{ConfigError, Result};
pub use loader::{DEFAULT_PRESETS_FILE, PRESETS_ENV_VAR, load_default, load_path, load_str};
pub use presets::{PresetFile, Presets};
