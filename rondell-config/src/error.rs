use rondell_core::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid preset: {0}")]
    Invalid(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
