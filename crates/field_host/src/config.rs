//! Host configuration.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! mask_glyph = "•"
//! default_autocomplete = "current-password"
//! single_line = true
//! ```

use field_core::{DEFAULT_MASK_GLYPH, StoreOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_AUTOCOMPLETE: &str = "new-password";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Glyph rendered in place of every real character.
    pub mask_glyph: char,
    /// Autocomplete hint rendered when the field's props do not set one.
    pub default_autocomplete: String,
    /// Strip CR/LF from inserted data.
    pub single_line: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mask_glyph: DEFAULT_MASK_GLYPH,
            default_autocomplete: DEFAULT_AUTOCOMPLETE.to_string(),
            single_line: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    InvalidMaskGlyph(char),
    EmptyAutocomplete,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
            ConfigError::InvalidMaskGlyph(c) => {
                write!(f, "mask glyph {c:?} must be a visible character")
            }
            ConfigError::EmptyAutocomplete => write!(f, "default_autocomplete must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl FieldConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mask_glyph.is_whitespace() || self.mask_glyph.is_control() {
            return Err(ConfigError::InvalidMaskGlyph(self.mask_glyph));
        }
        if self.default_autocomplete.trim().is_empty() {
            return Err(ConfigError::EmptyAutocomplete);
        }
        Ok(())
    }

    /// The subset of the config the editing core cares about.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            mask_glyph: self.mask_glyph,
            single_line: self.single_line,
        }
    }
}
