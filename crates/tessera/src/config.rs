//! Configuration file.
//!
//! Loaded once during common setup. A missing file is created with the
//! defaults so users have something to edit.
//!
//! ```toml
//! [pipeline]
//! reinterpolate_clamped = true
//! trace_culling = false
//!
//! [sprites]
//! warn_on_fallback = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Quad pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Append a re-interpolator after every clamp stage.
    pub reinterpolate_clamped: bool,
    /// Log each culled quad at trace level.
    pub trace_culling: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reinterpolate_clamped: true,
            trace_culling: false,
        }
    }
}

/// Sprite lookup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Log uv lookups that fall back to the missing sprite at warn level.
    pub warn_on_fallback: bool,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            warn_on_fallback: true,
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseraConfig {
    /// `[pipeline]` section.
    pub pipeline: PipelineConfig,
    /// `[sprites]` section.
    pub sprites: SpriteConfig,
}

impl TesseraConfig {
    /// Parses configuration TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads `path`, or writes the defaults there if it does not exist.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read or created,
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let text = fs::read_to_string(path).map_err(io_err)?;
            let config = Self::from_toml_str(&text)?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            return Ok(config);
        }

        let config = Self::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, config.to_toml_string()?).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "default configuration written");
        Ok(config)
    }
}
