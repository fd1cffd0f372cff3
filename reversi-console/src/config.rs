use std::fs;
use std::io;
use std::path::Path;

use reversi_grid::Glyphs;
use tracing::warn;

use crate::error::ConfigError;
use crate::input::Dimensions;

/// Top-level console configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub glyphs: GlyphConfig,
}

/// Board size. Both edges must be set for the size prompt to be skipped.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
}

impl BoardConfig {
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions {
            rows: self.rows?,
            columns: self.columns?,
        })
    }
}

/// Characters used to draw cells; the player glyphs double as the coin typed
/// at each turn.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub empty: char,
    pub dark: char,
    pub light: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Glyphs::default().into()
    }
}

impl From<Glyphs> for GlyphConfig {
    fn from(glyphs: Glyphs) -> Self {
        GlyphConfig {
            empty: glyphs.empty,
            dark: glyphs.dark,
            light: glyphs.light,
        }
    }
}

impl From<&GlyphConfig> for Glyphs {
    fn from(config: &GlyphConfig) -> Self {
        Glyphs {
            empty: config.empty,
            dark: config.dark,
            light: config.light,
        }
    }
}

impl AppConfig {
    /// Read and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileRead { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                warn!(path = %path.display(), "no config file, playing with defaults");
                Ok(Self::default())
            }
            loaded => loaded,
        }
    }

    /// Validate configuration values. Board dimensions are left to the grid,
    /// which reports them when the session starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GlyphConfig { empty, dark, light } = self.glyphs;

        if [empty, dark, light]
            .iter()
            .any(|&glyph| glyph.is_whitespace() || glyph == ',')
        {
            return Err(ConfigError::Validation(
                "glyphs must not be whitespace or ','".into(),
            ));
        }
        if empty == dark || empty == light || dark == light {
            return Err(ConfigError::Validation(
                "glyphs.empty, glyphs.dark and glyphs.light must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("cannot serialize defaults: {e}")))
    }
}
