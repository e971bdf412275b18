//! Configuration (monogram.yaml) parsing.
//!
//! Every field is optional; command-line flags override what is loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::FileAssets;
use crate::error::{MonogramError, Result};
use crate::render::TemplateStyle;

/// Config filename looked up by `Config::discover`.
pub const CONFIG_FILENAME: &str = "monogram.yaml";

/// Avatar generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label font (TrueType/OpenType). Without it no avatar can be drawn.
    pub font: Option<PathBuf>,

    /// Vector template to fill.
    pub style: TemplateStyle,

    /// Default output size in pixels.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Output directory for generated avatars.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_size() -> u32 {
    64
}

fn default_output() -> PathBuf {
    PathBuf::from("avatars")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: None,
            style: TemplateStyle::default(),
            size: default_size(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load config from a monogram.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MonogramError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        // Relative font paths are relative to the config file.
        if let (Some(font), Some(dir)) = (&config.font, path.parent()) {
            if font.is_relative() {
                config.font = Some(dir.join(font));
            }
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| MonogramError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.size == 0 {
            return Err(MonogramError::Config {
                message: "size must be at least 1".to_string(),
                help: None,
            });
        }
        Ok(config)
    }

    /// Load `monogram.yaml` from `dir`, or defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Asset resolver for the configured font.
    pub fn assets(&self) -> Result<FileAssets> {
        self.font.as_ref().map(FileAssets::new).ok_or_else(|| MonogramError::Config {
            message: "no label font configured".to_string(),
            help: Some(format!("Pass --font or set `font:` in {}", CONFIG_FILENAME)),
        })
    }
}
