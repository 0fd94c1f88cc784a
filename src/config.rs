//! Picker configuration.
//!
//! Read from `config.toml` in the XDG config directory. Every field has a
//! default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STYLE_FILE_NAME: &str = "style.css";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Fixed card geometry used for layout and scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardGeometry {
    pub width: u32,
    pub height: u32,
    pub spacing: u32,
    pub scroll_margin: u32,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self {
            width: 300,
            height: 169,
            spacing: 15,
            scroll_margin: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Directory listed as the gallery.
    pub backgrounds_dir: PathBuf,
    /// Symlink repointed at the chosen wallpaper.
    pub current_link: PathBuf,
    /// Wallpaper command; the chosen path is appended as the last argument.
    pub command: Vec<String>,
    pub card: CardGeometry,
}

impl Default for PickerConfig {
    fn default() -> Self {
        let config_home = BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".config"));
        let current = config_home.join("omarchy").join("current");

        Self {
            backgrounds_dir: current.join("theme").join("backgrounds"),
            current_link: current.join("background"),
            command: ["swww", "img", "-t", "any"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            card: CardGeometry::default(),
        }
    }
}

impl PickerConfig {
    /// Directory holding `config.toml` and an optional `style.css`.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "wallpick", "wallpick").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.backgrounds_dir = expand_home(&config.backgrounds_dir);
        config.current_link = expand_home(&config.current_link);
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the user config, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(dir) = Self::config_dir() else {
            tracing::warn!("No home directory found, using default config");
            return Self::default();
        };
        let path = dir.join(CONFIG_FILE_NAME);
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(?config, "Loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "Invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// User stylesheet path, if one exists.
    pub fn user_style_path() -> Option<PathBuf> {
        Self::config_dir()
            .map(|dir| dir.join(STYLE_FILE_NAME))
            .filter(|path| path.exists())
    }
}

/// Expand a leading `~` component to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}
