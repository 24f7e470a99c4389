//! The main config loading module for fileexplorer.
//!
//! Handles loading and deserializing settings from `fx.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing file silently yields the defaults; a broken one is reported and also
//! falls back to the defaults.

use crate::config::{General, InternalGeneral, WidgetProps};
use crate::core::Navigator;
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    widget: WidgetProps,
}

/// Processed configuration used by the binary and the component.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    widget: WidgetProps,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            widget: raw.widget,
        }
    }
}

impl Config {
    /// Load configuration from [Config::default_path].
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "error parsing config: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read config: {}", e);
                Self::default()
            }
        }
    }

    /// Parse configuration from toml text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn widget(&self) -> &WidgetProps {
        &self.widget
    }

    #[inline]
    pub fn navigator(&self) -> Navigator {
        self.general.navigator()
    }

    /// Determine the default configuration file path.
    /// Checks the FX_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/fx/fx.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FX_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("fx/fx.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/fx/fx.toml");
        }
        PathBuf::from("fx.toml")
    }

    /// Write the default configuration file. Fails if the file already exists.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        tracing::info!(path = %path.display(), "default config generated");
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# fx.toml - default configuration for fileexplorer
# Commented values are the internal defaults.

[general]
# Directory shown when the widget mounts. "~" is expanded.
# Defaults to the process working directory.
# start_dir = "~"
# Treat symlinks to directories as directories.
# follow_symlinks = true

# Passed to the host unchanged.
[widget]
# label = "Files"
# placeholder = ""
# show_label = true
# scale = 1
# min_width = 160
# visible = true
# elem_id = "explorer"
# elem_classes = ["explorer"]
# render = true
# key = "explorer"
"##;
