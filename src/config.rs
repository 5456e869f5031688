//! Configuration file support.
//!
//! An optional TOML file supplies defaults for the command-line flags:
//!
//! ```toml
//! horizontal_frequency = 0.23
//! vertical_frequency = 0.1
//! force_color = false
//! random = false
//! use_locale = false
//! ```
//!
//! The file lives at `$LOLCAT_CONFIG` or `<config dir>/lolcat/config.toml`.
//! Flags given on the command line always win.

use crate::error::LolcatError;
use crate::rainbow::{DEFAULT_FREQ_H, DEFAULT_FREQ_V};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LOLCAT_CONFIG";

/// Persistent defaults for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Horizontal rainbow frequency
    pub horizontal_frequency: f64,
    /// Vertical rainbow frequency
    pub vertical_frequency: f64,
    /// Color even when stdout is not a terminal
    pub force_color: bool,
    /// Random palette offset
    pub random: bool,
    /// Use the system locale instead of UTF-8
    pub use_locale: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizontal_frequency: DEFAULT_FREQ_H,
            vertical_frequency: DEFAULT_FREQ_V,
            force_color: false,
            random: false,
            use_locale: false,
        }
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("lolcat").join("config.toml")),
        }
    }

    /// Load the config from its default location.
    ///
    /// A missing file yields the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LolcatError::Config`] when the file exists but cannot be
    /// read or parsed.
    pub fn load() -> Result<Self, LolcatError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LolcatError::Config`] on unreadable or malformed files.
    pub fn load_from(path: &Path) -> Result<Self, LolcatError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(LolcatError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        Self::parse(&content).map_err(|message| LolcatError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config file content.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }
}
