//! Configuration of the shift-hijack filter.
//!
//! The config is a `[shifty]` section in TOML:
//!
//! ```toml
//! [shifty]
//! base_layer = 0
//! host_os = "linux"  # linux, windows or macos
//! pairs = [
//!   { normal = "/", shifted = "\\" },
//!   { normal = ".", shifted = "?" },
//!   { normal = ",", shifted = ";" },
//! ]
//! ```
//!
//! See [`keycode_alias::parse_key`] for the accepted key names.

pub mod defaults;
pub mod error;
pub mod keycode_alias;
pub mod validation;

use std::path::Path;
use std::str::FromStr;

use config::{Config, File, FileFormat};
use serde_derive::Deserialize;
use shifty_types::action::HostOs;
use shifty_types::shift_pair::ShiftPair;

use crate::error::{ConfigError, ConfigResult};
use crate::keycode_alias::parse_key;

/// Configurations for the shift-hijack filter.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ShiftyTomlConfig {
    #[serde(default)]
    pub shifty: ShiftyConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShiftyConfig {
    /// Layer on which shift pairs are hijacked
    #[serde(default = "default_base_layer")]
    pub base_layer: u8,
    /// Host OS, selects the chords of editing shortcuts
    #[serde(default)]
    pub host_os: HostOsConfig,
    #[serde(default)]
    pub pairs: Vec<ShiftPairConfig>,
}

impl Default for ShiftyConfig {
    fn default() -> Self {
        Self {
            base_layer: defaults::BASE_LAYER,
            host_os: HostOsConfig::default(),
            pairs: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOsConfig {
    #[default]
    Linux,
    Windows,
    #[serde(alias = "mac", alias = "osx")]
    Macos,
}

impl From<HostOsConfig> for HostOs {
    fn from(os: HostOsConfig) -> Self {
        match os {
            HostOsConfig::Linux => HostOs::Linux,
            HostOsConfig::Windows => HostOs::Windows,
            HostOsConfig::Macos => HostOs::MacOs,
        }
    }
}

/// A shift pair as written in the config
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShiftPairConfig {
    pub normal: String,
    pub shifted: String,
}

fn default_base_layer() -> u8 {
    defaults::BASE_LAYER
}

impl FromStr for ShiftyTomlConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::from_toml("<string>", s)
    }
}

impl ShiftyTomlConfig {
    /// Load the config file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&format!("'{}'", path.display()), &content)
    }

    /// Parse `content`, layered on top of the default config
    fn from_toml(origin: &str, content: &str) -> ConfigResult<Self> {
        Config::builder()
            .add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })
    }

    pub fn base_layer(&self) -> u8 {
        self.shifty.base_layer
    }

    pub fn host_os(&self) -> HostOs {
        self.shifty.host_os.into()
    }

    /// Validate the config and resolve its shift pairs, in config order
    pub fn shift_pairs(&self) -> ConfigResult<Vec<ShiftPair>> {
        validation::validate_config(self)?;
        self.shifty
            .pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| resolve_pair(i, pair))
            .collect()
    }
}

/// Resolve the key names of the `i`th pair
pub(crate) fn resolve_pair(i: usize, pair: &ShiftPairConfig) -> ConfigResult<ShiftPair> {
    let resolve = |field: &str, value: &str| {
        parse_key(value).ok_or_else(|| ConfigError::UnknownKey {
            field: format!("shifty.pairs[{}].{}", i, field),
            name: value.to_string(),
        })
    };
    Ok(ShiftPair::new(
        resolve("normal", &pair.normal)?,
        resolve("shifted", &pair.shifted)?,
    ))
}
