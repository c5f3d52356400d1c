use std::fmt;

use shifty_types::keycode::HidKeyCode;

/// Everything that can be wrong with a shifty config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file can't be read
    Io { path: String, message: String },
    /// Not TOML, or a value of the wrong type
    Parse { origin: String, message: String },
    /// A key string that is neither a character, a key name nor `S(<key>)`
    UnknownKey { field: String, name: String },
    /// Modifiers can't be part of a shift pair
    ModifierInPair { field: String, key: HidKeyCode },
    /// The normal key of a pair is already the normal key of pair `first`
    DuplicateTrigger { field: String, key: HidKeyCode, first: usize },
    /// More pairs than the firmware's pair table holds
    TooManyPairs { count: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(f, "can't read '{}': {}", path, message),
            ConfigError::Parse { origin, message } => write!(f, "can't parse {}: {}", origin, message),
            ConfigError::UnknownKey { field, name } => write!(
                f,
                "{}: unknown key '{}', expected a single character, a key name or S(<key>)",
                field, name
            ),
            ConfigError::ModifierInPair { field, key } => {
                write!(f, "{}: modifier key {:?} can't be used in a shift pair", field, key)
            }
            ConfigError::DuplicateTrigger { field, key, first } => {
                write!(f, "{}: key {:?} is already used by shifty.pairs[{}]", field, key, first)
            }
            ConfigError::TooManyPairs { count, max } => {
                write!(f, "shifty.pairs: {} pairs given, at most {} are supported", count, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;
