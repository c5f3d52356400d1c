//! Validation of the shifty configuration

use std::collections::HashMap;

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::{ShiftyTomlConfig, resolve_pair};

/// Validates the entire configuration
pub fn validate_config(config: &ShiftyTomlConfig) -> ConfigResult<()> {
    validate_pairs(config)?;
    Ok(())
}

/// Validates `shifty.pairs`: count, key names, and that every normal key triggers one pair only
fn validate_pairs(config: &ShiftyTomlConfig) -> ConfigResult<()> {
    let pairs = &config.shifty.pairs;
    if pairs.len() > defaults::SHIFT_PAIR_MAX_NUM_LIMIT {
        return Err(ConfigError::TooManyPairs {
            count: pairs.len(),
            max: defaults::SHIFT_PAIR_MAX_NUM_LIMIT,
        });
    }

    let mut triggers = HashMap::new();
    for (i, pair_config) in pairs.iter().enumerate() {
        let pair = resolve_pair(i, pair_config)?;

        for (field, key) in [("normal", pair.normal), ("shifted", pair.shifted)] {
            if key.key.is_modifier() {
                return Err(ConfigError::ModifierInPair {
                    field: format!("shifty.pairs[{}].{}", i, field),
                    key: key.key,
                });
            }
        }

        if let Some(first) = triggers.insert(pair.trigger(), i) {
            return Err(ConfigError::DuplicateTrigger {
                field: format!("shifty.pairs[{}].normal", i),
                key: pair.trigger(),
                first,
            });
        }
    }

    Ok(())
}
