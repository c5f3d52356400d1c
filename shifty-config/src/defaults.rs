//! Default values and limits of the shifty configuration

/// Max number of shift pairs, same as the capacity of the firmware's pair table
pub const SHIFT_PAIR_MAX_NUM_LIMIT: usize = 16;

/// Default layer on which shift pairs are hijacked
pub const BASE_LAYER: u8 = 0;

/// Default config, user config files are layered on top of it
pub const DEFAULT_CONFIG: &str = include_str!("default_config/shifty.toml");
