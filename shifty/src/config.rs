use shifty_types::action::HostOs;

use crate::shift_pair::ShiftPairTable;

/// Config of the record processor
#[derive(Clone, Debug, Default)]
pub struct ShiftyConfig {
    /// Layer on which shift pairs are hijacked, other layers pass keys through
    pub base_layer: u8,
    /// Host OS, selects the chords of editing shortcuts
    pub host_os: HostOs,
    pub shift_pairs: ShiftPairTable,
}

impl ShiftyConfig {
    pub fn new(shift_pairs: ShiftPairTable) -> Self {
        Self {
            shift_pairs,
            ..Default::default()
        }
    }
}
