use serde::{Deserialize, Serialize};

use crate::keycode::{HidKeyCode, ModifiedKey};

/// A key that is rewritten while shift is held.
///
/// Without shift, pressing `normal` types `normal`. With shift, it types `shifted`
/// instead of the host's own shifted symbol, e.g. `(",", ";")` makes shift+comma
/// produce a semicolon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftPair {
    pub normal: ModifiedKey,
    pub shifted: ModifiedKey,
}

impl ShiftPair {
    pub const fn new(normal: ModifiedKey, shifted: ModifiedKey) -> Self {
        Self { normal, shifted }
    }

    /// The base keycode the pair is looked up by
    pub const fn trigger(&self) -> HidKeyCode {
        self.normal.key
    }

    /// Whether the shift modifier is restored to the tracked state when the key is released.
    ///
    /// Shift is left alone only when `normal` is unshifted and `shifted` carries shift.
    pub const fn restores_shift_on_release(&self) -> bool {
        self.normal.is_shifted() || !self.shifted.is_shifted()
    }
}
