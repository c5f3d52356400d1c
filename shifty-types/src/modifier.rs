use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// The modifier byte of a HID keyboard report, one bit per physical modifier key.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidModifiers {
    /// `true` when no modifier bit is set
    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }
}

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// `true` when neither of ctrl, shift, alt and gui is set
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }

    pub fn from_hid_modifiers(modifiers: HidModifiers) -> Self {
        Self::new_from(
            modifiers.right_shift() || modifiers.right_ctrl() || modifiers.right_alt() || modifiers.right_gui(),
            modifiers.left_gui() || modifiers.right_gui(),
            modifiers.left_alt() || modifiers.right_alt(),
            modifiers.left_shift() || modifiers.right_shift(),
            modifiers.left_ctrl() || modifiers.right_ctrl(),
        )
    }

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_to_hid_modifiers() {
        assert_eq!(SHIFT.to_hid_modifiers(), HidModifiers::new().with_left_shift(true));
        assert_eq!(
            (SHIFT | RIGHT).to_hid_modifiers(),
            HidModifiers::new().with_right_shift(true)
        );
        assert_eq!(
            (CTRL | SHIFT).to_hid_modifiers().into_bits(),
            0b0000_0011
        );
    }

    #[test]
    fn test_combination_from_hid_modifiers() {
        let hid = HidModifiers::new().with_right_alt(true).with_left_shift(true);
        let combination = ModifierCombination::from_hid_modifiers(hid);
        assert!(combination.alt());
        assert!(combination.shift());
        assert!(combination.right());
        assert!(!combination.ctrl());
    }

    #[test]
    fn test_empty() {
        assert!(HidModifiers::new().is_empty());
        assert!(!HidModifiers::new().with_right_gui(true).is_empty());
        assert!(ModifierCombination::new().is_empty());
        assert!(RIGHT.is_empty());
        assert!(!GUI.is_empty());
    }
}
