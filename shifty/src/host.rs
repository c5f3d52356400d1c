//! The interface the filter uses to observe and drive the keyboard.

use shifty_types::keycode::{HidKeyCode, ModifiedKey};
use shifty_types::modifier::HidModifiers;

const MODIFIER_KEYS: [HidKeyCode; 8] = [
    HidKeyCode::LCtrl,
    HidKeyCode::LShift,
    HidKeyCode::LAlt,
    HidKeyCode::LGui,
    HidKeyCode::RCtrl,
    HidKeyCode::RShift,
    HidKeyCode::RAlt,
    HidKeyCode::RGui,
];

/// Modifier keycodes whose bit is set in `modifiers`, in report bit order
fn modifier_keys(modifiers: HidModifiers) -> impl Iterator<Item = HidKeyCode> {
    let bits = modifiers.into_bits();
    MODIFIER_KEYS
        .into_iter()
        .enumerate()
        .filter(move |(i, _)| bits & (1u8 << *i) != 0)
        .map(|(_, key)| key)
}

/// The keyboard the filter runs in.
///
/// The firmware owns matrix scanning, the layer stack and the HID reports. The filter
/// only queries their state, registers or unregisters keys, and switches layers
/// through this trait.
pub trait KeyboardHost {
    /// Whether any key of the physical matrix is currently down
    fn any_key_held(&self) -> bool;

    /// Modifiers currently registered with the host
    fn modifiers(&self) -> HidModifiers;

    /// The highest active layer
    fn highest_layer(&self) -> u8;

    /// Register a key with the host
    fn register_key(&mut self, key: HidKeyCode);

    /// Unregister a key from the host
    fn unregister_key(&mut self, key: HidKeyCode);

    fn activate_layer(&mut self, layer: u8);

    fn deactivate_layer(&mut self, layer: u8);

    /// Register or unregister left shift
    fn set_shift(&mut self, shifted: bool) {
        if shifted {
            self.register_key(HidKeyCode::LShift);
        } else {
            self.unregister_key(HidKeyCode::LShift);
        }
    }

    /// Register the modifiers attached to `key`, then the key itself
    fn register_modified(&mut self, key: ModifiedKey) {
        for modifier in modifier_keys(key.modifiers.to_hid_modifiers()) {
            self.register_key(modifier);
        }
        self.register_key(key.key);
    }

    /// Unregister `key`, then the modifiers attached to it
    fn unregister_modified(&mut self, key: ModifiedKey) {
        self.unregister_key(key.key);
        for modifier in modifier_keys(key.modifiers.to_hid_modifiers()) {
            self.unregister_key(modifier);
        }
    }

    /// Press and release `key` with its modifiers
    fn tap(&mut self, key: ModifiedKey) {
        self.register_modified(key);
        self.unregister_modified(key);
    }
}
