use crate::event::KeyEvent;
use crate::host::KeyboardHost;

/// Tracks whether left shift is logically held.
///
/// The hijack filter toggles the registered shift modifier while it types a pair's
/// replacement key, so the host's modifier state can't tell whether the user is
/// still holding shift. The tracker keeps that answer across those toggles. It is
/// only set while some key of the matrix is down, and is cleared as soon as the
/// matrix goes idle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftTracker {
    shift_held: bool,
}

impl ShiftTracker {
    pub const fn new() -> Self {
        Self { shift_held: false }
    }

    /// Whether shift is logically held
    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Update the tracked state for an incoming event.
    ///
    /// Must be called before the event is registered with the host.
    pub fn track<H: KeyboardHost>(&mut self, host: &mut H, event: KeyEvent) {
        if !host.any_key_held() {
            host.set_shift(false);
            if self.shift_held {
                trace!("Matrix idle, clearing tracked shift");
            }
            self.shift_held = false;
        } else if host.modifiers().left_shift() {
            if event.pressed {
                self.shift_held = true;
            } else {
                if host.modifiers().is_empty() {
                    host.set_shift(false);
                }
                self.shift_held = false;
            }
        }
    }
}
