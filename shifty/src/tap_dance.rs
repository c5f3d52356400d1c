//! Layer-tap tap dance.
//!
//! A [`KeyAction::LayerTapDance`](crate::types::action::KeyAction::LayerTapDance) key
//! is resolved once its dance is finished: when another key is pressed, or when the
//! caller reports that the tapping term has elapsed. The crate has no timer, so the
//! caller calls [`Keyboard::finish_tap_dance`](crate::keyboard::Keyboard::finish_tap_dance)
//! when its tapping term expires.

use shifty_types::keycode::ModifiedKey;

use crate::event::KeyEvent;
use crate::host::KeyboardHost;

/// What a finished dance turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDanceState {
    /// More than two taps, or no tap at all
    Unknown,
    SingleTap,
    SingleHold,
    DoubleSingleTap,
}

impl TapDanceState {
    /// Classify a dance from its tap count, whether another key interrupted it and
    /// whether the key is still down.
    pub fn classify(count: u8, interrupted: bool, pressed: bool) -> Self {
        match count {
            1 if interrupted || !pressed => TapDanceState::SingleTap,
            1 => TapDanceState::SingleHold,
            2 => TapDanceState::DoubleSingleTap,
            _ => TapDanceState::Unknown,
        }
    }
}

/// Progress of the dance of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    position: (u8, u8),
    layer: u8,
    key: ModifiedKey,
    count: u8,
    pressed: bool,
    interrupted: bool,
    finished: Option<TapDanceState>,
}

impl TapDance {
    /// Start a dance with the first press of the key at `event`'s position
    pub fn new(layer: u8, key: ModifiedKey, event: KeyEvent) -> Self {
        Self {
            position: (event.row, event.col),
            layer,
            key,
            count: 1,
            pressed: true,
            interrupted: false,
            finished: None,
        }
    }

    pub fn is_at(&self, event: KeyEvent) -> bool {
        self.position == (event.row, event.col)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    /// Another tap of the same key before the dance is finished
    pub fn tap(&mut self) {
        self.count = self.count.saturating_add(1);
        self.pressed = true;
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Resolve the dance and apply its result.
    ///
    /// Returns `true` if the dance is complete, i.e. the key was already released and
    /// the result has been reset too.
    pub fn finish<H: KeyboardHost>(&mut self, host: &mut H) -> bool {
        if self.finished.is_some() {
            return false;
        }
        let state = TapDanceState::classify(self.count, self.interrupted, self.pressed);
        debug!("Tap dance at {:?} finished as {:?}", self.position, state);
        match state {
            TapDanceState::SingleTap => host.register_modified(self.key),
            TapDanceState::SingleHold => host.activate_layer(self.layer),
            TapDanceState::DoubleSingleTap => {
                host.tap(self.key);
                host.register_modified(self.key);
            }
            TapDanceState::Unknown => {}
        }
        self.finished = Some(state);

        if !self.pressed {
            self.reset(host);
            return true;
        }
        false
    }

    /// The key was released.
    ///
    /// Returns `true` if the dance is complete.
    pub fn release<H: KeyboardHost>(&mut self, host: &mut H) -> bool {
        self.pressed = false;
        if self.finished.is_some() {
            self.reset(host);
            return true;
        }
        false
    }

    fn reset<H: KeyboardHost>(&self, host: &mut H) {
        match self.finished {
            Some(TapDanceState::SingleTap) | Some(TapDanceState::DoubleSingleTap) => {
                host.unregister_modified(self.key)
            }
            Some(TapDanceState::SingleHold) => host.deactivate_layer(self.layer),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_tap() {
        assert_eq!(TapDanceState::classify(1, false, false), TapDanceState::SingleTap);
        // Interrupted while still down is a tap as well
        assert_eq!(TapDanceState::classify(1, true, true), TapDanceState::SingleTap);
        assert_eq!(TapDanceState::classify(1, true, false), TapDanceState::SingleTap);
    }

    #[test]
    fn test_classify_single_hold() {
        assert_eq!(TapDanceState::classify(1, false, true), TapDanceState::SingleHold);
    }

    #[test]
    fn test_classify_double_tap() {
        assert_eq!(TapDanceState::classify(2, false, false), TapDanceState::DoubleSingleTap);
        assert_eq!(TapDanceState::classify(2, false, true), TapDanceState::DoubleSingleTap);
        assert_eq!(TapDanceState::classify(2, true, true), TapDanceState::DoubleSingleTap);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(TapDanceState::classify(0, false, false), TapDanceState::Unknown);
        assert_eq!(TapDanceState::classify(3, false, true), TapDanceState::Unknown);
        assert_eq!(TapDanceState::classify(u8::MAX, true, false), TapDanceState::Unknown);
    }

    #[test]
    fn test_dance_progress() {
        let mut dance = TapDance::new(1, ModifiedKey::new(shifty_types::keycode::HidKeyCode::Z), KeyEvent::press(0, 0));
        assert!(dance.is_at(KeyEvent::release(0, 0)));
        assert!(!dance.is_at(KeyEvent::press(0, 1)));
        assert!(!dance.is_finished());

        dance.tap();
        assert_eq!(dance.count(), 2);
    }
}
