//! The shift-hijack filter.
//!
//! For a key found in the [`ShiftPairTable`], the filter decides what the host sees:
//!
//! - press, shift not held: the pair's `normal` key, with shift set to `normal`'s own shift flag
//! - press, shift held: the pair's `shifted` key, with shift set to `shifted`'s own shift flag
//! - release: both keys of the pair are released, then shift is put back to the tracked state
//!   unless [`ShiftPair::restores_shift_on_release`] says otherwise
//!
//! Only the shift flag of a pair's keys is applied; other attached modifiers are ignored.

use shifty_types::keycode::HidKeyCode;
use shifty_types::shift_pair::ShiftPair;

use crate::event::KeyEvent;
use crate::host::KeyboardHost;
use crate::shift_pair::ShiftPairTable;
use crate::tracker::ShiftTracker;

/// What the caller should do with the event after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterResult {
    /// The filter registered the replacement itself, the event must not be processed further
    Handled,
    /// The event was not touched
    PassThrough,
}

impl FilterResult {
    pub fn is_handled(self) -> bool {
        self == FilterResult::Handled
    }
}

pub struct ShiftHijack<'a> {
    pairs: &'a ShiftPairTable,
}

impl<'a> ShiftHijack<'a> {
    pub fn new(pairs: &'a ShiftPairTable) -> Self {
        Self { pairs }
    }

    /// Filter one key event.
    ///
    /// `key` is the base keycode the event would register, `enabled` is whether
    /// hijacking is active for the current layer. The tracker is updated even when
    /// hijacking is disabled.
    pub fn process<H: KeyboardHost>(
        &self,
        tracker: &mut ShiftTracker,
        host: &mut H,
        key: HidKeyCode,
        event: KeyEvent,
        enabled: bool,
    ) -> FilterResult {
        tracker.track(host, event);

        if !enabled {
            return FilterResult::PassThrough;
        }

        match self.pairs.get(key) {
            Some(pair) => {
                self.hijack(pair, tracker.shift_held(), host, event);
                FilterResult::Handled
            }
            None => FilterResult::PassThrough,
        }
    }

    fn hijack<H: KeyboardHost>(&self, pair: &ShiftPair, shift_held: bool, host: &mut H, event: KeyEvent) {
        if event.pressed {
            let output = if shift_held { pair.shifted } else { pair.normal };
            debug!(
                "Hijack {:?}: shift held {}, registering {:?}",
                pair.trigger(),
                shift_held,
                output
            );
            host.set_shift(output.is_shifted());
            // Re-register so that a key already down is sent again
            host.unregister_key(output.key);
            host.register_key(output.key);
        } else {
            host.unregister_key(pair.normal.key);
            host.unregister_key(pair.shifted.key);
            if pair.restores_shift_on_release() {
                host.set_shift(shift_held);
            }
        }
    }
}
