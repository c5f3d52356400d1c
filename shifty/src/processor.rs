use heapless::Vec;
use heapless::index_map::FnvIndexMap;
use shifty_types::action::KeyAction;
use shifty_types::keycode::{HidKeyCode, ModifiedKey};

use crate::config::ShiftyConfig;
use crate::event::KeyEvent;
use crate::hijack::ShiftHijack;
use crate::host::KeyboardHost;
use crate::shortcut::resolve_shortcut;
use crate::tap_dance::TapDance;
use crate::tracker::ShiftTracker;

/// Max number of hijacked keys held at the same time, must be a power of 2
pub const HIJACKED_MAX_HELD: usize = 8;

/// Max number of tap dances in progress, only one of them can be unfinished
pub const TAP_DANCE_MAX_NUM: usize = 4;

/// User-level record processing, run for every key event before the keyboard registers it.
pub struct KeyProcessor<'a> {
    config: &'a ShiftyConfig,
    tracker: ShiftTracker,
    /// Matrix positions whose press was hijacked, with the key they were looked up by.
    /// Their release goes through the filter on whatever layer is active by then.
    hijacked: FnvIndexMap<(u8, u8), HidKeyCode, HIJACKED_MAX_HELD>,
    tap_dances: Vec<TapDance, TAP_DANCE_MAX_NUM>,
}

impl<'a> KeyProcessor<'a> {
    pub fn new(config: &'a ShiftyConfig) -> Self {
        Self {
            config,
            tracker: ShiftTracker::new(),
            hijacked: FnvIndexMap::new(),
            tap_dances: Vec::new(),
        }
    }

    /// Whether shift is logically held
    pub fn shift_held(&self) -> bool {
        self.tracker.shift_held()
    }

    /// Whether a tap dance is waiting for its tapping term to expire
    pub fn tap_dance_pending(&self) -> bool {
        self.tap_dances.iter().any(|dance| !dance.is_finished())
    }

    /// Finish the pending tap dance, called when its tapping term has expired
    pub fn finish_tap_dance<H: KeyboardHost>(&mut self, host: &mut H) {
        self.tap_dances.retain_mut(|dance| dance.is_finished() || !dance.finish(host));
    }

    /// Process one key event.
    ///
    /// Returns `true` if the keyboard should go on registering `action` as usual,
    /// `false` if the event has been fully handled here.
    pub fn process_record<H: KeyboardHost>(&mut self, host: &mut H, action: KeyAction, event: KeyEvent) -> bool {
        // Pressing another key interrupts a pending dance
        if event.pressed {
            self.tap_dances.retain_mut(|dance| {
                if dance.is_at(event) || dance.is_finished() {
                    return true;
                }
                dance.interrupt();
                !dance.finish(host)
            });
        }

        if self.process_shift_pair(host, action, event) {
            return false;
        }

        match action {
            KeyAction::Shortcut(shortcut) => {
                if event.pressed {
                    let chord = resolve_shortcut(shortcut, self.config.host_os);
                    debug!("Shortcut {:?} on {:?}: tap {:?}", shortcut, self.config.host_os, chord);
                    host.tap(chord);
                }
                false
            }
            KeyAction::LayerTapDance { layer, key } => {
                self.process_tap_dance(host, layer, key, event);
                false
            }
            _ => true,
        }
    }

    /// Run the shift-hijack filter, returns whether the event was handled
    fn process_shift_pair<H: KeyboardHost>(&mut self, host: &mut H, action: KeyAction, event: KeyEvent) -> bool {
        let position = (event.row, event.col);
        let hijack = ShiftHijack::new(&self.config.shift_pairs);

        if !event.pressed {
            if let Some(key) = self.hijacked.remove(&position) {
                return hijack
                    .process(&mut self.tracker, host, key, event, true)
                    .is_handled();
            }
        }

        let key = match action {
            KeyAction::Key(key) => key.key,
            _ => HidKeyCode::No,
        };
        // A release is hijacked only if its press was
        let enabled = event.pressed && host.highest_layer() == self.config.base_layer;
        let handled = hijack
            .process(&mut self.tracker, host, key, event, enabled)
            .is_handled();
        if handled && self.hijacked.insert(position, key).is_err() {
            warn!("Too many hijacked keys held, {:?} is released as a normal key", position);
        }
        handled
    }

    fn process_tap_dance<H: KeyboardHost>(&mut self, host: &mut H, layer: u8, key: ModifiedKey, event: KeyEvent) {
        match self.tap_dances.iter().position(|dance| dance.is_at(event)) {
            Some(i) if event.pressed => {
                if !self.tap_dances[i].is_finished() {
                    self.tap_dances[i].tap();
                }
            }
            Some(i) => {
                if self.tap_dances[i].release(host) {
                    self.tap_dances.swap_remove(i);
                }
            }
            None if event.pressed => {
                if self.tap_dances.push(TapDance::new(layer, key, event)).is_err() {
                    warn!("Too many tap dances in progress, ignoring {:?}", (event.row, event.col));
                }
            }
            None => {}
        }
    }
}
