use heapless::Vec;
use shifty_types::action::KeyAction;
use shifty_types::keycode::HidKeyCode;
use shifty_types::modifier::HidModifiers;

use crate::channel::ReportChannel;
use crate::config::ShiftyConfig;
use crate::descriptor::KeyboardReport;
use crate::event::KeyEvent;
use crate::host::KeyboardHost;
use crate::processor::KeyProcessor;

/// Max number of matrix positions tracked as held
pub const MATRIX_MAX_HELD: usize = 32;

/// Number of layers of the keyboard
pub const NUM_LAYER: usize = 8;

/// Keyboard state as seen by the host: held matrix positions, the active layer and
/// the registered keys. Every change of the registered keys is sent as a
/// [`KeyboardReport`].
pub struct HidReporter<'a, const N: usize> {
    matrix: Vec<(u8, u8), MATRIX_MAX_HELD>,
    /// Layers activated on top of the default layer 0
    layer_state: [bool; NUM_LAYER],
    held_modifiers: HidModifiers,
    held_keycodes: [HidKeyCode; 6],
    last_report: KeyboardReport,
    report_channel: &'a ReportChannel<N>,
}

impl<'a, const N: usize> HidReporter<'a, N> {
    pub fn new(report_channel: &'a ReportChannel<N>) -> Self {
        Self {
            matrix: Vec::new(),
            layer_state: [false; NUM_LAYER],
            held_modifiers: HidModifiers::new(),
            held_keycodes: [HidKeyCode::No; 6],
            last_report: KeyboardReport::default(),
            report_channel,
        }
    }

    /// Make `layer` the only active layer
    pub fn set_layer(&mut self, layer: u8) {
        if layer as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer, NUM_LAYER);
            return;
        }
        self.layer_state = [false; NUM_LAYER];
        self.layer_state[layer as usize] = true;
    }

    /// Record the physical state change of a matrix position
    pub fn update_matrix(&mut self, event: KeyEvent) {
        let position = (event.row, event.col);
        if event.pressed {
            if !self.matrix.contains(&position) && self.matrix.push(position).is_err() {
                warn!("Too many keys held in matrix, ignoring {:?}", position);
            }
        } else {
            self.matrix.retain(|p| *p != position);
        }
    }

    /// The report of the currently registered keys
    pub fn report(&self) -> KeyboardReport {
        let mut keycodes = [0; 6];
        for (slot, key) in keycodes.iter_mut().zip(self.held_keycodes.iter()) {
            *slot = *key as u8;
        }
        KeyboardReport::new(self.held_modifiers.into_bits(), keycodes)
    }

    fn send_report(&mut self) {
        let report = self.report();
        if report == self.last_report {
            return;
        }
        self.last_report = report;
        if self.report_channel.try_send(report).is_err() {
            warn!("Keyboard report channel is full, dropping report");
        }
    }
}

impl<const N: usize> KeyboardHost for HidReporter<'_, N> {
    fn any_key_held(&self) -> bool {
        !self.matrix.is_empty()
    }

    fn modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    fn highest_layer(&self) -> u8 {
        self.layer_state.iter().rposition(|active| *active).unwrap_or(0) as u8
    }

    fn register_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers();
        } else if key != HidKeyCode::No && !self.held_keycodes.contains(&key) {
            match self.held_keycodes.iter_mut().find(|k| **k == HidKeyCode::No) {
                Some(slot) => *slot = key,
                None => warn!("No free slot in keyboard report, dropping {:?}", key),
            }
        }
        self.send_report();
    }

    fn unregister_key(&mut self, key: HidKeyCode) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers();
        } else if key != HidKeyCode::No {
            if let Some(slot) = self.held_keycodes.iter_mut().find(|k| **k == key) {
                *slot = HidKeyCode::No;
            }
        }
        self.send_report();
    }

    fn activate_layer(&mut self, layer: u8) {
        if layer as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer, NUM_LAYER);
            return;
        }
        self.layer_state[layer as usize] = true;
    }

    fn deactivate_layer(&mut self, layer: u8) {
        if layer as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer, NUM_LAYER);
            return;
        }
        self.layer_state[layer as usize] = false;
    }
}

/// A keyboard that runs every key event through the [`KeyProcessor`] before
/// registering it.
pub struct Keyboard<'a, const N: usize> {
    reporter: HidReporter<'a, N>,
    processor: KeyProcessor<'a>,
}

impl<'a, const N: usize> Keyboard<'a, N> {
    pub fn new(config: &'a ShiftyConfig, report_channel: &'a ReportChannel<N>) -> Self {
        Self {
            reporter: HidReporter::new(report_channel),
            processor: KeyProcessor::new(config),
        }
    }

    pub fn set_layer(&mut self, layer: u8) {
        self.reporter.set_layer(layer);
    }

    pub fn highest_layer(&self) -> u8 {
        self.reporter.highest_layer()
    }

    /// Whether shift is logically held
    pub fn shift_held(&self) -> bool {
        self.processor.shift_held()
    }

    /// The report of the currently registered keys
    pub fn report(&self) -> KeyboardReport {
        self.reporter.report()
    }

    /// Whether a tap dance is waiting for its tapping term to expire
    pub fn tap_dance_pending(&self) -> bool {
        self.processor.tap_dance_pending()
    }

    /// Finish the pending tap dance. Call it when the tapping term has elapsed since
    /// the last event of the dancing key.
    pub fn finish_tap_dance(&mut self) {
        self.processor.finish_tap_dance(&mut self.reporter);
    }

    /// Process the action of a matrix position whose state changed
    pub fn process_key(&mut self, action: KeyAction, event: KeyEvent) {
        // The matrix is scanned before the event reaches the processor
        self.reporter.update_matrix(event);

        if !self.processor.process_record(&mut self.reporter, action, event) {
            return;
        }

        if let KeyAction::Key(key) = action {
            if event.pressed {
                self.reporter.register_modified(key);
            } else {
                self.reporter.unregister_modified(key);
            }
        }
    }
}
