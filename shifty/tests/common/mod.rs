use log::debug;
use shifty::channel::ReportChannel;
use shifty::config::ShiftyConfig;
use shifty::descriptor::KeyboardReport;
use shifty::host::KeyboardHost;
use shifty::shift_pair::ShiftPairTable;
use shifty::types::keycode::HidKeyCode;
use shifty::types::modifier::HidModifiers;
use shifty::pair;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// mod key values
pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_LCTRL: u8 = 1 << 0;
pub const KC_LGUI: u8 = 1 << 3;

/// A host call made by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Register(HidKeyCode),
    Unregister(HidKeyCode),
}

/// A host that records every call and keeps just enough state to answer queries
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub keys_down: usize,
    pub layer: u8,
    pub modifiers: HidModifiers,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Host with `keys_down` physical keys held and left shift registered
    pub fn with_shift(keys_down: usize) -> Self {
        Self {
            keys_down,
            modifiers: HidModifiers::new().with_left_shift(true),
            ..Default::default()
        }
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn registered(&self) -> Vec<HidKeyCode> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Register(key) => Some(*key),
                HostCall::Unregister(_) => None,
            })
            .collect()
    }
}

impl KeyboardHost for RecordingHost {
    fn any_key_held(&self) -> bool {
        self.keys_down > 0
    }

    fn modifiers(&self) -> HidModifiers {
        self.modifiers
    }

    fn highest_layer(&self) -> u8 {
        self.layer
    }

    fn register_key(&mut self, key: HidKeyCode) {
        self.modifiers |= key.to_hid_modifiers();
        self.calls.push(HostCall::Register(key));
    }

    fn unregister_key(&mut self, key: HidKeyCode) {
        self.modifiers &= !key.to_hid_modifiers();
        self.calls.push(HostCall::Unregister(key));
    }

    fn activate_layer(&mut self, layer: u8) {
        self.layer = layer;
    }

    fn deactivate_layer(&mut self, layer: u8) {
        if self.layer == layer {
            self.layer = 0;
        }
    }
}

/// The pairs of the default layout: `/` -> `\`, `.` -> `?`, `,` -> `;`
pub fn default_pairs() -> ShiftPairTable {
    ShiftPairTable::from_pairs(&[pair!(b'/', b'\\'), pair!(b'.', b'?'), pair!(b',', b';')]).unwrap()
}

pub fn default_config() -> ShiftyConfig {
    ShiftyConfig::new(default_pairs())
}

/// Build an expected report from a modifier byte and held keys
pub fn report(modifier: u8, keys: &[HidKeyCode]) -> KeyboardReport {
    let mut keycodes = [0; 6];
    for (slot, key) in keycodes.iter_mut().zip(keys) {
        *slot = *key as u8;
    }
    KeyboardReport::new(modifier, keycodes)
}

/// Receive all reports queued in `channel`
pub fn drain_reports<const N: usize>(channel: &ReportChannel<N>) -> Vec<KeyboardReport> {
    let mut reports = Vec::new();
    while let Ok(report) = channel.try_receive() {
        debug!("Received report: {:?}", report);
        reports.push(report);
    }
    reports
}
