pub mod common;

use embassy_sync::channel::Channel;
use shifty::channel::ReportChannel;
use shifty::config::ShiftyConfig;
use shifty::event::KeyEvent;
use shifty::keyboard::Keyboard;
use shifty::types::action::HostOs;
use shifty::types::keycode::HidKeyCode::*;
use shifty::{k, s, sc};

use crate::common::{KC_LCTRL, KC_LGUI, KC_LSHIFT, default_config, drain_reports, report};

// Matrix positions
const SHIFT_POS: (u8, u8) = (3, 0);
const COMMA_POS: (u8, u8) = (2, 7);
const DOT_POS: (u8, u8) = (2, 8);
const A_POS: (u8, u8) = (1, 0);

fn press(position: (u8, u8)) -> KeyEvent {
    KeyEvent::press(position.0, position.1)
}

fn release(position: (u8, u8)) -> KeyEvent {
    KeyEvent::release(position.0, position.1)
}

#[test]
fn test_comma_without_shift() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(Comma), press(COMMA_POS));
    keyboard.process_key(k!(Comma), release(COMMA_POS));

    assert_eq!(drain_reports(&channel), [report(0, &[Comma]), report(0, &[])]);
    assert!(!keyboard.shift_held());
}

#[test]
fn test_shift_comma_types_semicolon() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Comma), press(COMMA_POS));
    assert!(keyboard.shift_held());
    keyboard.process_key(k!(Comma), release(COMMA_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            // shift is dropped while `;` is typed
            report(0, &[]),
            report(0, &[Semicolon]),
            report(0, &[]),
            // and restored after the release
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
    assert!(!keyboard.shift_held());
}

#[test]
fn test_shift_dot_types_question_mark() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Dot), press(DOT_POS));
    keyboard.process_key(k!(Dot), release(DOT_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT, &[Slash]),
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_repeated_hijack_while_shift_held() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    for _ in 0..2 {
        keyboard.process_key(k!(Comma), press(COMMA_POS));
        keyboard.process_key(k!(Comma), release(COMMA_POS));
    }
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    let reports = drain_reports(&channel);
    let semicolons = reports.iter().filter(|r| r.keycodes[0] == Semicolon as u8).count();
    assert_eq!(semicolons, 2);
    assert!(!reports.iter().any(|r| r.keycodes[0] == Comma as u8));
    assert_eq!(reports.last(), Some(&report(0, &[])));
}

#[test]
fn test_other_layer_passes_through() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);
    keyboard.set_layer(1);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Comma), press(COMMA_POS));
    keyboard.process_key(k!(Comma), release(COMMA_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    // Plain shift+comma, i.e. `<`
    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT, &[Comma]),
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_custom_base_layer() {
    let config = ShiftyConfig {
        base_layer: 2,
        ..default_config()
    };
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Comma), press(COMMA_POS));
    assert_eq!(keyboard.report(), report(KC_LSHIFT, &[Comma]));
    keyboard.process_key(k!(Comma), release(COMMA_POS));

    keyboard.set_layer(2);
    keyboard.process_key(k!(Comma), press(COMMA_POS));
    assert_eq!(keyboard.report(), report(0, &[Semicolon]));
}

#[test]
fn test_unpaired_keys_register_normally() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(A), press(A_POS));
    keyboard.process_key(k!(A), release(A_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT, &[A]),
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_modified_key_pass_through() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(s!(Kc1), press(A_POS));
    keyboard.process_key(s!(Kc1), release(A_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT, &[Kc1]),
            // The matrix is idle on release, shift is cleared before the key is unregistered
            report(0, &[Kc1]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_shortcut_undo_on_linux() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(sc!(Undo), press(A_POS));
    keyboard.process_key(sc!(Undo), release(A_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LCTRL, &[]),
            report(KC_LCTRL, &[Z]),
            report(KC_LCTRL, &[]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_shortcut_redo_on_mac() {
    let config = ShiftyConfig {
        host_os: HostOs::MacOs,
        ..default_config()
    };
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(sc!(Redo), press(A_POS));
    keyboard.process_key(sc!(Redo), release(A_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT | KC_LGUI, &[]),
            report(KC_LSHIFT | KC_LGUI, &[Z]),
            report(KC_LSHIFT | KC_LGUI, &[]),
            report(KC_LGUI, &[]),
            report(0, &[]),
        ]
    );
}

#[test]
fn test_report_channel_full() {
    let config = default_config();
    let channel: ReportChannel<2> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(A), press(A_POS));
    keyboard.process_key(k!(A), release(A_POS));

    // The third report is dropped, the state is still tracked
    assert_eq!(drain_reports(&channel).len(), 2);
    assert_eq!(keyboard.report(), report(KC_LSHIFT, &[]));
}

#[test]
fn test_layer_change_while_hijacked_key_held() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Comma), press(COMMA_POS));
    assert_eq!(keyboard.report(), report(0, &[Semicolon]));

    // The release is resolved against the layer the key was pressed on
    keyboard.set_layer(1);
    keyboard.process_key(k!(Comma), release(COMMA_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(0, &[]),
            report(0, &[Semicolon]),
            report(0, &[]),
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
    assert_eq!(keyboard.report(), report(0, &[]));
}

#[test]
fn test_layer_change_while_plain_key_held() {
    let config = default_config();
    let channel: ReportChannel<16> = Channel::new();
    let mut keyboard = Keyboard::new(&config, &channel);
    keyboard.set_layer(1);

    keyboard.process_key(k!(LShift), press(SHIFT_POS));
    keyboard.process_key(k!(Comma), press(COMMA_POS));

    // Back on the base layer, the key pressed on layer 1 is released as it was registered
    keyboard.set_layer(0);
    keyboard.process_key(k!(Comma), release(COMMA_POS));
    keyboard.process_key(k!(LShift), release(SHIFT_POS));

    assert_eq!(
        drain_reports(&channel),
        [
            report(KC_LSHIFT, &[]),
            report(KC_LSHIFT, &[Comma]),
            report(KC_LSHIFT, &[]),
            report(0, &[]),
        ]
    );
}
