use shifty_types::action::{EditShortcut, HostOs};
use shifty_types::keycode::{HidKeyCode, ModifiedKey};
use shifty_types::modifier::{CTRL, GUI, SHIFT};

/// The chord an editing shortcut types on `os`
pub fn resolve_shortcut(shortcut: EditShortcut, os: HostOs) -> ModifiedKey {
    let mac = os == HostOs::MacOs;
    match shortcut {
        EditShortcut::Copy => ModifiedKey::with_modifiers(HidKeyCode::Insert, CTRL),
        EditShortcut::Cut => ModifiedKey::with_modifiers(HidKeyCode::Delete, SHIFT),
        EditShortcut::Paste => ModifiedKey::with_modifiers(HidKeyCode::Insert, SHIFT),
        EditShortcut::Undo if mac => ModifiedKey::with_modifiers(HidKeyCode::Z, GUI),
        EditShortcut::Undo => ModifiedKey::with_modifiers(HidKeyCode::Z, CTRL),
        EditShortcut::Redo if mac => ModifiedKey::with_modifiers(HidKeyCode::Z, SHIFT | GUI),
        EditShortcut::Redo => ModifiedKey::with_modifiers(HidKeyCode::Z, SHIFT | CTRL),
        EditShortcut::FindNext if mac => ModifiedKey::with_modifiers(HidKeyCode::G, GUI),
        EditShortcut::FindNext => ModifiedKey::new(HidKeyCode::F3),
        EditShortcut::FindPrev if mac => ModifiedKey::with_modifiers(HidKeyCode::G, SHIFT | GUI),
        EditShortcut::FindPrev => ModifiedKey::shifted(HidKeyCode::F3),
    }
}
