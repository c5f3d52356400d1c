/// Create a normal key. For example, `k!(A)` represents `KeyAction::Key(ModifiedKey::new(HidKeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Key($crate::types::keycode::ModifiedKey::new(
            $crate::types::keycode::HidKeyCode::$k,
        ))
    };
}

/// Create a key with shift attached. For example, `s!(Slash)` types `?`
#[macro_export]
macro_rules! s {
    ($k: ident) => {
        $crate::types::action::KeyAction::Key($crate::types::keycode::ModifiedKey::shifted(
            $crate::types::keycode::HidKeyCode::$k,
        ))
    };
}

/// Create an editing shortcut action. For example, `sc!(Copy)`
#[macro_export]
macro_rules! sc {
    ($s: ident) => {
        $crate::types::action::KeyAction::Shortcut($crate::types::action::EditShortcut::$s)
    };
}

/// Create a layer-tap tap dance from a layer and a [`ModifiedKey`](crate::types::keycode::ModifiedKey).
/// For example, `td!(1, ModifiedKey::new(HidKeyCode::Z))` types `z` on tap and activates layer 1 on hold
#[macro_export]
macro_rules! td {
    ($layer: expr, $key: expr) => {
        $crate::types::action::KeyAction::LayerTapDance {
            layer: $layer,
            key: $key,
        }
    };
}

/// Create a shift pair from two en-US characters. For example, `pair!(b',', b';')`
#[macro_export]
macro_rules! pair {
    ($normal: expr, $shifted: expr) => {
        $crate::types::shift_pair::ShiftPair::new(
            $crate::types::keycode::ModifiedKey::from_ascii($normal),
            $crate::types::keycode::ModifiedKey::from_ascii($shifted),
        )
    };
}
