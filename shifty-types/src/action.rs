//! Key actions.
//!
//! An action is what a key position produces before the record processor sees it:
//! a plain (possibly modified) key, an editing shortcut whose chord depends on the
//! host operating system, or a tap dance that either types a key or holds a layer.

use serde::{Deserialize, Serialize};

use crate::keycode::ModifiedKey;

/// The action bound to a key position
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    #[default]
    No,
    /// A key, registered with its attached modifiers
    Key(ModifiedKey),
    /// An editing shortcut, tapped on press
    Shortcut(EditShortcut),
    /// Tap dance: a single tap types `key`, a hold activates `layer`, and a double
    /// tap types `key` once and then holds it
    LayerTapDance { layer: u8, key: ModifiedKey },
}

/// Editing shortcuts that resolve to a different chord on each host OS
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditShortcut {
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
    FindNext,
    FindPrev,
}

/// Operating system of the connected host
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostOs {
    #[default]
    Linux,
    Windows,
    MacOs,
}
