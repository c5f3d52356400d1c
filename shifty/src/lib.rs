//! # Shifty
//!
//! A per-keystroke filter that rewrites the shifted symbol of selected keys.
//!
//! The filter runs inside the keyboard's record processing, before a keycode is
//! registered with the host. For every configured [`ShiftPair`] it replaces the
//! host's own shifted symbol of `normal` with `shifted`, e.g. shift+`,` types `;`.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod descriptor;
pub mod event;
pub mod hijack;
pub mod host;
pub mod keyboard;
pub mod layout_macro;
pub mod processor;
pub mod shift_pair;
pub mod shortcut;
pub mod tap_dance;
pub mod tracker;

pub use shifty_types as types;
pub use shifty_types::action::{EditShortcut, HostOs, KeyAction};
pub use shifty_types::keycode::{HidKeyCode, ModifiedKey};
pub use shifty_types::shift_pair::ShiftPair;

/// The mutex used by the channels of the crate
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
