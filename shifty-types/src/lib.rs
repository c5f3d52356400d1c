//! # Shifty Types
//!
//! This crate provides the type definitions shared by the shift-hijack filter and its configuration.
//!
//! ## Modules
//!
//! - [`keycode`] - HID keycodes and the tagged [`keycode::ModifiedKey`]
//! - [`modifier`] - Modifier bitfields: the HID report byte and the per-key combination
//! - [`shift_pair`] - A normal key and the key it is rewritten to while shift is held
//! - [`action`] - What a key position produces before the record processor sees it
//!
//! ## Integration
//!
//! - **shifty**: the firmware-side filter uses these types for its state and host calls
//! - **shifty-config**: configuration parsing produces these types

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod shift_pair;
