//! Channels used by the keyboard

use embassy_sync::channel::Channel;

use crate::RawMutex;
use crate::descriptor::KeyboardReport;

pub const REPORT_CHANNEL_SIZE: usize = 16;

/// Channel the [`Keyboard`](crate::keyboard::Keyboard) sends its HID reports to
pub type ReportChannel<const N: usize = REPORT_CHANNEL_SIZE> = Channel<RawMutex, KeyboardReport, N>;
