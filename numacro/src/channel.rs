//! Exposed channels which can be used to share data across tasks

use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
pub use embassy_sync::{blocking_mutex, channel, signal};

use crate::event::{ForwardedKey, KeyEvent};
use crate::{EVENT_CHANNEL_SIZE, FORWARD_CHANNEL_SIZE, RawMutex};

/// Channel for key events coming from the input layer
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for pass-through keys, consumed by the HID layer
pub static FORWARD_CHANNEL: Channel<RawMutex, ForwardedKey, FORWARD_CHANNEL_SIZE> = Channel::new();
/// Signal raised by [`SignalReset`](crate::driver::SignalReset) when the device should reset
pub static RESET_SIGNAL: Signal<RawMutex, ()> = Signal::new();
