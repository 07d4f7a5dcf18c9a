//! Collaborator interfaces of the keypad behaviors, plus adapters for common drivers.

pub mod display;
pub mod led_strip;
pub mod reset;

pub use display::{DisplaySink, TextEntry, XAnchor, YAnchor};
pub use led_strip::{LedStripDriver, SmartLedStrip};
pub use reset::{ResetRequester, SignalReset, SystemReset};
