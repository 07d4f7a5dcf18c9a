//! Custom key behaviors for the NuMacroPad keypad.
//!
//! The crate owns the lighting mode of the RGB strip and the restart countdown,
//! independent of the firmware framework that scans the matrix and talks USB.
//! Collaborators (LED strip, display, reset, clock) are reached through the
//! traits in [`driver`] and `embedded_hal_async::delay::DelayNs`.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod behavior;
pub mod channel;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod event;
pub mod keypad;
pub mod light;
pub mod restart;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub use behavior::{KeyAction, KeyBehavior};
pub use color::Color;
pub use config::KeypadConfig;
pub use error::KeypadError;
pub use keypad::Keypad;
pub use light::{AnimationMode, LightingController};
pub use restart::RestartSequencer;

pub(crate) type RawMutex = CriticalSectionRawMutex;

/// Capacity of the key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the pass-through key channel
pub const FORWARD_CHANNEL_SIZE: usize = 16;
