use embassy_time::Duration;

use crate::driver::display::{TextEntry, XAnchor, YAnchor};
use crate::light::AnimationMode;

/// The config struct for the keypad behaviors.
///
/// There are 3 parts:
/// 1. `LightConfig`: RGB strip animation defaults.
/// 2. `DisplayConfig`: The idle splash screen of the OLED.
/// 3. `RestartConfig`: Text and timing of the restart countdown.
#[derive(Clone, Debug, Default)]
pub struct KeypadConfig {
    pub light: LightConfig,
    pub display: DisplayConfig,
    pub restart: RestartConfig,
}

/// Config for the RGB strip animation
#[derive(Clone, Debug)]
pub struct LightConfig {
    /// Mode that is active at startup
    pub animation_mode: AnimationMode,
    /// Default hue, range: 0 ~ 255
    pub hue_default: u8,
    /// Default saturation, range: 0 ~ 255
    pub sat_default: u8,
    /// Default brightness, range: 0 ~ 255
    pub val_default: u8,
    /// Upper bound of the breathing brightness
    pub val_limit: u8,
    /// Hue and breathing position advance per animation step
    pub animation_speed: u8,
    /// Resting point of the breathing curve, higher is darker
    pub breathe_center: f32,
    /// Interval between two animation steps
    pub refresh_interval: Duration,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            animation_mode: AnimationMode::BreathingRainbow,
            hue_default: 172,
            sat_default: 255,
            val_default: 128,
            val_limit: 128,
            animation_speed: 1,
            breathe_center: 2.0,
            refresh_interval: Duration::from_millis(16),
        }
    }
}

/// Config for the OLED display
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    /// Entries shown while the keypad is idle
    pub splash: &'static [TextEntry<'static>],
}

static DEFAULT_SPLASH: [TextEntry<'static>; 2] = [
    TextEntry::new("NuMacroPad", 0, 0),
    TextEntry::new("By: Link270", 0, 12),
];

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            splash: &DEFAULT_SPLASH,
        }
    }
}

/// Config for the restart countdown
#[derive(Clone, Debug)]
pub struct RestartConfig {
    /// Message revealed by the countdown
    pub message: &'static str,
    /// Character used for the part of the message not revealed yet
    pub padding: char,
    /// How long each intermediate frame stays on screen
    pub frame_hold: Duration,
    /// How long the full message stays on screen before the reset
    pub final_hold: Duration,
    pub x: i32,
    pub y: i32,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
    /// Ignore a release that was not preceded by a press
    pub require_arm: bool,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            message: "Restarting Keyboard!",
            padding: '.',
            frame_hold: Duration::from_millis(100),
            final_hold: Duration::from_millis(500),
            x: 64,
            y: 16,
            x_anchor: XAnchor::Middle,
            y_anchor: YAnchor::Middle,
            require_arm: true,
        }
    }
}
