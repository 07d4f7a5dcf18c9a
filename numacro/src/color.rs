//! Colors and the 8-bit math used by the lighting animations.

use core::f32::consts::E;

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

/// A single RGB color, 8 bits per channel.
///
/// The value is fixed once constructed, build a new one to change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert a hue/saturation/value triple to RGB.
    pub fn from_hsv(hue: u8, sat: u8, val: u8) -> Self {
        hsv2rgb(Hsv { hue, sat, val }).into()
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }
}

impl From<RGB8> for Color {
    fn from(value: RGB8) -> Self {
        Self::new(value.r, value.g, value.b)
    }
}

impl From<Color> for RGB8 {
    fn from(value: Color) -> Self {
        RGB8::new(value.r, value.g, value.b)
    }
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Brightness of a breathing animation at position `pos` of its 0..=255 cycle.
///
/// Follows `(exp(sin(pos / 255 * pi)) - center / e) * limit / (e - 1 / e)`,
/// the curve commonly used for breathing LEDs. `center` moves the resting
/// brightness: larger values give a darker trough.
pub fn breathe8(pos: u8, limit: u8, center: f32) -> u8 {
    let x = pos as f32 / 255.0;
    let sined = sin_pi(x);
    let level = (exp_unit(sined) - center / E) * (limit as f32 / (E - 1.0 / E));
    // Float to int casts saturate, negative levels become 0
    level as u8
}

/// `sin(x * pi)` for `x` in `0.0..=1.0`, Bhaskara I's approximation.
fn sin_pi(x: f32) -> f32 {
    let d = x * (1.0 - x);
    16.0 * d / (5.0 - 4.0 * d)
}

/// `exp(y)` for `y` in `0.0..=1.0`.
fn exp_unit(y: f32) -> f32 {
    // Horner form of the Taylor series up to y^6, error < 3e-4 on the range
    1.0 + y * (1.0 + y / 2.0 * (1.0 + y / 3.0 * (1.0 + y / 4.0 * (1.0 + y / 5.0 * (1.0 + y / 6.0)))))
}
