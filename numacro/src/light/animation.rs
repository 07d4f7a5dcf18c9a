use super::AnimationMode;
use crate::color::{Color, breathe8};
use crate::config::LightConfig;

/// Step state of the RGB animations
pub(crate) struct Animation {
    hue: u8,
    /// Position in the breathing cycle, range: 0 ~ 255
    pos: u8,
    /// Whether the steady color is already on the strip
    steady_drawn: bool,
    sat: u8,
    val: u8,
    val_limit: u8,
    speed: u8,
    breathe_center: f32,
}

impl Animation {
    pub(crate) fn from_config(config: &LightConfig) -> Self {
        Self {
            hue: config.hue_default,
            pos: 0,
            steady_drawn: false,
            sat: config.sat_default,
            val: config.val_default,
            val_limit: config.val_limit,
            speed: config.animation_speed,
            breathe_center: config.breathe_center,
        }
    }

    /// Redraw the steady color on the next step
    pub(crate) fn invalidate(&mut self) {
        self.steady_drawn = false;
    }

    /// Advance one step, returns the color to fill the strip with.
    ///
    /// `None` means the strip already shows the right frame.
    pub(crate) fn next_frame(&mut self, mode: AnimationMode) -> Option<Color> {
        match mode {
            AnimationMode::BreathingRainbow => {
                self.hue = self.hue.wrapping_add(self.speed);
                let val = breathe8(self.pos, self.val_limit, self.breathe_center);
                self.pos = self.pos.wrapping_add(self.speed);
                Some(Color::from_hsv(self.hue, self.sat, val))
            }
            AnimationMode::Steady => {
                if self.steady_drawn {
                    return None;
                }
                self.steady_drawn = true;
                Some(Color::from_hsv(self.hue, self.sat, self.val))
            }
        }
    }
}
