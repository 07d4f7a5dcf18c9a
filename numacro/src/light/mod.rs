//! RGB lighting mode control.
//!
//! The lighting key toggles the strip between a steady color and a breathing
//! rainbow on press, and flashes the whole strip green on release. The release
//! overlay never changes the selected mode.

mod animation;

use core::cell::RefCell;

use animation::Animation;

use crate::behavior::KeyBehavior;
use crate::color::Color;
use crate::config::LightConfig;
use crate::driver::LedStripDriver;

/// Animation mode of the RGB strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationMode {
    /// A single static color
    Steady,
    /// Hue cycling while the brightness breathes
    BreathingRainbow,
}

/// Owner of the animation mode of the strip.
///
/// The strip is borrowed, other behaviors may drive it too.
pub struct LightingController<'a, L: LedStripDriver> {
    mode: AnimationMode,
    strip: &'a RefCell<L>,
    animation: Animation,
}

impl<'a, L: LedStripDriver> LightingController<'a, L> {
    pub fn new(strip: &'a RefCell<L>, config: &LightConfig) -> Self {
        Self {
            mode: config.animation_mode,
            strip,
            animation: Animation::from_config(config),
        }
    }

    /// Current animation mode
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Toggle between the steady color and the breathing rainbow, returns the new mode.
    pub fn on_press(&mut self) -> AnimationMode {
        self.mode = match self.mode {
            AnimationMode::BreathingRainbow => {
                info!("Setting to Static");
                AnimationMode::Steady
            }
            AnimationMode::Steady => {
                info!("Setting to Rainbow");
                AnimationMode::BreathingRainbow
            }
        };
        self.animation.invalidate();
        self.mode
    }

    /// Show solid green on the whole strip, regardless of the mode.
    pub fn on_release(&mut self) -> Result<(), L::Error> {
        self.strip.borrow_mut().fill(Color::GREEN)
    }

    /// Draw the current mode again on the next animation step, after another
    /// behavior has painted over the strip.
    pub fn redraw(&mut self) {
        self.animation.invalidate();
    }

    /// Render one animation step of the current mode.
    ///
    /// In steady mode only the first step after a mode change touches the strip.
    pub fn animate(&mut self) -> Result<(), L::Error> {
        match self.animation.next_frame(self.mode) {
            Some(color) => self.strip.borrow_mut().fill(color),
            None => Ok(()),
        }
    }
}

impl<L: LedStripDriver> KeyBehavior for LightingController<'_, L> {
    type Error = L::Error;

    async fn on_press(&mut self) -> Result<(), Self::Error> {
        LightingController::on_press(self);
        Ok(())
    }

    async fn on_release(&mut self) -> Result<(), Self::Error> {
        LightingController::on_release(self)
    }
}
