use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::Color;

/// Whole-strip access to an addressable LED strip.
///
/// Behaviors never address single LEDs, they fill the strip and commit the frame.
pub trait LedStripDriver {
    type Error;

    /// Set every LED of the pending frame to `color`
    fn set_all(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Write the pending frame to the strip
    fn commit(&mut self) -> Result<(), Self::Error>;

    /// Fill the strip with `color` and show it immediately
    fn fill(&mut self, color: Color) -> Result<(), Self::Error> {
        self.set_all(color)?;
        self.commit()
    }
}

/// [`LedStripDriver`] over any `smart-leds` writer, e.g. a WS2812 driver.
pub struct SmartLedStrip<W: SmartLedsWrite<Color = RGB8>, const N: usize> {
    writer: W,
    frame: [RGB8; N],
}

impl<W: SmartLedsWrite<Color = RGB8>, const N: usize> SmartLedStrip<W, N> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
        }
    }

    /// The pending frame
    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }
}

impl<W: SmartLedsWrite<Color = RGB8>, const N: usize> LedStripDriver for SmartLedStrip<W, N> {
    type Error = W::Error;

    fn set_all(&mut self, color: Color) -> Result<(), Self::Error> {
        self.frame.fill(color.into());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.writer.write(self.frame.iter().copied())
    }
}
