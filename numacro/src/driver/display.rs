//! Text output to the status display.

#[cfg(feature = "display")]
pub use graphics::{FlushableDisplay, TextDisplay};

/// Horizontal anchor of a text entry, relative to its `x` coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum XAnchor {
    #[default]
    Left,
    Middle,
    Right,
}

/// Vertical anchor of a text entry, relative to its `y` coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum YAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A positioned line of text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextEntry<'a> {
    pub text: &'a str,
    pub x: i32,
    pub y: i32,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
}

impl<'a> TextEntry<'a> {
    /// Text entry anchored at its top left corner
    pub const fn new(text: &'a str, x: i32, y: i32) -> Self {
        Self {
            text,
            x,
            y,
            x_anchor: XAnchor::Left,
            y_anchor: YAnchor::Top,
        }
    }

    pub const fn anchored(mut self, x_anchor: XAnchor, y_anchor: YAnchor) -> Self {
        self.x_anchor = x_anchor;
        self.y_anchor = y_anchor;
        self
    }
}

/// A display that shows text entries.
///
/// Each render replaces everything shown before and is visible when the call returns.
pub trait DisplaySink {
    type Error;

    /// Clear the display, draw `entries` and push the result to the panel
    fn render(&mut self, entries: &[TextEntry<'_>]) -> Result<(), Self::Error>;

    /// Replace the displayed content with a single text entry
    fn clear_and_show(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        x_anchor: XAnchor,
        y_anchor: YAnchor,
    ) -> Result<(), Self::Error> {
        self.render(&[TextEntry::new(text, x, y).anchored(x_anchor, y_anchor)])
    }
}

#[cfg(feature = "display")]
mod graphics {
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

    use super::{DisplaySink, TextEntry, XAnchor, YAnchor};

    /// A monochrome draw target with an off-screen buffer that has to be pushed to the panel.
    pub trait FlushableDisplay: DrawTarget<Color = BinaryColor> {
        /// Push the buffer to the panel
        fn flush_frame(&mut self) -> Result<(), Self::Error>;
    }

    #[cfg(feature = "ssd1306")]
    impl<DI, SIZE> FlushableDisplay for ssd1306::Ssd1306<DI, SIZE, ssd1306::mode::BufferedGraphicsMode<SIZE>>
    where
        DI: display_interface::WriteOnlyDataCommand,
        SIZE: ssd1306::size::DisplaySize,
    {
        fn flush_frame(&mut self) -> Result<(), Self::Error> {
            self.flush()
        }
    }

    impl From<XAnchor> for Alignment {
        fn from(anchor: XAnchor) -> Self {
            match anchor {
                XAnchor::Left => Alignment::Left,
                XAnchor::Middle => Alignment::Center,
                XAnchor::Right => Alignment::Right,
            }
        }
    }

    impl From<YAnchor> for Baseline {
        fn from(anchor: YAnchor) -> Self {
            match anchor {
                YAnchor::Top => Baseline::Top,
                YAnchor::Middle => Baseline::Middle,
                YAnchor::Bottom => Baseline::Bottom,
            }
        }
    }

    /// [`DisplaySink`] drawing text with a 6x10 monospace font on an embedded-graphics target.
    pub struct TextDisplay<D: FlushableDisplay> {
        display: D,
    }

    impl<D: FlushableDisplay> TextDisplay<D> {
        pub fn new(display: D) -> Self {
            Self { display }
        }

        pub fn inner(&self) -> &D {
            &self.display
        }

        pub fn inner_mut(&mut self) -> &mut D {
            &mut self.display
        }
    }

    impl<D: FlushableDisplay> DisplaySink for TextDisplay<D> {
        type Error = D::Error;

        fn render(&mut self, entries: &[TextEntry<'_>]) -> Result<(), Self::Error> {
            self.display.clear(BinaryColor::Off)?;
            let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
            for entry in entries {
                let text_style = TextStyleBuilder::new()
                    .alignment(entry.x_anchor.into())
                    .baseline(entry.y_anchor.into())
                    .build();
                Text::with_text_style(entry.text, Point::new(entry.x, entry.y), character_style, text_style)
                    .draw(&mut self.display)?;
            }
            self.display.flush_frame()
        }
    }
}
