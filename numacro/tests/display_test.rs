mod display_test {
    use core::convert::Infallible;

    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use numacro::driver::display::{FlushableDisplay, TextDisplay};
    use numacro::driver::{DisplaySink, TextEntry, XAnchor, YAnchor};

    /// 64x64 panel that counts flushes
    struct Panel {
        buffer: MockDisplay<BinaryColor>,
        flushes: usize,
    }

    impl Panel {
        fn new() -> Self {
            let mut buffer = MockDisplay::new();
            buffer.set_allow_overdraw(true);
            buffer.set_allow_out_of_bounds_drawing(true);
            Self { buffer, flushes: 0 }
        }

        /// Bounding box of the lit pixels: (min_x, min_y, max_x, max_y)
        fn lit_area(&self) -> Option<(i32, i32, i32, i32)> {
            let mut area: Option<(i32, i32, i32, i32)> = None;
            for y in 0..64 {
                for x in 0..64 {
                    if self.buffer.get_pixel(Point::new(x, y)) == Some(BinaryColor::On) {
                        area = Some(match area {
                            None => (x, y, x, y),
                            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                        });
                    }
                }
            }
            area
        }
    }

    impl OriginDimensions for Panel {
        fn size(&self) -> Size {
            self.buffer.size()
        }
    }

    impl DrawTarget for Panel {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.buffer.draw_iter(pixels)
        }
    }

    impl FlushableDisplay for Panel {
        fn flush_frame(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_centered_text() {
        let mut display = TextDisplay::new(Panel::new());
        display
            .clear_and_show("Hi", 32, 32, XAnchor::Middle, YAnchor::Middle)
            .unwrap();

        let (x0, y0, x1, y1) = display.inner().lit_area().expect("text is drawn");
        assert!(x0 >= 24 && x1 <= 40, "text is centered horizontally");
        assert!(y0 >= 24 && y1 <= 40, "text is centered vertically");
        assert_eq!(display.inner().flushes, 1);
    }

    #[test]
    fn test_top_left_text() {
        let mut display = TextDisplay::new(Panel::new());
        display.render(&[TextEntry::new("Hi", 0, 0)]).unwrap();

        let (x0, y0, _, _) = display.inner().lit_area().expect("text is drawn");
        assert!(x0 <= 2);
        assert!(y0 <= 4);
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut display = TextDisplay::new(Panel::new());
        display.render(&[TextEntry::new("Hi", 0, 0)]).unwrap();
        display
            .clear_and_show("Hi", 48, 48, XAnchor::Middle, YAnchor::Middle)
            .unwrap();

        let (x0, y0, _, _) = display.inner().lit_area().expect("text is drawn");
        assert!(x0 >= 36 && y0 >= 36, "old text is gone");
        assert_eq!(display.inner().flushes, 2);
    }

    #[test]
    fn test_render_multiple_entries() {
        let mut display = TextDisplay::new(Panel::new());
        display
            .render(&[TextEntry::new("A", 0, 0), TextEntry::new("B", 0, 40)])
            .unwrap();

        let (_, y0, _, y1) = display.inner().lit_area().expect("text is drawn");
        assert!(y0 <= 4);
        assert!(y1 >= 40);
        assert_eq!(display.inner().flushes, 1);
    }

    #[test]
    fn test_empty_render_clears() {
        let mut display = TextDisplay::new(Panel::new());
        display.render(&[TextEntry::new("Hi", 0, 0)]).unwrap();
        display.render(&[]).unwrap();
        assert_eq!(display.inner().lit_area(), None);
    }
}
