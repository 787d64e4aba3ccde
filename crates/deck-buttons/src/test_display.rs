//! Test display that allows pixel overdraw.
//!
//! `MockDisplay` from embedded-graphics panics when a pixel is drawn twice,
//! which doesn't work when a deck is cleared and then has faces drawn over
//! it. This simple RGB framebuffer allows overdraw and can be read back.

use embedded_graphics_core::{pixelcolor::Rgb888, prelude::*};

/// Simple RGB framebuffer display for tests that allows overdraw.
pub struct TestDisplay {
    pixels: Vec<Rgb888>,
    width: u32,
    height: u32,
}

impl TestDisplay {
    /// Create a new black test display with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    /// Color at `(x, y)`, or `None` outside the display.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_allows_overdraw() {
        let mut display = TestDisplay::new(10, 10);

        display.clear(Rgb888::WHITE).unwrap();
        display
            .draw_iter([Pixel(Point::new(3, 4), Rgb888::RED)])
            .unwrap();

        assert_eq!(display.pixel(3, 4), Some(Rgb888::RED));
        assert_eq!(display.pixel(0, 0), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_display_reads_outside_as_none() {
        let display = TestDisplay::new(2, 3);
        assert_eq!(display.size(), Size::new(2, 3));
        assert_eq!(display.pixel(2, 0), None);
        assert_eq!(display.pixel(0, 3), None);
    }
}
