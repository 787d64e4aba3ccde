//! Drawing rendered faces with embedded-graphics
//!
//! Engines that composite several keys into one framebuffer, or simulators
//! that show the whole deck in a window, can draw a rendered face onto any
//! [`DrawTarget`] with an `Rgb888` color.
//!
//! Keys are dark when nothing is lit, so alpha is composited over black.
//!
//! ## Example
//!
//! ```
//! use deck_buttons::{Button, FaceImage, FaceSize, ImageButton, TestDisplay};
//! use embedded_graphics_core::{prelude::*, pixelcolor::Rgb888};
//! use image::{Rgba, RgbaImage};
//!
//! let button = ImageButton::new(RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 255])));
//! let face = button.render(FaceSize::new(72)?);
//!
//! let mut display = TestDisplay::new(3 * 72, 72);
//! FaceImage::new(&face, Point::new(72, 0)).draw(&mut display).unwrap();
//! assert_ne!(display.pixel(100, 10), Some(Rgb888::BLACK));
//! assert_eq!(display.pixel(10, 10), Some(Rgb888::BLACK));
//! # Ok::<(), deck_buttons::Error>(())
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
    Drawable, Pixel,
};
use image::{Rgba, RgbaImage};

/// Draw `face` with its top-left corner at `origin`.
///
/// Pixels falling outside the target are left to the target to clip.
pub fn draw_face<D>(face: &RgbaImage, origin: Point, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let pixels = face.enumerate_pixels().map(|(x, y, pixel)| {
        Pixel(
            origin + Point::new(x as i32, y as i32),
            over_black(*pixel),
        )
    });
    target.draw_iter(pixels)
}

/// A rendered face placed on a target, usable like any other drawable
#[derive(Clone, Copy, Debug)]
pub struct FaceImage<'a> {
    face: &'a RgbaImage,
    origin: Point,
}

impl<'a> FaceImage<'a> {
    pub fn new(face: &'a RgbaImage, origin: Point) -> Self {
        Self { face, origin }
    }

    /// Area of the target this face covers
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            self.origin,
            Size::new(self.face.width(), self.face.height()),
        )
    }
}

impl Drawable for FaceImage<'_> {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        draw_face(self.face, self.origin, target)
    }
}

fn over_black(Rgba([r, g, b, a]): Rgba<u8>) -> Rgb888 {
    let scale = |channel: u8| ((channel as u16 * a as u16 + 127) / 255) as u8;
    Rgb888::new(scale(r), scale(g), scale(b))
}
