//! Image-backed button faces for Stream Deck style controllers.
//!
//! A deck engine enumerates keys, polls for presses and pushes bitmaps to
//! the hardware. This crate supplies the faces it drives: an [`ImageButton`]
//! holds a picture from the application and scales it onto a key whenever
//! the engine asks, requests a redraw when the picture changes, and forwards
//! presses to an application handler.
//!
//! ```
//! use std::sync::Arc;
//! use deck_buttons::{Button, FaceSize, ImageButton};
//! use image::{Rgba, RgbaImage};
//!
//! let mut button = ImageButton::new(RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255])));
//! button.set_index(4);
//! button.register_update_handler(Arc::new(|b: &dyn Button| {
//!     let _face = b.render(FaceSize::new(72).unwrap());
//!     // push `_face` to key `b.index()`
//! }));
//! button.set_action_handler(Arc::new(|b: &dyn Button| {
//!     println!("key {} pressed", b.index());
//! }));
//!
//! button.set_image(RgbaImage::from_pixel(50, 50, Rgba([0, 0, 255, 255])));
//! button.pressed();
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

pub mod button;
pub mod config;
pub mod error;
pub mod image_button;

#[cfg(feature = "graphics")]
#[cfg_attr(docsrs, doc(cfg(feature = "graphics")))]
pub mod graphics;
#[cfg(feature = "graphics")]
#[cfg_attr(docsrs, doc(cfg(feature = "graphics")))]
pub mod test_display;

pub use button::{ActionHandler, Button, UpdateHandler};
pub use config::{FaceSize, Resampling};
pub use error::Error;
pub use image_button::ImageButton;

#[cfg(feature = "graphics")]
pub use graphics::{draw_face, FaceImage};
#[cfg(feature = "graphics")]
pub use test_display::TestDisplay;
