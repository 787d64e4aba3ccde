//! Button face backed by an application-supplied image.

use core::fmt;
use std::sync::Arc;

use image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use log::{debug, trace};

use crate::button::{ActionHandler, Button, UpdateHandler};
use crate::config::{FaceSize, Resampling};

/// A key showing an arbitrary picture, scaled to fill the key.
///
/// The source image keeps its own resolution; it is only resampled when the
/// engine asks for a bitmap. Aspect ratio is not preserved: the result
/// always covers the whole square.
///
/// ```
/// use deck_buttons::{Button, FaceSize, ImageButton};
/// use image::{Rgba, RgbaImage};
///
/// let red = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
/// let button = ImageButton::new(red);
///
/// let face = button.render(FaceSize::new(32)?);
/// assert_eq!(face.dimensions(), (32, 32));
/// # Ok::<(), deck_buttons::Error>(())
/// ```
pub struct ImageButton {
    index: usize,
    image: DynamicImage,
    resampling: Resampling,
    update_handler: Option<Arc<dyn UpdateHandler>>,
    action_handler: Option<Arc<dyn ActionHandler>>,
}

impl ImageButton {
    pub fn new(image: impl Into<DynamicImage>) -> Self {
        Self {
            index: 0,
            image: image.into(),
            resampling: Resampling::default(),
            update_handler: None,
            action_handler: None,
        }
    }

    /// Use a different filter than Lanczos3 when rendering
    pub fn with_resampling(mut self, resampling: Resampling) -> Self {
        self.resampling = resampling;
        self
    }

    pub fn resampling(&self) -> Resampling {
        self.resampling
    }

    /// Current source image, at its original resolution
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Swap in a new source image and ask the engine to redraw the key.
    ///
    /// The update handler runs synchronously, so this returns only after the
    /// engine's refresh path has. Without a handler the image is still
    /// replaced and the next render picks it up.
    pub fn set_image(&mut self, image: impl Into<DynamicImage>) {
        self.image = image.into();
        debug!(
            "button {}: image replaced ({}x{})",
            self.index,
            self.image.width(),
            self.image.height()
        );

        if let Some(handler) = self.update_handler.as_ref() {
            handler.notify(&*self);
        }
    }

    /// Set what happens when the key is pressed. Replaces any previous handler.
    pub fn set_action_handler(&mut self, handler: Arc<dyn ActionHandler>) {
        debug!("button {}: action handler set", self.index);
        self.action_handler = Some(handler);
    }
}

impl Button for ImageButton {
    fn render(&self, size: FaceSize) -> RgbaImage {
        let edge = size.get();
        let (width, height) = self.image.dimensions();
        trace!(
            "button {}: rendering {}x{} source at {}",
            self.index,
            width,
            height,
            size
        );

        // The resampler cannot sample an empty source
        if width == 0 || height == 0 {
            return RgbaImage::new(edge, edge);
        }

        imageops::resize(&self.image, edge, edge, self.resampling.into())
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn register_update_handler(&mut self, handler: Arc<dyn UpdateHandler>) {
        debug!("button {}: update handler registered", self.index);
        self.update_handler = Some(handler);
    }

    fn pressed(&self) {
        match self.action_handler.as_ref() {
            Some(handler) => {
                debug!("button {}: pressed", self.index);
                handler.pressed(self);
            }
            None => trace!("button {}: pressed with no action handler", self.index),
        }
    }
}

impl fmt::Debug for ImageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageButton")
            .field("index", &self.index)
            .field("image", &self.image.dimensions())
            .field("resampling", &self.resampling)
            .field("update_handler", &self.update_handler.is_some())
            .field("action_handler", &self.action_handler.is_some())
            .finish()
    }
}
