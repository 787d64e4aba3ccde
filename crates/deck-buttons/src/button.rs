//! Capabilities shared between buttons and the engine driving them.
//!
//! The engine sees every face as a [`Button`]. Buttons call back into the
//! engine through an [`UpdateHandler`] and into the application through an
//! [`ActionHandler`]. Plain closures implement both handler traits.

use std::sync::Arc;

use image::RgbaImage;

use crate::config::FaceSize;

/// A face the engine can place on a key, render and notify of presses.
pub trait Button: Send + Sync {
    /// Render the face as a `size` x `size` bitmap.
    fn render(&self, size: FaceSize) -> RgbaImage;

    /// Key position assigned by the engine.
    fn index(&self) -> usize;

    fn set_index(&mut self, index: usize);

    /// Give the button a hook to request that its key be redrawn.
    /// Replaces any previously registered handler.
    fn register_update_handler(&mut self, handler: Arc<dyn UpdateHandler>);

    /// Called by the engine when the key at [`Button::index`] goes down.
    fn pressed(&self);
}

/// Engine hook a button uses to ask for its key to be re-pushed.
///
/// Engines that should not be kept alive by their buttons register a
/// handler that holds a `Weak` reference back to themselves.
pub trait UpdateHandler: Send + Sync {
    fn notify(&self, button: &dyn Button);
}

impl<F> UpdateHandler for F
where
    F: Fn(&dyn Button) + Send + Sync,
{
    fn notify(&self, button: &dyn Button) {
        self(button)
    }
}

/// Application hook run when a button is pressed.
pub trait ActionHandler: Send + Sync {
    fn pressed(&self, button: &dyn Button);
}

impl<F> ActionHandler for F
where
    F: Fn(&dyn Button) + Send + Sync,
{
    fn pressed(&self, button: &dyn Button) {
        self(button)
    }
}
