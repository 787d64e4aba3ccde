//! Error types for button faces
//!
//! Rendering and image replacement cannot fail once their inputs are
//! constructed, so the only error here guards the one input that can be
//! wrong: the requested key size.
//!
//! ## Example
//!
//! ```
//! use deck_buttons::{Error, FaceSize};
//!
//! let result = FaceSize::new(0);
//! assert!(matches!(result, Err(Error::InvalidFaceSize { size: 0 })));
//! ```

/// Errors produced while configuring a button face
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key bitmap must be at least one pixel wide
    #[error("invalid face size {size}: key bitmaps must be at least 1x1 pixels")]
    InvalidFaceSize {
        /// Edge length that was requested
        size: u32,
    },
}
