//! Face configuration types

use core::fmt;
use core::num::NonZeroU32;

use image::imageops::FilterType;

pub use crate::error::Error;

/// Edge length, in pixels, of a square key bitmap
///
/// Engines ask for faces at whatever size their hardware uses (72px on the
/// original Stream Deck, 96px on the XL). The value is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceSize(NonZeroU32);

impl FaceSize {
    /// Create a face size with validation
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFaceSize` if `size` is zero.
    pub fn new(size: u32) -> Result<Self, Error> {
        NonZeroU32::new(size)
            .map(Self)
            .ok_or(Error::InvalidFaceSize { size })
    }

    /// Edge length in pixels
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for FaceSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self, Error> {
        Self::new(size)
    }
}

impl From<FaceSize> for u32 {
    fn from(size: FaceSize) -> u32 {
        size.get()
    }
}

impl fmt::Display for FaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.get())
    }
}

/// Filter used when scaling a source image onto a key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resampling {
    /// Nearest neighbor, keeps hard pixel edges
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian blur
    Gaussian,
    /// Lanczos with window 3
    #[default]
    Lanczos3,
}

impl From<Resampling> for FilterType {
    fn from(resampling: Resampling) -> Self {
        match resampling {
            Resampling::Nearest => FilterType::Nearest,
            Resampling::Triangle => FilterType::Triangle,
            Resampling::CatmullRom => FilterType::CatmullRom,
            Resampling::Gaussian => FilterType::Gaussian,
            Resampling::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(FaceSize::new(0), Err(Error::InvalidFaceSize { size: 0 }));
        assert!(FaceSize::try_from(0u32).is_err());
    }

    #[test]
    fn non_zero_size_round_trips() {
        let size = FaceSize::new(72).unwrap();
        assert_eq!(size.get(), 72);
        assert_eq!(u32::from(size), 72);
        assert_eq!(size.to_string(), "72x72");
    }

    #[test]
    fn default_resampling_is_lanczos() {
        assert_eq!(Resampling::default(), Resampling::Lanczos3);
        assert_eq!(FilterType::from(Resampling::default()), FilterType::Lanczos3);
    }

    #[test]
    fn error_message_names_the_size() {
        let err = FaceSize::new(0).unwrap_err();
        assert!(err.to_string().contains("invalid face size 0"));
    }
}
