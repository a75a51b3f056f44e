//! The tagged image value shared by decode, cache, and display.

use std::sync::Arc;

use bytes::Bytes;
use image::DynamicImage;

/// A decoded image, tagged by kind.
///
/// Animated images keep the original encoded buffer alongside the poster
/// frame: the full animation is built from those bytes later, off the
/// synchronous path. Both fields are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    /// A plain decoded raster.
    Plain(Arc<DynamicImage>),
    /// An animated image: first-frame poster plus the encoded source bytes.
    Animated {
        /// Decoded first frame, shown while the animation is prepared.
        poster: Arc<DynamicImage>,
        /// Original encoded buffer. Never empty.
        data: Bytes,
    },
}

impl Image {
    /// Wrap a plain decoded raster.
    #[must_use]
    pub fn plain(raster: DynamicImage) -> Self {
        Self::Plain(Arc::new(raster))
    }

    /// Wrap a poster frame together with its encoded source bytes.
    #[must_use]
    pub fn animated(poster: DynamicImage, data: Bytes) -> Self {
        debug_assert!(!data.is_empty(), "animated image without encoded bytes");
        Self::Animated {
            poster: Arc::new(poster),
            data,
        }
    }

    /// Whether this is the animated variant.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }

    /// The raster to draw right now: the image itself, or the poster frame.
    #[must_use]
    pub const fn raster(&self) -> &Arc<DynamicImage> {
        match self {
            Self::Plain(raster) => raster,
            Self::Animated { poster, .. } => poster,
        }
    }

    /// The encoded source bytes, if this image carries them.
    #[must_use]
    pub const fn encoded(&self) -> Option<&Bytes> {
        match self {
            Self::Plain(_) => None,
            Self::Animated { data, .. } => Some(data),
        }
    }

    /// In-memory size of the decoded raster in bytes.
    #[must_use]
    pub fn raster_bytes(&self) -> usize {
        self.raster().as_bytes().len()
    }
}
