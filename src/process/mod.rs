//! Pixel processing applied between decode and cache.

mod resize;

pub use resize::ResizeProcessor;

use crate::image::Image;

/// A pixel transform applied to decoded images.
///
/// The [`cache_key`](Process::cache_key) identifies the transform's
/// parameters; it is folded into request fingerprints so differently
/// processed variants of one URL cache under distinct keys.
pub trait Process: Send + Sync {
    /// Transform an image, or fail with `None`.
    fn process(&self, image: Image) -> Option<Image>;

    /// Stable identifier for this transform and its parameters.
    fn cache_key(&self) -> String;
}

/// Decorator that exempts animated images from processing.
///
/// Resizing or recompressing an animated image would discard the encoded
/// buffer the full animation is later built from, so animated images pass
/// through untouched; everything else is delegated to the wrapped processor
/// verbatim, including its failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedPassthrough<P> {
    inner: P,
}

impl<P: Process> AnimatedPassthrough<P> {
    /// Wrap a processor.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped processor.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Process> Process for AnimatedPassthrough<P> {
    fn process(&self, image: Image) -> Option<Image> {
        if image.is_animated() {
            return Some(image);
        }
        self.inner.process(image)
    }

    fn cache_key(&self) -> String {
        // Same key as the wrapped processor: the passthrough changes which
        // images are touched, not how they look.
        self.inner.cache_key()
    }
}
