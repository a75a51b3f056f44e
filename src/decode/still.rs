//! Fallback decoder for still images.

use super::{Decode, ResponseMeta};
use crate::image::Image;

/// Decodes any still format the `image` crate understands into
/// [`Image::Plain`]. Meant to sit last in a [`super::DecoderComposition`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StillDecoder;

impl StillDecoder {
    /// Create the decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Decode for StillDecoder {
    fn decode(&self, data: &[u8], meta: &ResponseMeta) -> Option<Image> {
        match image::load_from_memory(data) {
            Ok(raster) => Some(Image::plain(raster)),
            Err(e) => {
                tracing::debug!(
                    url = meta.url.as_deref().unwrap_or("<unknown>"),
                    "still decode failed: {e}"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tiny_png;

    #[test]
    fn test_decodes_png_to_plain() {
        let decoder = StillDecoder::new();
        let img = decoder
            .decode(&tiny_png(), &ResponseMeta::default())
            .expect("valid png should decode");
        assert!(!img.is_animated());
        assert_eq!(img.raster().width(), 2);
    }

    #[test]
    fn test_declines_garbage() {
        let decoder = StillDecoder::new();
        assert!(decoder.decode(b"not an image", &ResponseMeta::default()).is_none());
    }
}
