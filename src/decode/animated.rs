//! Decoder for animated (GIF) payloads.

use bytes::Bytes;

use super::sniff::is_animated_format;
use super::{Decode, ResponseMeta};
use crate::image::Image;

/// Decodes GIF payloads into [`Image::Animated`].
///
/// Only the poster (first) frame is decoded here; the encoded bytes are
/// carried along so the full animation can be built later, off the
/// synchronous path.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimatedDecoder;

impl AnimatedDecoder {
    /// Create the decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Decode for AnimatedDecoder {
    fn decode(&self, data: &[u8], meta: &ResponseMeta) -> Option<Image> {
        if !is_animated_format(data) {
            return None;
        }

        match image::load_from_memory(data) {
            Ok(poster) => Some(Image::animated(poster, Bytes::copy_from_slice(data))),
            Err(e) => {
                tracing::debug!(
                    url = meta.url.as_deref().unwrap_or("<unknown>"),
                    "animated payload matched signature but poster decode failed: {e}"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TINY_GIF;

    #[test]
    fn test_declines_non_gif_payloads() {
        let decoder = AnimatedDecoder::new();
        assert!(decoder.decode(b"\x89PNG....", &ResponseMeta::default()).is_none());
        assert!(decoder.decode(b"", &ResponseMeta::default()).is_none());
    }

    #[test]
    fn test_declines_corrupt_gif() {
        // Signature matches but the rest is garbage.
        let decoder = AnimatedDecoder::new();
        assert!(decoder.decode(b"GIF89a garbage", &ResponseMeta::default()).is_none());
    }

    #[test]
    fn test_decodes_poster_and_keeps_bytes() {
        let decoder = AnimatedDecoder::new();
        let img = decoder
            .decode(TINY_GIF, &ResponseMeta::for_url("https://example.com/a.gif"))
            .expect("valid gif should decode");

        assert!(img.is_animated());
        assert_eq!(img.encoded().unwrap().as_ref(), TINY_GIF);
        assert_eq!(img.raster().width(), 1);
        assert_eq!(img.raster().height(), 1);
    }
}
