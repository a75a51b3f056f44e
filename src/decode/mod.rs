//! Format-aware decoding of raw image payloads.
//!
//! Decoders are tried in order by [`DecoderComposition`]; the first one that
//! recognizes the payload wins. A decoder that does not recognize (or cannot
//! decode) a payload returns `None` and the next candidate is consulted —
//! decode failure is never fatal here.

mod animated;
pub mod sniff;
mod still;

pub use animated::AnimatedDecoder;
pub use still::StillDecoder;

use crate::image::Image;

/// Metadata delivered alongside a fetched payload.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    /// Declared content type, if the source provided one.
    pub content_type: Option<String>,
    /// Source URL, for logging.
    pub url: Option<String>,
}

impl ResponseMeta {
    /// Metadata carrying only a source URL.
    #[must_use]
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            content_type: None,
            url: Some(url.into()),
        }
    }
}

/// A format-specific decoder.
pub trait Decode: Send + Sync {
    /// Decode a payload, or decline with `None`.
    fn decode(&self, data: &[u8], meta: &ResponseMeta) -> Option<Image>;
}

/// Tries an ordered list of decoders and returns the first hit.
///
/// Order is significant: it determines format-detection precedence when more
/// than one decoder could match a payload.
#[derive(Default)]
pub struct DecoderComposition {
    decoders: Vec<Box<dyn Decode>>,
}

impl DecoderComposition {
    /// Compose the given decoders, first one tried first.
    #[must_use]
    pub fn new(decoders: Vec<Box<dyn Decode>>) -> Self {
        Self { decoders }
    }

    /// The default pipeline: animated formats first, then any still format.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(AnimatedDecoder::new()),
            Box::new(StillDecoder::new()),
        ])
    }
}

impl Decode for DecoderComposition {
    fn decode(&self, data: &[u8], meta: &ResponseMeta) -> Option<Image> {
        self.decoders.iter().find_map(|d| d.decode(data, meta))
    }
}
