//! Decode → process → cache glue.

use std::sync::Arc;

use crate::cache::ImageCache;
use crate::decode::{Decode, DecoderComposition, ResponseMeta};
use crate::image::Image;
use crate::process::Process;
use crate::request::RequestKey;

/// An image request: where the bytes came from, identified for caching.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Source URL (or any stable identifier the fetch layer uses).
    pub url: String,
}

impl ImageRequest {
    /// Build a request for a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Ties decoding, processing, and caching together.
///
/// The fetch layer hands `ingest` the raw payload it downloaded; the
/// pipeline decodes it, applies the configured processor, stores the result
/// under the request fingerprint, and returns it. Every failure mode is a
/// `None` — a payload that cannot be decoded simply produces no image.
pub struct ImagePipeline {
    decoders: DecoderComposition,
    processor: Option<Arc<dyn Process>>,
    cache: ImageCache,
}

impl ImagePipeline {
    /// Create a pipeline over an existing cache handle.
    #[must_use]
    pub fn new(
        decoders: DecoderComposition,
        processor: Option<Arc<dyn Process>>,
        cache: ImageCache,
    ) -> Self {
        Self {
            decoders,
            processor,
            cache,
        }
    }

    /// The cache key this pipeline files a request under.
    #[must_use]
    pub fn key_for(&self, request: &ImageRequest) -> RequestKey {
        let processing = self.processor.as_ref().map(|p| p.cache_key());
        RequestKey::new(&request.url, processing.as_deref())
    }

    /// Look up a request without decoding anything.
    #[must_use]
    pub fn cached(&self, request: &ImageRequest) -> Option<Image> {
        self.cache.get(&self.key_for(request))
    }

    /// Decode, process, and cache a fetched payload.
    ///
    /// Returns the cached image immediately if the request was already
    /// ingested. Otherwise runs the decoder composition, the processor (if
    /// any), stores the result, and returns it.
    pub fn ingest(&self, request: &ImageRequest, data: &[u8], meta: &ResponseMeta) -> Option<Image> {
        let key = self.key_for(request);
        if let Some(image) = self.cache.get(&key) {
            return Some(image);
        }

        let decoded = self.decoders.decode(data, meta)?;
        let image = match &self.processor {
            Some(processor) => processor.process(decoded)?,
            None => decoded,
        };

        self.cache.set(&key, image.clone());
        tracing::debug!(key = %key, url = %request.url, animated = image.is_animated(), "ingested image");
        Some(image)
    }

    /// The cache this pipeline stores into.
    #[must_use]
    pub const fn cache(&self) -> &ImageCache {
        &self.cache
    }
}
