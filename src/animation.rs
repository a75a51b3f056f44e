//! Building the drivable animation object from encoded bytes.
//!
//! Construction decodes every frame and can be slow for large GIFs, so it is
//! only ever run off the synchronous path (see [`crate::display`]).

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage};

/// One decoded animation frame and how long to hold it.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// The decoded frame raster.
    pub raster: Arc<DynamicImage>,
    /// How long this frame stays on screen.
    pub delay: Duration,
}

/// A fully decoded, drivable animation.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Assemble an animation from already-decoded frames.
    #[must_use]
    pub fn new(frames: Vec<AnimationFrame>) -> Self {
        Self { frames }
    }

    /// The decoded frames, in playback order.
    #[must_use]
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Duration of one full playback loop.
    #[must_use]
    pub fn loop_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.delay).sum()
    }
}

/// Builds animations from encoded bytes.
///
/// Implementations may be arbitrarily slow; callers must keep construction
/// off UI-owning and cache-owning execution contexts.
pub trait AnimationEngine: Send + Sync + 'static {
    /// Decode the full animation, or `None` if the bytes are unusable.
    fn build(&self, data: &[u8]) -> Option<Animation>;
}

/// GIF animation engine backed by the `image` crate's frame decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct GifEngine;

impl AnimationEngine for GifEngine {
    fn build(&self, data: &[u8]) -> Option<Animation> {
        let decoder = match GifDecoder::new(Cursor::new(data)) {
            Ok(d) => d,
            Err(e) => {
                tracing::debug!("gif header rejected: {e}");
                return None;
            }
        };

        let frames = match decoder.into_frames().collect_frames() {
            Ok(frames) => frames,
            Err(e) => {
                tracing::debug!("gif frame decode failed: {e}");
                return None;
            }
        };
        if frames.is_empty() {
            return None;
        }

        let frames = frames
            .into_iter()
            .map(|frame| {
                let delay = Duration::from(frame.delay());
                AnimationFrame {
                    raster: Arc::new(DynamicImage::ImageRgba8(frame.into_buffer())),
                    delay,
                }
            })
            .collect();
        Some(Animation { frames })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TINY_GIF;

    #[test]
    fn test_builds_single_frame_gif() {
        let animation = GifEngine.build(TINY_GIF).expect("valid gif");
        assert_eq!(animation.frame_count(), 1);
        assert_eq!(animation.frames()[0].raster.width(), 1);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(GifEngine.build(b"GIF89a but not really").is_none());
        assert!(GifEngine.build(b"").is_none());
    }

    #[test]
    fn test_loop_duration_sums_delays() {
        let animation = Animation::new(vec![
            AnimationFrame {
                raster: Arc::new(DynamicImage::new_rgba8(1, 1)),
                delay: Duration::from_millis(40),
            },
            AnimationFrame {
                raster: Arc::new(DynamicImage::new_rgba8(1, 1)),
                delay: Duration::from_millis(60),
            },
        ]);
        assert_eq!(animation.loop_duration(), Duration::from_millis(100));
    }
}
