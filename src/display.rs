//! Display slot with asynchronous animation finalization.
//!
//! Showing an animated image happens in two steps: the poster frame goes up
//! synchronously, and the full animation is built on a background worker and
//! swapped in later — but only if the slot still shows the same image. A
//! completion that arrives after the slot moved on is discarded.

use std::sync::Arc;

use bytes::Bytes;
use image::DynamicImage;
use tokio::sync::mpsc;

use crate::animation::{Animation, AnimationEngine};
use crate::image::Image;

/// What a display slot currently shows.
#[derive(Debug, Clone)]
pub enum SlotState {
    /// Nothing to draw.
    Empty,
    /// A plain still image.
    Plain(Arc<DynamicImage>),
    /// The poster frame of an animated image whose animation is still being
    /// built (or failed to build, in which case the poster simply stays).
    Poster(Arc<DynamicImage>),
    /// The finished animation.
    Animated(Arc<Animation>),
}

/// Build request for the worker task.
struct BuildRequest {
    epoch: u64,
    data: Bytes,
}

/// Completed build, tagged with the epoch that requested it.
struct BuildResult {
    epoch: u64,
    animation: Option<Animation>,
}

/// A single display slot owned by the view layer.
///
/// All mutation happens through `&mut self` on the owning context: `display`
/// when the shown image changes, `poll_results` once per frame to apply
/// finished builds. The heavyweight construction itself runs on the tokio
/// blocking pool and never touches the slot directly.
pub struct DisplaySlot {
    state: SlotState,
    /// Bumped on every `display` call; orphans any in-flight build.
    epoch: u64,
    build_tx: mpsc::UnboundedSender<BuildRequest>,
    result_rx: mpsc::UnboundedReceiver<BuildResult>,
}

impl DisplaySlot {
    /// Create a slot and spawn its build worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(engine: Arc<dyn AnimationEngine>) -> Self {
        let (build_tx, build_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        tokio::spawn(build_worker(build_rx, result_tx, engine));

        Self {
            state: SlotState::Empty,
            epoch: 0,
            build_tx,
            result_rx,
        }
    }

    /// Show an image (or clear the slot).
    ///
    /// Plain images and `None` take effect fully and synchronously. Animated
    /// images show their poster right away and schedule the full animation
    /// build; whatever build was in flight before is superseded either way.
    pub fn display(&mut self, image: Option<Image>) {
        self.epoch += 1;
        match image {
            None => self.state = SlotState::Empty,
            Some(Image::Plain(raster)) => self.state = SlotState::Plain(raster),
            Some(Image::Animated { poster, data }) => {
                self.state = SlotState::Poster(poster);
                let _ = self.build_tx.send(BuildRequest {
                    epoch: self.epoch,
                    data,
                });
            }
        }
    }

    /// Apply finished builds (non-blocking). Returns how many completion
    /// messages were handled, applied or discarded.
    pub fn poll_results(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(result) = self.result_rx.try_recv() {
            self.apply(result);
            handled += 1;
        }
        handled
    }

    /// What to draw right now.
    #[must_use]
    pub const fn state(&self) -> &SlotState {
        &self.state
    }

    fn apply(&mut self, result: BuildResult) {
        if result.epoch != self.epoch {
            tracing::debug!(
                built_for = result.epoch,
                current = self.epoch,
                "discarding superseded animation build"
            );
            return;
        }
        match result.animation {
            Some(animation) => self.state = SlotState::Animated(Arc::new(animation)),
            // Build failed; the poster stays up.
            None => tracing::debug!("animation build failed, keeping poster"),
        }
    }
}

/// Worker task: builds animations one at a time on the blocking pool.
async fn build_worker(
    mut build_rx: mpsc::UnboundedReceiver<BuildRequest>,
    result_tx: mpsc::UnboundedSender<BuildResult>,
    engine: Arc<dyn AnimationEngine>,
) {
    while let Some(request) = build_rx.recv().await {
        let engine = Arc::clone(&engine);
        let BuildRequest { epoch, data } = request;
        let animation = tokio::task::spawn_blocking(move || engine.build(&data))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("animation build task failed: {e}");
                None
            });
        if result_tx.send(BuildResult { epoch, animation }).is_err() {
            break;
        }
    }
    tracing::debug!("animation build worker shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Engine whose builds block until the test sends a permit; the built
    /// animation's frame count mirrors the payload length, so tests can tell
    /// results apart.
    struct GatedEngine {
        gate: Mutex<std::sync::mpsc::Receiver<()>>,
    }

    impl AnimationEngine for GatedEngine {
        fn build(&self, data: &[u8]) -> Option<Animation> {
            self.gate.lock().unwrap().recv().ok()?;
            Some(sized_animation(data.len()))
        }
    }

    fn sized_animation(frames: usize) -> Animation {
        Animation::new(
            (0..frames)
                .map(|_| crate::animation::AnimationFrame {
                    raster: Arc::new(DynamicImage::new_rgba8(1, 1)),
                    delay: Duration::from_millis(10),
                })
                .collect(),
        )
    }

    fn animated(len: usize) -> Image {
        Image::animated(DynamicImage::new_rgba8(1, 1), Bytes::from(vec![0x47; len]))
    }

    #[tokio::test]
    async fn test_plain_display_is_synchronous() {
        let mut slot = DisplaySlot::new(Arc::new(crate::animation::GifEngine));
        slot.display(Some(Image::plain(DynamicImage::new_rgba8(2, 2))));
        assert!(matches!(slot.state(), SlotState::Plain(_)));

        slot.display(None);
        assert!(matches!(slot.state(), SlotState::Empty));
    }

    #[tokio::test]
    async fn test_animated_shows_poster_first() {
        let (_tx, rx) = std::sync::mpsc::channel();
        let mut slot = DisplaySlot::new(Arc::new(GatedEngine {
            gate: Mutex::new(rx),
        }));
        slot.display(Some(animated(3)));
        assert!(matches!(slot.state(), SlotState::Poster(_)));
    }

    #[tokio::test]
    async fn test_stale_build_never_clobbers_newer_display() {
        crate::test_support::init_tracing();
        let (tx, rx) = std::sync::mpsc::channel();
        let mut slot = DisplaySlot::new(Arc::new(GatedEngine {
            gate: Mutex::new(rx),
        }));

        // Show X, then supersede it with Y before X's build can finish.
        slot.display(Some(animated(3)));
        slot.display(Some(animated(5)));

        tx.send(()).unwrap();
        tx.send(()).unwrap();

        let mut handled = 0;
        while handled < 2 {
            handled += slot.poll_results();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        // X's result (3 frames) was discarded; Y's (5 frames) was applied.
        match slot.state() {
            SlotState::Animated(animation) => assert_eq!(animation.frame_count(), 5),
            other => panic!("expected animation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_display_orphans_pending_build() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut slot = DisplaySlot::new(Arc::new(GatedEngine {
            gate: Mutex::new(rx),
        }));

        slot.display(Some(animated(3)));
        slot.display(Some(Image::plain(DynamicImage::new_rgba8(2, 2))));
        tx.send(()).unwrap();

        let mut handled = 0;
        while handled < 1 {
            handled += slot.poll_results();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert!(matches!(slot.state(), SlotState::Plain(_)));
    }

    #[tokio::test]
    async fn test_matching_build_is_applied() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut slot = DisplaySlot::new(Arc::new(GatedEngine {
            gate: Mutex::new(rx),
        }));

        slot.display(Some(animated(4)));
        tx.send(()).unwrap();

        let mut handled = 0;
        while handled < 1 {
            handled += slot.poll_results();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        match slot.state() {
            SlotState::Animated(animation) => assert_eq!(animation.frame_count(), 4),
            other => panic!("expected animation, got {other:?}"),
        }
    }
}
