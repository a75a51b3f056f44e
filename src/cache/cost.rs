//! Byte-cost estimation for cached images.
//!
//! The cache enforces `Σ cost(entry) <= capacity`, so the cost function
//! decides what "full" means. Any `Fn(&Image) -> u64` works as a cost
//! function; the built-in ones estimate resident memory.

use crate::image::Image;

/// Computes the byte cost of keeping an image resident.
pub trait CostFn: Send + Sync {
    /// Estimated cost in bytes.
    fn cost(&self, image: &Image) -> u64;
}

impl<F> CostFn for F
where
    F: Fn(&Image) -> u64 + Send + Sync,
{
    fn cost(&self, image: &Image) -> u64 {
        self(image)
    }
}

/// Decoded raster size only, as declared by the raster type.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterCost;

impl CostFn for RasterCost {
    fn cost(&self, image: &Image) -> u64 {
        image.raster_bytes() as u64
    }
}

/// Raster size plus, for animated images, the retained encoded buffer.
///
/// An animated entry keeps its source bytes alive for the lifetime of the
/// entry, so they count against the budget too. This is the cache default.
#[derive(Debug, Default, Clone, Copy)]
pub struct RetainedCost;

impl CostFn for RetainedCost {
    fn cost(&self, image: &Image) -> u64 {
        let base = image.raster_bytes() as u64;
        match image.encoded() {
            Some(data) => base + data.len() as u64,
            None => base,
        }
    }
}
