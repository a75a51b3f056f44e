//! Downscaling processor for still images.

use image::DynamicImage;

use super::Process;
use crate::image::Image;

/// Resize large rasters down to a maximum dimension (to save memory and
/// rendering time), preserving aspect ratio. Images already within bounds
/// are returned untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeProcessor {
    max_dimension: u32,
}

impl ResizeProcessor {
    /// Create a processor bounding both dimensions by `max_dimension`.
    #[must_use]
    pub const fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }
}

impl Process for ResizeProcessor {
    fn process(&self, image: Image) -> Option<Image> {
        let raster = image.raster();
        let (width, height) = (raster.width(), raster.height());

        if width <= self.max_dimension && height <= self.max_dimension {
            return Some(image);
        }

        // Calculate new dimensions maintaining aspect ratio
        let max = self.max_dimension;
        let ratio = f64::from(width) / f64::from(height);
        let (new_width, new_height) = if width > height {
            (max, (f64::from(max) / ratio) as u32)
        } else {
            ((f64::from(max) * ratio) as u32, max)
        };

        let resized: DynamicImage =
            raster.resize(new_width, new_height, image::imageops::FilterType::Triangle);
        Some(Image::plain(resized))
    }

    fn cache_key(&self) -> String {
        format!("resize:{}", self.max_dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_images_untouched() {
        let processor = ResizeProcessor::new(800);
        let img = Image::plain(DynamicImage::new_rgba8(100, 50));
        assert_eq!(processor.process(img.clone()), Some(img));
    }

    #[test]
    fn test_wide_images_bounded_by_width() {
        let processor = ResizeProcessor::new(100);
        let img = Image::plain(DynamicImage::new_rgba8(400, 200));
        let result = processor.process(img).unwrap();
        assert_eq!(result.raster().width(), 100);
        assert_eq!(result.raster().height(), 50);
    }

    #[test]
    fn test_tall_images_bounded_by_height() {
        let processor = ResizeProcessor::new(100);
        let img = Image::plain(DynamicImage::new_rgba8(200, 400));
        let result = processor.process(img).unwrap();
        assert_eq!(result.raster().height(), 100);
    }

    #[test]
    fn test_cache_key_carries_dimension() {
        assert_eq!(ResizeProcessor::new(800).cache_key(), "resize:800");
    }
}
