//! Shared fixtures for unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use tracing_subscriber::EnvFilter;

/// Install a logging subscriber for a test run (no-op if one is already
/// set). Run with `RUST_LOG=debug` to see decode failures and discards.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A complete, valid 1x1 GIF89a file (two-color palette, single frame).
pub const TINY_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, // "GIF89a"
    0x01, 0x00, 0x01, 0x00, // 1x1
    0x80, 0x00, 0x00, // global color table, 2 entries
    0x00, 0x00, 0x00, // color 0: black
    0xFF, 0xFF, 0xFF, // color 1: white
    0x21, 0xF9, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, // graphic control extension
    0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
    0x02, 0x02, 0x44, 0x01, 0x00, // LZW-compressed pixel data
    0x3B, // trailer
];

/// Encode a 2x2 RGBA image as PNG bytes.
pub fn tiny_png() -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::new_rgba8(2, 2)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("png encode");
    buf
}
