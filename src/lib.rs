//! # Flicker 🎞️
//!
//! Cost-accounted in-memory image cache with animated GIF support.
//!
//! ## Overview
//!
//! Flicker sits between a fetch layer and a terminal view: hand it the raw
//! bytes of a downloaded image and it decodes them (recognizing animated
//! GIFs by signature), applies processing to still images only, and caches
//! the result under a byte budget. Animated images get their poster frame
//! immediately; the full animation is built off the synchronous path and
//! swapped into the display slot only if nothing newer replaced it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ImagePipeline                         │
//! │       ingest(bytes) → decode → process → cache → Image      │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                   │
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Decode      │ │     Process     │ │   ImageCache    │
//! │                 │ │                 │ │                 │
//! │ • GIF sniffing  │ │ • Resize stills │ │ • Byte budget   │
//! │ • Poster frame  │ │ • Animated      │ │ • LRU eviction  │
//! │ • Composition   │ │   passthrough   │ │ • Storage policy│
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        DisplaySlot                          │
//! │   poster now, animation later — stale builds are discarded  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`animation`] — Frame sequences and the animation build engine
//! - [`cache`] — Cost-accounted LRU cache and storage policy
//! - [`config`] — Configuration management
//! - [`decode`] — Format sniffing and the decoder composition
//! - [`display`] — Display slot with async animation finalization
//! - [`pipeline`] — Decode → process → cache glue
//! - [`process`] — Still-image processing, animated passthrough
//! - [`request`] — Request fingerprints (cache keys)
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use flicker::{
//!     AnimatedPassthrough, DecoderComposition, ImageCache, ImagePipeline,
//!     ImageRequest, ResizeProcessor, ResponseMeta,
//! };
//!
//! let cache = ImageCache::new(64 * 1024 * 1024);
//! let pipeline = ImagePipeline::new(
//!     DecoderComposition::standard(),
//!     Some(Arc::new(AnimatedPassthrough::new(ResizeProcessor::new(800)))),
//!     cache,
//! );
//!
//! // Bytes come from your fetch layer.
//! let bytes: &[u8] = b"GIF89a...";
//! let request = ImageRequest::new("https://example.com/party.gif");
//! let image = pipeline.ingest(&request, bytes, &ResponseMeta::for_url(&request.url));
//! assert!(image.is_none() || image.unwrap().is_animated());
//! ```
//!
//! ## Features
//!
//! - **Type-Aware** — Images are tagged plain or animated; every component
//!   matches exhaustively on the kind
//! - **Cost-Accounted** — Animated entries are charged for the encoded
//!   buffer they retain, not just the poster raster
//! - **Non-Blocking** — Cache lookups never wait on decoding; animation
//!   builds run on the blocking pool
//! - **Race-Free Display** — Superseded animation builds are discarded, never
//!   swapped in

#![doc(html_root_url = "https://docs.rs/flicker/0.2.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::return_self_not_must_use)]

pub mod animation;
pub mod cache;
pub mod config;
pub mod decode;
pub mod display;
pub mod image;
pub mod pipeline;
pub mod process;
pub mod request;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use animation::{Animation, AnimationEngine, AnimationFrame, GifEngine};
pub use cache::{CostFn, ImageCache, RasterCost, RetainedCost, StoragePolicy};
pub use config::Config;
pub use decode::{
    AnimatedDecoder, Decode, DecoderComposition, ResponseMeta, StillDecoder,
    sniff::is_animated_format,
};
pub use display::{DisplaySlot, SlotState};
pub use image::Image;
pub use pipeline::{ImagePipeline, ImageRequest};
pub use process::{AnimatedPassthrough, Process, ResizeProcessor};
pub use request::RequestKey;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
