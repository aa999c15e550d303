//! Top-level gallery view and its render output.
//!
//! ## Key Types
//!
//! - `Gallery`: owns layout, positions, path, reveal board and bursts
//! - `GalleryConfig`: seed, padding, fallback alt text, path shape
//! - `RenderFrame`: what the presentation layer draws
//! - `ImagePreloader`: cache-warming seam

pub mod config;
pub mod frame;
pub mod preload;
pub mod view;

pub use config::GalleryConfig;
pub use frame::{CardFace, CardView, ParticleOverlay, RenderFrame};
pub use preload::{ImagePreloader, NoopPreloader, RecordingPreloader};
pub use view::Gallery;
