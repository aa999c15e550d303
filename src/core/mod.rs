//! Core building blocks: randomness, errors, deferred tasks.
//!
//! Nothing here knows about cards or layouts. The layout, path and particle
//! modules build on these.

pub mod error;
pub mod rng;
pub mod schedule;

pub use error::{GalleryError, Result};
pub use rng::{LayoutRng, RandomSource, ScriptedRng};
pub use schedule::{TaskHandle, TimerQueue};
