//! # flipcard-gallery
//!
//! Layout engine for a scrollable gallery of flip-cards joined by a
//! decorative curved path.
//!
//! ## Design Principles
//!
//! 1. **Pure geometry**: position generation, remapping and path building
//!    are functions of their inputs. Randomness is injected.
//!
//! 2. **No jumps on resize**: when a breakpoint changes the band or spacing,
//!    cards keep their relative place in their column zone instead of
//!    being scattered again.
//!
//! 3. **Explicit state**: reveal state is a value per card, changed by a
//!    reducer; deferred particle work is a cancellable task with a handle.
//!
//! ## Modules
//!
//! - `core`: Randomness, errors, deferred tasks
//! - `cards`: Card definitions, catalog, reveal state machine
//! - `layout`: Breakpoints, column zones, position generation and remapping
//! - `path`: Curve through the card centers
//! - `particles`: Emoji bursts on reveal
//! - `gallery`: The top-level view and its render output

pub mod cards;
pub mod core;
pub mod gallery;
pub mod layout;
pub mod particles;
pub mod path;

// Re-export commonly used types
pub use crate::core::{GalleryError, LayoutRng, RandomSource, Result, ScriptedRng, TaskHandle, TimerQueue};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, FitMode, RevealBoard, RevealState, RevealTransition};

pub use crate::layout::{
    column_zones, generate_positions, remap_positions, Breakpoint, BreakpointTable, ColumnLayout, ColumnZone,
    LayoutConfig, Position, ResponsiveLayout,
};

pub use crate::path::{build_path, build_path_with, card_centers, CurvePath, PathParams, Point, Segment, SegmentKind};

pub use crate::particles::{spawn_particles, BurstTask, Particle, ParticleBurst};

pub use crate::gallery::{
    CardFace, CardView, Gallery, GalleryConfig, ImagePreloader, NoopPreloader, ParticleOverlay, RecordingPreloader,
    RenderFrame,
};
