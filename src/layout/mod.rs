//! Layout engine: breakpoints, column zones, card positions.
//!
//! ## Flow
//!
//! viewport width → [`ResponsiveLayout::observe`] → new [`LayoutConfig`]
//! → [`remap_positions`] (old positions, old config, new config) → positions.

pub mod breakpoints;
pub mod config;
pub mod positions;

pub use breakpoints::{Breakpoint, BreakpointTable, ResponsiveLayout};
pub use config::{column_zones, ColumnLayout, ColumnZone, LayoutConfig, CARD_ASPECT, COLUMN_GAP, TOP_OFFSET};
pub use positions::{generate_positions, remap_positions, Position};
