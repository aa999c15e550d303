//! Card position generation and remapping.
//!
//! Positions are `x` in percent of the container width (the card's
//! horizontal center) and `y` in pixels from the top (the card's top edge).
//!
//! [`generate_positions`] scatters cards randomly within their column zones.
//! It is not idempotent, so a gallery calls it once per card set.
//! [`remap_positions`] carries an existing scatter across a config change,
//! keeping each card's relative place in its zone.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

use super::config::LayoutConfig;

/// Where a card sits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal center, percent of container width.
    pub x: f64,
    /// Top edge, pixels.
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scatter `count` cards for `config`.
///
/// Card `i` lands in column `i % columns`, row `i / columns`; `x` is uniform
/// in that column's zone and `y` is `row * vertical_spacing + TOP_OFFSET`.
///
/// ```
/// use flipcard_gallery::core::ScriptedRng;
/// use flipcard_gallery::layout::{generate_positions, BreakpointTable};
///
/// let config = BreakpointTable::default().config_for(1200.0);
/// let positions = generate_positions(3, &config, &mut ScriptedRng::constant(0.0));
///
/// assert_eq!(positions.len(), 3);
/// assert_eq!(positions[0].y, positions[1].y); // same row
/// assert_eq!(positions[1].x, 65.0);           // left edge of the right zone
/// ```
pub fn generate_positions(
    count: usize,
    config: &LayoutConfig,
    rng: &mut impl RandomSource,
) -> Vec<Position> {
    let zones = config.zones();
    let columns = config.columns;

    (0..count)
        .map(|i| {
            let zone = zones[columns.column_of(i)];
            Position {
                x: rng.uniform(zone.min, zone.max),
                y: config.row_top(columns.row_of(i)),
            }
        })
        .collect()
}

/// Carry `existing` positions from `old` to `new` config.
///
/// If the column count changed, rows pair up differently and the cards are
/// scattered afresh under `new`. Otherwise each card's `x` is normalized
/// into its old zone (clamped to `[0, 1]`) and mapped into its new zone,
/// and `y` is recomputed from the new spacing. `existing` is not modified.
pub fn remap_positions(
    existing: &[Position],
    old: &LayoutConfig,
    new: &LayoutConfig,
    rng: &mut impl RandomSource,
) -> Vec<Position> {
    if old.columns != new.columns {
        tracing::debug!(
            cards = existing.len(),
            from = old.columns.count(),
            to = new.columns.count(),
            "column count changed, regenerating positions"
        );
        return generate_positions(existing.len(), new, rng);
    }

    let columns = new.columns;
    let old_zones = old.zones();
    let new_zones = new.zones();

    tracing::debug!(cards = existing.len(), "remapping positions");

    existing
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            let col = columns.column_of(i);
            let t = old_zones[col].normalize(pos.x);
            Position {
                x: new_zones[col].lerp(t),
                y: new.row_top(columns.row_of(i)),
            }
        })
        .collect()
}
