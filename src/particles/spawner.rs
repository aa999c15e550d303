//! Emoji particle bursts.
//!
//! A burst scatters particles around the card edges; each one floats up,
//! drifts sideways and spins. Counts, distances and sizes scale with the card
//! width relative to [`REFERENCE_WIDTH`], so small phone cards get a
//! smaller, sparser burst.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Card width at which particle parameters are unscaled.
pub const REFERENCE_WIDTH: f64 = 250.0;

/// How far (pixels) spawn bands extend either side of a card edge.
pub const EDGE_BAND: f64 = 10.0;

/// Largest width scale used for particle counts. Caps a burst at 104 particles.
pub const MAX_COUNT_SCALE: f64 = 4.0;

/// One decorative particle. Coordinates are pixels relative to the card's
/// top-left corner; the presentation layer plays the animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Index within its burst.
    pub id: u32,
    /// The card's emoji.
    pub emoji: String,
    /// Spawn x, pixels from the card's left edge.
    pub x: f64,
    /// Spawn y, pixels from the card's top edge.
    pub y: f64,
    /// Size multiplier.
    pub scale: f64,
    /// Animation length.
    pub duration_secs: f64,
    /// Start offset from the burst spawning.
    pub delay_secs: f64,
    /// Upward travel in pixels (negative).
    pub float_distance: f64,
    /// Horizontal travel in pixels.
    pub drift: f64,
    /// Glyph size.
    pub font_size_rem: f64,
    /// Spin over the animation.
    pub rotation_deg: f64,
}

impl Particle {
    /// When this particle's animation ends, relative to the burst spawning.
    #[must_use]
    pub fn end_secs(&self) -> f64 {
        self.delay_secs + self.duration_secs
    }
}

/// Inclusive particle count bounds for a card width.
///
/// ```
/// use flipcard_gallery::particles::particle_count_range;
///
/// assert_eq!(particle_count_range(250.0), (15, 26));
/// assert_eq!(particle_count_range(180.0), (10, 18));
/// assert_eq!(particle_count_range(60.0), (8, 12));
/// assert_eq!(particle_count_range(1e20), (60, 104));
/// ```
#[must_use]
pub fn particle_count_range(card_width: f64) -> (usize, usize) {
    let scale = (card_width / REFERENCE_WIDTH).clamp(0.0, MAX_COUNT_SCALE);
    let min = (15.0 * scale).floor().max(8.0);
    let max = (26.0 * scale).floor().max(12.0);
    (min as usize, max as usize)
}

/// Spawn a burst for a card of the given size.
pub fn spawn_particles(
    emoji: &str,
    card_width: f64,
    card_height: f64,
    rng: &mut impl RandomSource,
) -> Vec<Particle> {
    let scale_factor = card_width / REFERENCE_WIDTH;
    let (min_count, max_count) = particle_count_range(card_width);
    let count = (rng.uniform(min_count as f64, max_count as f64 + 1.0).floor() as usize)
        .clamp(min_count, max_count);

    (0..count)
        .map(|i| {
            let (x, y) = edge_position(card_width, card_height, rng);
            Particle {
                id: i as u32,
                emoji: emoji.to_owned(),
                x,
                y,
                scale: rng.uniform(0.6, 1.5) * scale_factor,
                duration_secs: rng.uniform(1.2, 2.6),
                delay_secs: rng.uniform(0.0, 0.5),
                float_distance: rng.uniform(-200.0, -420.0) * scale_factor,
                drift: rng.uniform(-100.0, 100.0) * scale_factor,
                font_size_rem: rng.uniform(1.2, 2.6) * scale_factor,
                rotation_deg: rng.uniform(-40.0, 40.0),
            }
        })
        .collect()
}

/// A point in one of the four bands around the card edges.
fn edge_position(width: f64, height: f64, rng: &mut impl RandomSource) -> (f64, f64) {
    match rng.pick(4) {
        // top
        0 => (rng.uniform(0.0, width), rng.uniform(-EDGE_BAND, EDGE_BAND)),
        // bottom
        1 => (
            rng.uniform(0.0, width),
            rng.uniform(height - EDGE_BAND, height + EDGE_BAND),
        ),
        // left
        2 => (rng.uniform(-EDGE_BAND, EDGE_BAND), rng.uniform(0.0, height)),
        // right
        _ => (
            rng.uniform(width - EDGE_BAND, width + EDGE_BAND),
            rng.uniform(0.0, height),
        ),
    }
}
