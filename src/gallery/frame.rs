//! Render output handed to the presentation layer.
//!
//! A frame is plain data (and serializes to JSON), so a host can draw it
//! however it likes: DOM, canvas, or a test assertion.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, FitMode};
use crate::particles::Particle;
use crate::path::CurvePath;

/// Which side of a card is showing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "face", rename_all = "lowercase")]
pub enum CardFace {
    /// Decorative back with the card's emoji.
    Back { emoji: String },
    /// Photo side.
    Front {
        image: String,
        index: usize,
        alt: String,
        fit: FitMode,
    },
}

/// One card's rectangle and face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// Catalog id.
    pub id: CardId,
    /// Horizontal center, percent of container width.
    pub left_percent: f64,
    /// Top edge, pixels.
    pub top_px: f64,
    /// Card width, pixels.
    pub width: f64,
    /// Card height, pixels.
    pub height: f64,
    /// Side currently showing.
    pub face: CardFace,
}

/// Live particles above one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleOverlay {
    /// Card the burst belongs to.
    pub card: CardId,
    /// Changes on every reveal, so hosts can restart animations.
    pub generation: u64,
    /// Particles to animate, relative to the card's top-left corner.
    pub particles: Vec<Particle>,
}

/// Everything needed to draw the gallery once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Scrollable height, pixels.
    pub container_height: f64,
    /// viewBox for the path overlay.
    pub view_box: String,
    /// Cards in catalog order.
    pub cards: Vec<CardView>,
    /// Curve through the card centers.
    pub path: CurvePath,
    /// SVG path data for `path`.
    pub path_d: String,
    /// Only cards with live particles appear here.
    pub overlays: Vec<ParticleOverlay>,
}
