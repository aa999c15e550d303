//! Error type for the input-loading boundaries.
//!
//! Geometry never fails: generation, remapping, path building and particle
//! spawning degrade on malformed numbers instead of returning errors. Errors
//! only come from building a breakpoint table or card catalog, or from
//! addressing a card that does not exist.

use thiserror::Error;

use crate::cards::CardId;

/// Errors raised while loading gallery inputs.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A breakpoint table needs at least one row.
    #[error("breakpoint table is empty")]
    EmptyBreakpointTable,

    /// Thresholds must be strictly ascending.
    #[error("breakpoint {index} threshold {threshold} is not above the previous threshold {previous}")]
    UnsortedBreakpoints {
        index: usize,
        threshold: f64,
        previous: f64,
    },

    /// Only the last row may be open-ended.
    #[error("breakpoint {index} is open-ended but is not the last row")]
    OpenEndedNotLast { index: usize },

    /// The last row must be open-ended so the table covers every width.
    #[error("breakpoint table has no open-ended last row")]
    MissingOpenEnded,

    /// Column count outside {1, 2}.
    #[error("invalid column count {0}, expected 1 or 2")]
    InvalidColumns(u8),

    /// Every card needs at least one image.
    #[error("{card} has no images")]
    NoImages { card: CardId },

    /// Card ids must be unique within a catalog.
    #[error("{0} appears more than once in the catalog")]
    DuplicateCard(CardId),

    /// A click addressed a card that is not in the catalog.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// Malformed JSON input.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
