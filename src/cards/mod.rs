//! Card system: definitions, catalog, and reveal state.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identifier
//! - `CardDefinition`: Images, emoji, alt text, fit mode
//! - `CardCatalog`: Ordered, validated card list
//! - `RevealState`: Face-up flag and image index for one card
//! - `RevealBoard`: Reveal states for the whole catalog

pub mod catalog;
pub mod definition;
pub mod reveal;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, FitMode};
pub use reveal::{RevealBoard, RevealState, RevealTransition};
