//! Card definitions - static card data.
//!
//! `CardDefinition` holds what is known about a card before the gallery
//! mounts: its images, the emoji on its back, and how its photo is fitted.
//! What changes at runtime (which face is up, which image is showing)
//! lives in [`RevealState`](super::RevealState).

use serde::{Deserialize, Serialize};

/// Stable identifier for a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// How a front image fills the card face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Crop to fill the face.
    #[default]
    Cover,
    /// Letterbox to show the whole image.
    Contain,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use flipcard_gallery::cards::{CardDefinition, CardId, FitMode};
///
/// let card = CardDefinition::new(CardId::new("1"), "🎮")
///     .with_image("images/gaming/1.jpeg")
///     .with_image("images/gaming/2.jpg")
///     .with_alt("Gaming")
///     .with_fit(FitMode::Contain);
///
/// assert_eq!(card.image_count(), 2);
/// assert_eq!(card.image(1), Some("images/gaming/2.jpg"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Image references in display order. Never empty once in a catalog.
    pub images: Vec<String>,

    /// Glyph on the card back and in the particle burst.
    pub emoji: String,

    /// Alt text for the front image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Image fit mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitMode>,
}

impl CardDefinition {
    /// Create a card with no images yet.
    pub fn new(id: CardId, emoji: impl Into<String>) -> Self {
        Self {
            id,
            images: Vec::new(),
            emoji: emoji.into(),
            alt: None,
            fit: None,
        }
    }

    /// Append an image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Append several image references.
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images.extend(images.into_iter().map(Into::into));
        self
    }

    /// Set the alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the fit mode.
    #[must_use]
    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = Some(fit);
        self
    }

    /// Number of images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Image reference at `index`.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Alt text, or `fallback` when the card has none.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }

    /// Fit mode, defaulting to cover.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit.unwrap_or_default()
    }
}
