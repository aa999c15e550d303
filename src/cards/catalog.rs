//! Ordered card catalog.
//!
//! The catalog is the gallery's fixed card list. Order matters: a card's
//! index decides its row and column. Lookup by [`CardId`] goes through an
//! index map so clicks can address cards by id.

use rustc_hash::FxHashMap;

use crate::core::{GalleryError, Result};

use super::definition::{CardDefinition, CardId};

/// Ordered, validated list of card definitions.
///
/// ## Example
///
/// ```
/// use flipcard_gallery::cards::{CardCatalog, CardDefinition, CardId};
///
/// let catalog = CardCatalog::new(vec![
///     CardDefinition::new(CardId::new("1"), "🎮").with_image("a.jpeg"),
///     CardDefinition::new(CardId::new("2"), "🃏").with_image("b.jpeg"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.index_of(&CardId::new("2")), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build a catalog, rejecting cards without images and duplicate ids.
    ///
    /// # Errors
    ///
    /// [`GalleryError::NoImages`] or [`GalleryError::DuplicateCard`].
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if card.images.is_empty() {
                return Err(GalleryError::NoImages {
                    card: card.id.clone(),
                });
            }
            if index.insert(card.id.clone(), i).is_some() {
                return Err(GalleryError::DuplicateCard(card.id.clone()));
            }
        }
        Ok(Self { cards, index })
    }

    /// Parse a catalog from a JSON array of card definitions.
    ///
    /// # Errors
    ///
    /// Malformed JSON, or any error from [`CardCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardDefinition> {
        self.cards.get(index)
    }

    /// Card with the given id.
    #[must_use]
    pub fn by_id(&self, id: &CardId) -> Option<&CardDefinition> {
        self.index_of(id).and_then(|i| self.cards.get(i))
    }

    /// Position of a card in display order.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CardDefinition {
        CardDefinition::new(CardId::new(id), "💖").with_image(format!("{id}.jpeg"))
    }

    #[test]
    fn test_order_and_lookup() {
        let catalog = CardCatalog::new(vec![card("b"), card("a"), card("c")]).unwrap();

        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        assert_eq!(catalog.index_of(&CardId::new("a")), Some(1));
        assert_eq!(catalog.by_id(&CardId::new("c")).unwrap().images[0], "c.jpeg");
        assert!(catalog.by_id(&CardId::new("zzz")).is_none());
        assert_eq!(catalog.get(0).unwrap().id, CardId::new("b"));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_rejects_card_without_images() {
        let err = CardCatalog::new(vec![CardDefinition::new(CardId::new("1"), "🎮")]).unwrap_err();
        assert!(matches!(err, GalleryError::NoImages { card } if card == CardId::new("1")));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = CardCatalog::new(vec![card("1"), card("1")]).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateCard(id) if id == CardId::new("1")));
    }

    #[test]
    fn test_empty() {
        let catalog = CardCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(CardCatalog::empty().is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "1", "images": ["g1.jpeg", "g2.jpg"], "emoji": "🎮", "alt": "Gaming"},
            {"id": "2", "images": ["h1.jpeg"], "emoji": "🃏"}
        ]"#;
        let catalog = CardCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().image_count(), 2);
        assert_eq!(catalog.get(1).unwrap().alt, None);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CardCatalog::from_json("not json"),
            Err(GalleryError::Json(_))
        ));
        assert!(matches!(
            CardCatalog::from_json(r#"[{"id": "1", "images": [], "emoji": "x"}]"#),
            Err(GalleryError::NoImages { .. })
        ));
    }
}
