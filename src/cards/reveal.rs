//! Per-card reveal state machine.
//!
//! ```text
//! FaceDown(0) --click--> FaceUp(0) --click--> FaceUp(1) ... FaceUp(last) --click--> FaceDown(0)
//! ```
//!
//! Transitions are pure: [`RevealState::click`] returns the next state, and
//! [`RevealBoard::reduce`] returns a new board. The board is an
//! `im::Vector`, so keeping the previous board around (for diffing frames)
//! costs nothing.

use im::Vector;
use serde::{Deserialize, Serialize};

/// What a click did to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealTransition {
    /// Face-down to face-up. Plays the flip and the particle burst.
    Revealed,
    /// Face-up image swap, no flip.
    NextImage { from: usize, to: usize },
    /// Face-up on the last image back to face-down.
    Hidden,
}

impl RevealTransition {
    /// Is this the face-down to face-up edge?
    #[must_use]
    pub fn is_reveal(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Which face a card shows and which image is on the front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealState {
    /// Showing the front.
    pub face_up: bool,
    /// Front image, an index into the card's image list.
    pub image_index: usize,
}

impl RevealState {
    /// The initial state.
    pub const FACE_DOWN: Self = Self {
        face_up: false,
        image_index: 0,
    };

    /// Apply one click to a card with `image_count` images.
    ///
    /// A count of zero is treated as one image.
    #[must_use]
    pub fn click(self, image_count: usize) -> (Self, RevealTransition) {
        let last = image_count.max(1) - 1;

        if !self.face_up {
            let next = Self {
                face_up: true,
                image_index: 0,
            };
            return (next, RevealTransition::Revealed);
        }

        if self.image_index < last {
            let to = self.image_index + 1;
            let next = Self {
                face_up: true,
                image_index: to,
            };
            return (
                next,
                RevealTransition::NextImage {
                    from: self.image_index,
                    to,
                },
            );
        }

        (Self::FACE_DOWN, RevealTransition::Hidden)
    }

    /// Image the next click will put on screen.
    #[must_use]
    pub fn upcoming_image(self, image_count: usize) -> usize {
        let last = image_count.max(1) - 1;
        if self.face_up && self.image_index < last {
            self.image_index + 1
        } else {
            0
        }
    }

    /// Image currently on screen, if the card is face-up.
    #[must_use]
    pub fn visible_image(self) -> Option<usize> {
        self.face_up.then_some(self.image_index)
    }
}

/// Reveal states for every card, indexed like the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealBoard {
    states: Vector<RevealState>,
}

impl RevealBoard {
    /// All `count` cards face-down.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            states: std::iter::repeat(RevealState::FACE_DOWN).take(count).collect(),
        }
    }

    /// State of card `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over states in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = RevealState> + '_ {
        self.states.iter().copied()
    }

    /// Board after clicking card `index`. `None` if the index is out of range.
    #[must_use]
    pub fn reduce(&self, index: usize, image_count: usize) -> Option<(Self, RevealTransition)> {
        let current = self.get(index)?;
        let (next, transition) = current.click(image_count);
        let board = Self {
            states: self.states.update(index, next),
        };
        Some((board, transition))
    }
}
