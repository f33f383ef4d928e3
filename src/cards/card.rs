//! Deck cards - the face-down tiles on the board.
//!
//! A [`Card`] carries its stable id, the pair it belongs to, its face icon,
//! and the two flags the match engine drives: `is_flipped` and `is_matched`.
//! Exactly two cards in a deck share any `pair_id`, and `is_matched` is
//! always true for both of them or neither.

use serde::{Deserialize, Serialize};

use super::catalog::IconKey;

/// Unique identifier for a card instance within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by the two cards of a matching pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier for this card instance.
    pub id: CardId,

    /// The pair this card belongs to. Matching compares this, not the icon.
    pub pair_id: PairId,

    /// Symbolic face icon.
    pub icon: IconKey,

    /// Face-up? Stays true permanently once the card is matched.
    pub is_flipped: bool,

    /// Pair confirmed?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, pair_id: PairId, icon: IconKey) -> Self {
        Self {
            id,
            pair_id,
            icon,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Can this card be selected? False once face-up or matched.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Reveal the card face-up.
    pub fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Return the card face-down. Matched cards never flip back.
    pub fn flip_down(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    /// Confirm this card's pair. The card stays face-up permanently.
    pub fn set_matched(&mut self) {
        self.is_matched = true;
        self.is_flipped = true;
    }
}
