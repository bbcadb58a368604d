//! A single suit pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Where a card was placed on its pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileEnd {
    /// The card opened an empty pile.
    Opened,
    /// Prepended below the current lowest rank.
    Front,
    /// Appended above the current highest rank.
    Back,
}

/// One suit's cards on the table, lowest rank at the front.
///
/// Backed by `im::Vector` so the table clones in O(1) for snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    suit: Suit,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Lowest card of the run.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Highest card of the run.
    #[must_use]
    pub fn back(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Cards from lowest to highest rank.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub(crate) fn push_front(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub(crate) fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}
