//! The four piles and the legal-play rule.
//!
//! A card is legal if it opens an empty pile with the anchor rank, or if it
//! is one rank above or below an end of its suit's pile.

use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileEnd};
use crate::cards::{Card, Rank, Suit};
use crate::core::error::RulesError;

/// The table: one pile per suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    piles: [Pile; 4],
    anchor: Rank,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Rank::SEVEN)
    }
}

impl Table {
    /// Create an empty table whose piles open on `anchor`.
    #[must_use]
    pub fn new(anchor: Rank) -> Self {
        Self {
            piles: Suit::ALL.map(Pile::new),
            anchor,
        }
    }

    /// Rank that opens an empty pile.
    #[must_use]
    pub fn anchor(&self) -> Rank {
        self.anchor
    }

    #[must_use]
    pub fn pile(&self, suit: Suit) -> &Pile {
        &self.piles[suit.index()]
    }

    /// All piles in suit order (clubs, diamonds, hearts, spades).
    #[must_use]
    pub fn piles(&self) -> &[Pile; 4] {
        &self.piles
    }

    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Could `card` be played right now?
    #[must_use]
    pub fn is_legal_play(&self, card: Card) -> bool {
        let pile = self.pile(card.suit());
        match (pile.front(), pile.back()) {
            (Some(front), Some(back)) => card.is_adjacent_to(front) || card.is_adjacent_to(back),
            _ => card.rank() == self.anchor,
        }
    }

    /// Place `card` on its pile.
    ///
    /// Callers validate with `is_legal_play` first; this re-checks and
    /// refuses rather than corrupt a pile.
    pub fn commit_play(&mut self, card: Card) -> Result<PileEnd, RulesError> {
        let anchor = self.anchor;
        let pile = &mut self.piles[card.suit().index()];
        match (pile.front(), pile.back()) {
            (None, _) | (_, None) if card.rank() == anchor => {
                pile.push_back(card);
                Ok(PileEnd::Opened)
            }
            (Some(front), _) if card.is_front_adjacent_to(front) => {
                pile.push_front(card);
                Ok(PileEnd::Front)
            }
            (_, Some(back)) if card.is_back_adjacent_to(back) => {
                pile.push_back(card);
                Ok(PileEnd::Back)
            }
            _ => Err(RulesError::IllegalPlay(card)),
        }
    }

    /// The cards of `hand` that are legal right now, in hand order.
    #[must_use]
    pub fn legal_plays_for(&self, hand: &[Card]) -> Vec<Card> {
        hand.iter().copied().filter(|c| self.is_legal_play(*c)).collect()
    }

    /// Empty every pile.
    pub fn clear(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
    }
}
