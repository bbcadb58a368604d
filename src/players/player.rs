//! Per-seat player state.
//!
//! ## Scores
//!
//! Every discarded card adds its face value to both `round_score` and
//! `total_score`. `round_score` is cleared between rounds, `total_score`
//! never goes down.

use smallvec::SmallVec;

use super::strategy::{SimpleStrategy, Strategy};
use crate::cards::Card;
use crate::core::error::RulesError;

/// Who makes the decisions for a player.
#[derive(Debug)]
pub enum PlayerKind {
    /// Commands come from the view.
    Human,
    /// Decisions come from the embedded strategy.
    Computer(Box<dyn Strategy>),
}

/// A player: name, hand, discards and scores.
#[derive(Debug)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: SmallVec<[Card; 13]>,
    discards: Vec<Card>,
    round_score: u32,
    total_score: u32,
}

impl Player {
    /// Create a player of the given kind with an empty hand and no score.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: SmallVec::new(),
            discards: Vec::new(),
            round_score: 0,
            total_score: 0,
        }
    }

    /// Create a human player.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    /// Create a computer player backed by `strategy`.
    pub fn computer(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self::new(name, PlayerKind::Computer(Box::new(strategy)))
    }

    /// Create a computer player backed by `SimpleStrategy`.
    pub fn simple_computer(name: impl Into<String>) -> Self {
        Self::computer(name, SimpleStrategy)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards discarded this round, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    #[must_use]
    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Total score before this round's discards.
    #[must_use]
    pub fn prior_total(&self) -> u32 {
        self.total_score - self.round_score
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Add a card to the end of the hand.
    pub fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Take `card` out of the hand, keeping the order of the rest.
    pub fn remove_from_hand(&mut self, card: Card) -> Result<(), RulesError> {
        let pos = self
            .hand
            .iter()
            .position(|c| *c == card)
            .ok_or(RulesError::CardNotInHand(card))?;
        self.hand.remove(pos);
        Ok(())
    }

    /// Move `card` from hand to discards and score it.
    ///
    /// Returns the points added.
    pub fn discard(&mut self, card: Card) -> Result<u32, RulesError> {
        self.remove_from_hand(card)?;
        self.discards.push(card);
        let points = card.score();
        self.round_score += points;
        self.total_score += points;
        Ok(points)
    }

    /// Clear hand, discards and round score. Total score is kept.
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.discards.clear();
        self.round_score = 0;
    }

    /// Hand this seat over to a computer player.
    ///
    /// The replacement takes the hand, discards and both scores; this player
    /// is left empty-handed.
    pub fn substitute(&mut self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Player {
        Player {
            name: name.into(),
            kind: PlayerKind::Computer(Box::new(strategy)),
            hand: std::mem::take(&mut self.hand),
            discards: std::mem::take(&mut self.discards),
            round_score: self.round_score,
            total_score: self.total_score,
        }
    }
}
