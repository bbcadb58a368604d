//! Game configuration.
//!
//! The numbers that shape a game of Straights (seat count, hand size, anchor
//! rank, score ceiling) live here instead of in process-wide constants, so
//! tests and the binary can run shortened or stacked games.

use serde::{Deserialize, Serialize};

use super::error::RulesError;
use crate::cards::{Card, Rank, Suit};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deck seed (0 = derive from the current time).
    pub seed: u64,

    /// Number of seats at the table.
    pub player_count: usize,

    /// Cards dealt to each seat at round start.
    /// `player_count * hand_size` must deal out the whole deck.
    pub hand_size: usize,

    /// Rank that may start an empty pile.
    pub anchor_rank: Rank,

    /// Whoever holds this card takes the first turn of a round.
    pub starting_card: Card,

    /// The game ends after the round in which any total reaches this value.
    pub score_ceiling: u32,

    /// How many times the deck is shuffled per round.
    pub shuffle_passes: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            player_count: 4,
            hand_size: 13,
            anchor_rank: Rank::SEVEN,
            starting_card: Card::new(Rank::SEVEN, Suit::Spades),
            score_ceiling: 80,
            shuffle_passes: 100,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom score ceiling.
    #[must_use]
    pub fn with_score_ceiling(mut self, ceiling: u32) -> Self {
        self.score_ceiling = ceiling;
        self
    }

    /// Create a new config with custom shuffle pass count.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: u32) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Create a new config with a custom seat count and hand size.
    #[must_use]
    pub fn with_table(mut self, player_count: usize, hand_size: usize) -> Self {
        self.player_count = player_count;
        self.hand_size = hand_size;
        self
    }

    /// Check the configuration can run a game.
    ///
    /// Every card must be dealt, otherwise the starting card could stay in
    /// the deck and nobody would open the round.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.player_count == 0 || self.player_count > u8::MAX as usize {
            return Err(RulesError::InvalidConfig(format!(
                "player count must be 1-255, got {}",
                self.player_count
            )));
        }
        if self.player_count * self.hand_size != DECK_SIZE {
            return Err(RulesError::InvalidConfig(format!(
                "{} players x {} cards does not deal a {}-card deck",
                self.player_count, self.hand_size, DECK_SIZE
            )));
        }
        if self.starting_card.rank() != self.anchor_rank {
            return Err(RulesError::InvalidConfig(format!(
                "starting card {} does not have the anchor rank {}",
                self.starting_card, self.anchor_rank
            )));
        }
        if self.shuffle_passes == 0 {
            return Err(RulesError::InvalidConfig(
                "at least one shuffle pass is required".to_string(),
            ));
        }
        Ok(())
    }
}
