//! The 52-card deck.
//!
//! The deck owns every card for the life of a game. Dealing does not remove
//! cards, it advances a cursor: `cards()[..dealt()]` have been handed out
//! since the last `reset`, `undealt()` are still in the deck.

use rustc_hash::FxHashMap;

use super::card::{Card, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::error::RulesError;
use crate::core::rng::{GameRng, GameRngState};
use crate::players::Player;

/// Shuffled deck with a deal cursor and a token index.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    index: FxHashMap<String, Card>,
    cursor: usize,
    rng: GameRng,
    shuffle_passes: u32,
}

impl Deck {
    /// Build the deck in standard order (clubs, diamonds, hearts, spades;
    /// ace to king within each suit).
    ///
    /// `seed` 0 derives a seed from the clock.
    pub fn new(seed: u64) -> Result<Self, RulesError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in 0..Suit::ALL.len() as u8 {
            for rank in Rank::all() {
                cards.push(Card::from_parts(rank.value(), suit)?);
            }
        }
        let index = cards.iter().map(|c| (c.token(), *c)).collect();

        let seed = GameRng::resolve_seed(seed);
        log::debug!("deck seed: {}", seed);

        Ok(Self {
            cards,
            index,
            cursor: 0,
            rng: GameRng::new(seed),
            shuffle_passes: 1,
        })
    }

    /// Set how many shuffle passes `shuffle` performs.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: u32) -> Self {
        self.shuffle_passes = passes.max(1);
        self
    }

    /// The seed actually in use (never 0).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Reorder the whole deck with the seeded RNG.
    pub fn shuffle(&mut self) {
        for _ in 0..self.shuffle_passes {
            self.rng.shuffle(&mut self.cards);
        }
    }

    /// Replace the deck order with an explicit permutation of all 52 cards.
    ///
    /// The cursor is rewound. Used to replay a known deal.
    pub fn arrange(&mut self, order: &[Card]) -> Result<(), RulesError> {
        if order.len() != DECK_SIZE {
            return Err(RulesError::InvalidDeckOrder(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                order.len()
            )));
        }
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != DECK_SIZE {
            return Err(RulesError::InvalidDeckOrder(
                "order contains duplicate cards".to_string(),
            ));
        }
        self.cards = order.to_vec();
        self.cursor = 0;
        Ok(())
    }

    /// Take the next undealt card.
    pub fn deal_card(&mut self) -> Result<Card, RulesError> {
        let card = *self.cards.get(self.cursor).ok_or(RulesError::DeckExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Give the next undealt card to `player`.
    pub fn deal(&mut self, player: &mut Player) -> Result<(), RulesError> {
        let card = self.deal_card()?;
        player.give_card(card);
        Ok(())
    }

    /// Rewind the deal cursor. Card order is left alone.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Card for an exact token match.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<Card> {
        self.index.get(token).copied()
    }

    /// The full deck in its current order, dealt cards included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards not yet dealt this round.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    /// Number of cards dealt since the last reset.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.cursor
    }

    /// RNG position, for snapshots.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
