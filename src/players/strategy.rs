//! Decision policies for computer players.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::table::Table;

/// What a strategy wants to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Play(Card),
    Discard(Card),
}

impl Decision {
    /// The card the decision acts on.
    #[must_use]
    pub fn card(self) -> Card {
        match self {
            Decision::Play(card) | Decision::Discard(card) => card,
        }
    }
}

/// Decision policy for a computer player.
///
/// Strategies only read the hand and the table; the dispatcher commits the
/// decision. A strategy must choose a legal play whenever one exists, and
/// may only discard a card from `hand`.
pub trait Strategy: std::fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose an action, or `None` for an empty hand.
    fn decide(&self, hand: &[Card], table: &Table) -> Option<Decision>;
}

/// Greedy baseline: play the first legal card in hand order, otherwise
/// discard the first card in hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn decide(&self, hand: &[Card], table: &Table) -> Option<Decision> {
        hand.iter()
            .copied()
            .find(|c| table.is_legal_play(*c))
            .map(Decision::Play)
            .or_else(|| hand.first().copied().map(Decision::Discard))
    }
}
