//! Error types.
//!
//! Two families:
//! - `CommandError`: a human typed something that can't be done right now.
//!   Rendered to the player, who is asked again. Never changes state.
//! - `RulesError`: an engine invariant was broken (a card in two places, a
//!   deal past the end of the deck). Callers should treat these as fatal.

use thiserror::Error;

use crate::cards::Card;
use crate::core::SeatId;

/// Recoverable errors on the human command path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid Command: no card named \"{0}\"")]
    UnresolvedToken(String),
    #[error("This is not a legal play")]
    IllegalPlay(Card),
    #[error("You do not hold {0}")]
    NotInHand(Card),
    #[error("You have a legal play. You may not discard.")]
    IllegalDiscard(Card),
    #[error("Invalid Command")]
    UnknownCommand(String),
}

/// Engine invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("no card has rank {rank} and suit index {suit}")]
    InvalidCardSpec { rank: u8, suit: u8 },
    #[error("deck exhausted: all cards have been dealt")]
    DeckExhausted,
    #[error("{0} does not extend its pile")]
    IllegalPlay(Card),
    #[error("{0} discarded while a legal play was available")]
    IllegalDiscard(Card),
    #[error("{0} is not in the acting player's hand")]
    CardNotInHand(Card),
    #[error("stacked deck is not a permutation of the 52 cards: {0}")]
    InvalidDeckOrder(String),
    #[error("starting card {0} was not dealt to any seat")]
    MissingStartingCard(Card),
    #[error("card conservation broken for {card}: {detail}")]
    CardConservation { card: Card, detail: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0} is not a seat at this table")]
    UnknownSeat(SeatId),
}
