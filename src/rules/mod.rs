//! Round and turn dispatch.
//!
//! `Game` owns the deck, the table and the seats, and drives:
//! - round start (reset, shuffle, deal, find the opener)
//! - the turn rotation, re-checking for the end of the round every turn
//! - human commands and computer strategies
//! - scoring and the end of the game
//!
//! Every change to hands, discards and piles goes through
//! `Game::commit_play` or `Game::commit_discard`.

pub mod command;
pub mod engine;

pub use command::Command;
pub use engine::{
    CardLocation, Game, GameOutcome, GameSnapshot, Phase, RoundOutcome, SeatSnapshot, Turn,
};
