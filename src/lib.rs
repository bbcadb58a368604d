//! # straights
//!
//! Rules engine for Straights, a card game where players empty their hands
//! by building four suit piles outward from the sevens. A player with no
//! legal play discards a card and scores its face value. Rounds repeat until
//! someone reaches the score ceiling; the lowest total wins.
//!
//! ## Design Principles
//!
//! 1. **One commit path**: every change to hands, discards and piles goes
//!    through `Game::commit_play` or `Game::commit_discard`, so card
//!    conservation can be audited after each one.
//!
//! 2. **Deterministic**: the deck is shuffled by a seeded ChaCha8 RNG. The
//!    same seed and the same inputs replay the same game.
//!
//! 3. **Presentation at the edge**: the engine talks to a `View`. The crate
//!    ships a terminal view and a scripted one for headless play.
//!
//! ## Modules
//!
//! - `core`: Seat ids, RNG, configuration, errors
//! - `cards`: Card values and the deck
//! - `table`: The four suit piles and the legal-play rule
//! - `players`: Hands, scores and computer strategies
//! - `rules`: Command parsing and the round/turn dispatcher
//! - `view`: Presentation contract and implementations

pub mod core;
pub mod cards;
pub mod table;
pub mod players;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    SeatId, GameRng, GameRngState, GameConfig, DECK_SIZE,
    CommandError, RulesError,
};

pub use crate::cards::{Card, Rank, Suit, Deck};

pub use crate::table::{Pile, PileEnd, Table};

pub use crate::players::{Player, PlayerKind, Decision, Strategy, SimpleStrategy};

pub use crate::rules::{
    Command, Game, GameOutcome, GameSnapshot, SeatSnapshot,
    Phase, RoundOutcome, Turn, CardLocation,
};

pub use crate::view::{View, TextView, ScriptedView, ViewEvent};
