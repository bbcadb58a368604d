//! Core engine types: seats, RNG, configuration, errors.
//!
//! Everything here is independent of the card model except the error types,
//! which carry the offending `Card` for diagnostics.

pub mod seat;
pub mod rng;
pub mod config;
pub mod error;

pub use seat::SeatId;
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DECK_SIZE};
pub use error::{CommandError, RulesError};
