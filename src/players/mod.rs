//! Players and computer decision policies.
//!
//! ## Key Types
//!
//! - `Player`: hand, discards and scores for whoever sits in a seat
//! - `PlayerKind`: `Human` (commands arrive through the view) or
//!   `Computer` (decisions come from an embedded `Strategy`)
//! - `Strategy`: decision policy for computer players
//! - `SimpleStrategy`: first legal play, otherwise discard the first card

pub mod player;
pub mod strategy;

pub use player::{Player, PlayerKind};
pub use strategy::{Decision, SimpleStrategy, Strategy};
