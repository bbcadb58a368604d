//! Card model and deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the two halves of a card
//! - `Card`: an immutable rank/suit pair with a canonical token (`7S`, `10H`)
//! - `Deck`: the fixed 52-card set, seeded shuffle, deal cursor, token lookup
//!
//! Cards are plain `Copy` values. There is exactly one card per (rank, suit)
//! pair, so value equality is identity.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
