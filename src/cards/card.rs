//! Cards, ranks and suits.
//!
//! Tokens are the rank token followed by the suit letter:
//!
//! ```
//! use straights::cards::{Card, Rank, Suit};
//!
//! let ten = Card::new(Rank::new(10).unwrap(), Suit::Hearts);
//! assert_eq!(ten.to_string(), "10H");
//!
//! let ace: Card = "AC".parse().unwrap();
//! assert_eq!(ace, Card::new(Rank::ACE, Suit::Clubs));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::{CommandError, RulesError};

/// Card suit, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for a raw index, if there is one.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }

    /// Single-letter token.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Suit for a token letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.letter() == letter)
    }

    /// Display name ("Clubs").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card rank, 1 (ace) through 13 (king).
///
/// The rank value doubles as the card's penalty when discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

const RANK_TOKENS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const SEVEN: Rank = Rank(7);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its value, if it is in 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Rank> {
        if value >= 1 && value <= 13 {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Raw rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Rank token (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        RANK_TOKENS[(self.0 - 1) as usize]
    }

    /// Rank for a token, if there is one.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Rank> {
        RANK_TOKENS
            .iter()
            .position(|t| *t == token)
            .map(|i| Rank(i as u8 + 1))
    }

    /// All ranks, ace to king.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank out of range: {}", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card from typed parts.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Create a card from raw numeric parts (rank 1..=13, suit index 0..=3).
    pub fn from_parts(rank: u8, suit: u8) -> Result<Self, RulesError> {
        match (Rank::new(rank), Suit::from_index(suit)) {
            (Some(rank), Some(suit)) => Ok(Self::new(rank, suit)),
            _ => Err(RulesError::InvalidCardSpec { rank, suit }),
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Penalty for discarding this card: its face value.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.rank.0 as u32
    }

    /// Canonical token (`7S`, `10H`).
    #[must_use]
    pub fn token(self) -> String {
        self.to_string()
    }

    /// Same suit, ranks one apart in either direction.
    #[must_use]
    pub fn is_adjacent_to(self, other: Card) -> bool {
        self.is_front_adjacent_to(other) || self.is_back_adjacent_to(other)
    }

    /// Same suit, one rank below `other` (extends a run downwards).
    #[must_use]
    pub fn is_front_adjacent_to(self, other: Card) -> bool {
        self.suit == other.suit && self.rank.0 + 1 == other.rank.0
    }

    /// Same suit, one rank above `other` (extends a run upwards).
    #[must_use]
    pub fn is_back_adjacent_to(self, other: Card) -> bool {
        self.suit == other.suit && self.rank.0 == other.rank.0 + 1
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CommandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unresolved = || CommandError::UnresolvedToken(token.to_string());
        let letter = token.chars().last().ok_or_else(unresolved)?;
        let suit = Suit::from_letter(letter).ok_or_else(unresolved)?;
        let rank = Rank::from_token(&token[..token.len() - letter.len_utf8()])
            .ok_or_else(unresolved)?;
        Ok(Card::new(rank, suit))
    }
}
