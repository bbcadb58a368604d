//! Human command vocabulary.
//!
//! A command line is a verb, optionally followed by a card token:
//! `play 7S`, `discard 10H`, `deck`, `quit`, `ragequit`. When `play` or
//! `discard` arrive without a token the engine asks for one separately.

use std::str::FromStr;

use crate::core::error::CommandError;

/// A parsed human command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a card onto the table.
    Play(Option<String>),
    /// Discard a card (only when nothing is playable).
    Discard(Option<String>),
    /// Print the deck order.
    Deck,
    /// End the game now.
    Quit,
    /// Hand this seat to a computer player.
    RageQuit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unknown = || CommandError::UnknownCommand(line.trim().to_string());
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(unknown)?;
        let token = words.next().map(str::to_string);
        if words.next().is_some() {
            return Err(unknown());
        }

        match (verb, token) {
            ("play", token) => Ok(Command::Play(token)),
            ("discard", token) => Ok(Command::Discard(token)),
            ("deck", None) => Ok(Command::Deck),
            ("quit", None) => Ok(Command::Quit),
            ("ragequit", None) => Ok(Command::RageQuit),
            _ => Err(unknown()),
        }
    }
}
