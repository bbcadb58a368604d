//! Presentation boundary.
//!
//! The engine talks to the outside world only through `View`: it hands over
//! plain data (cards, names, scores) and gets raw command strings back.
//! Formatting, colors and prompting belong to the implementation.
//!
//! - `TextView`: colored terminal output over any `BufRead`/`Write` pair
//! - `ScriptedView`: feeds queued commands and records what was rendered,
//!   for headless games and tests

pub mod text;
pub mod scripted;

pub use text::TextView;
pub use scripted::{ScriptedView, ViewEvent};

use crate::cards::Card;
use crate::table::Pile;

/// What the engine needs from a front end.
pub trait View {
    /// Show the four piles, clubs to spades.
    fn render_board(&mut self, piles: &[Pile; 4]);

    /// Show the acting player's hand.
    fn render_hand(&mut self, hand: &[Card]);

    /// Show which cards in hand can be played.
    fn render_legal_plays(&mut self, plays: &[Card]);

    /// Show an informational line.
    fn render_message(&mut self, message: &str);

    /// Show a recoverable error.
    fn render_error(&mut self, error: &str);

    /// Show a player's end-of-round discards and score breakdown.
    fn render_score(&mut self, name: &str, discards: &[Card], prior_total: u32, round_delta: u32);

    /// Announce a winner.
    fn render_win(&mut self, name: &str);

    /// Show the full deck order (debug command).
    fn render_deck(&mut self, cards: &[Card]);

    /// Read the next command line. `None` means input is exhausted.
    fn request_command(&mut self) -> Option<String>;

    /// Read a card token after showing `prompt`. `None` means input is
    /// exhausted.
    fn request_card_token(&mut self, prompt: &str) -> Option<String>;
}
