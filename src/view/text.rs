//! Terminal front end.

use colored::Colorize;
use std::io::{BufRead, Write};

use super::View;
use crate::cards::Card;
use crate::table::Pile;

/// Line-oriented terminal view.
///
/// Generic over its streams so it can be driven by stdin/stdout or by
/// in-memory buffers.
pub struct TextView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the view, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = self.output.write_fmt(line).and_then(|_| self.output.write_all(b"\n")) {
            log::warn!("failed to write to terminal: {}", err);
        }
    }

    fn prompt(&mut self, text: &str) {
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush());
        if let Err(err) = written {
            log::warn!("failed to write prompt: {}", err);
        }
    }

    /// Next non-blank line, trimmed.
    fn read_line(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
                Err(err) => {
                    log::warn!("failed to read input: {}", err);
                    return None;
                }
            }
        }
    }
}

fn join(cards: impl IntoIterator<Item = Card>) -> String {
    cards
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl<R: BufRead, W: Write> View for TextView<R, W> {
    fn render_board(&mut self, piles: &[Pile; 4]) {
        self.emit(format_args!("{}", "Cards on the table:".bold()));
        for pile in piles {
            let ranks = pile
                .iter()
                .map(|c| c.rank().token())
                .collect::<Vec<_>>()
                .join(" ");
            self.emit(format_args!("{}: {}", pile.suit().name(), ranks));
        }
    }

    fn render_hand(&mut self, hand: &[Card]) {
        self.emit(format_args!("{} {}", "Your hand:".bold(), join(hand.iter().copied())));
    }

    fn render_legal_plays(&mut self, plays: &[Card]) {
        self.emit(format_args!("Legal plays: {}", join(plays.iter().copied())));
    }

    fn render_message(&mut self, message: &str) {
        self.emit(format_args!("{}", message));
    }

    fn render_error(&mut self, error: &str) {
        self.emit(format_args!("{} {}", "Error:".red().bold(), error));
    }

    fn render_score(&mut self, name: &str, discards: &[Card], prior_total: u32, round_delta: u32) {
        self.emit(format_args!(
            "{}'s discards: {}",
            name.yellow(),
            join(discards.iter().copied())
        ));
        self.emit(format_args!(
            "{}'s score: {} + {} = {}",
            name.yellow(),
            prior_total,
            round_delta,
            prior_total + round_delta
        ));
    }

    fn render_win(&mut self, name: &str) {
        self.emit(format_args!("{} wins!", name.yellow().bold()));
    }

    fn render_deck(&mut self, cards: &[Card]) {
        for row in cards.chunks(13) {
            self.emit(format_args!("{}", join(row.iter().copied())));
        }
    }

    fn request_command(&mut self) -> Option<String> {
        self.prompt("> ");
        self.read_line()
    }

    fn request_card_token(&mut self, prompt: &str) -> Option<String> {
        if !prompt.is_empty() {
            self.prompt(prompt);
            self.prompt(" ");
        }
        self.read_line()
    }
}
