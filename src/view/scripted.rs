//! Headless view: queued input, recorded output.

use std::collections::VecDeque;

use super::View;
use crate::cards::Card;
use crate::table::Pile;

/// Something the engine asked the view to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Board(Vec<Vec<Card>>),
    Hand(Vec<Card>),
    LegalPlays(Vec<Card>),
    Message(String),
    Error(String),
    Score {
        name: String,
        discards: Vec<Card>,
        prior_total: u32,
        round_delta: u32,
    },
    Win(String),
    Deck(Vec<Card>),
    Prompt(String),
}

/// View that answers requests from a queue and records every render.
///
/// When the queue runs dry, requests return `None`, which the engine treats
/// as the end of input.
///
/// ```
/// use straights::view::{ScriptedView, View, ViewEvent};
///
/// let mut view = ScriptedView::new(["play 7S"]);
/// assert_eq!(view.request_command().as_deref(), Some("play 7S"));
/// assert_eq!(view.request_command(), None);
///
/// view.render_message("hello");
/// assert_eq!(view.events(), &[ViewEvent::Message("hello".into())]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    events: Vec<ViewEvent>,
}

impl ScriptedView {
    /// Create a view that will answer with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    /// Queue another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Inputs not consumed yet.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Everything rendered so far, in order.
    #[must_use]
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Forget recorded events.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Rendered error lines.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rendered message lines.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Announced winners.
    pub fn wins(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Win(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl View for ScriptedView {
    fn render_board(&mut self, piles: &[Pile; 4]) {
        let piles = piles.iter().map(|p| p.iter().collect()).collect();
        self.events.push(ViewEvent::Board(piles));
    }

    fn render_hand(&mut self, hand: &[Card]) {
        self.events.push(ViewEvent::Hand(hand.to_vec()));
    }

    fn render_legal_plays(&mut self, plays: &[Card]) {
        self.events.push(ViewEvent::LegalPlays(plays.to_vec()));
    }

    fn render_message(&mut self, message: &str) {
        self.events.push(ViewEvent::Message(message.to_string()));
    }

    fn render_error(&mut self, error: &str) {
        self.events.push(ViewEvent::Error(error.to_string()));
    }

    fn render_score(&mut self, name: &str, discards: &[Card], prior_total: u32, round_delta: u32) {
        self.events.push(ViewEvent::Score {
            name: name.to_string(),
            discards: discards.to_vec(),
            prior_total,
            round_delta,
        });
    }

    fn render_win(&mut self, name: &str) {
        self.events.push(ViewEvent::Win(name.to_string()));
    }

    fn render_deck(&mut self, cards: &[Card]) {
        self.events.push(ViewEvent::Deck(cards.to_vec()));
    }

    fn request_command(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn request_card_token(&mut self, prompt: &str) -> Option<String> {
        self.events.push(ViewEvent::Prompt(prompt.to_string()));
        self.inputs.pop_front()
    }
}
