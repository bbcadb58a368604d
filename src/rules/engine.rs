//! The round/turn dispatcher.
//!
//! ## Phases
//!
//! `Setup → RoundStart → TurnRotation → RoundEnd → Scoring → (EndOfGame |
//! RoundStart)`, with `Quit` reachable from any human turn.
//!
//! ## Rotation
//!
//! Seats are visited in fixed order from whoever holds the starting card,
//! wrapping indefinitely. Before every visit the round-end condition (all
//! hands empty) is re-evaluated; an empty-handed seat is skipped without a
//! prompt. After a ragequit the same seat is visited again before the
//! rotation moves on.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::command::Command;
use crate::cards::{Card, Deck, Suit};
use crate::core::config::GameConfig;
use crate::core::error::{CommandError, RulesError};
use crate::core::rng::GameRngState;
use crate::core::seat::SeatId;
use crate::players::{Decision, Player, PlayerKind, SimpleStrategy};
use crate::table::{PileEnd, Table};
use crate::view::View;

const DIVIDER: &str = "----------------------------------------";

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Seats are being filled.
    Setup,
    /// Table cleared, cards being dealt.
    RoundStart,
    /// Players are taking turns.
    TurnRotation,
    /// Every hand is empty.
    RoundEnd,
    /// Round scores have been shown.
    Scoring,
    /// Someone reached the score ceiling; winners announced.
    EndOfGame,
    /// A human quit.
    Quit,
}

/// What happened on one visit to a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Played(Card),
    Discarded(Card),
    /// The seat had no cards.
    Skipped,
    /// A human printed the deck; the turn ended with nothing moved.
    Passed,
    /// A human ragequit; the seat must be visited again.
    Substituted,
    /// A human quit the game (or input ran out).
    Quit,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed,
    Quit,
}

/// How the game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every seat tied for the lowest total.
    Winners(Vec<SeatId>),
    /// Someone quit before the game finished.
    Quit,
}

impl GameOutcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        match self {
            GameOutcome::Winners(seats) => seats.contains(&seat),
            GameOutcome::Quit => false,
        }
    }
}

/// Where a card is right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardLocation {
    Deck,
    Hand(SeatId),
    Discards(SeatId),
    Pile(Suit),
}

/// One seat in a `GameSnapshot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub name: String,
    pub human: bool,
    pub hand: Vec<Card>,
    pub discards: Vec<Card>,
    pub round_score: u32,
    pub total_score: u32,
}

/// Everything observable about a game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub phase: Phase,
    pub table: Table,
    pub seats: Vec<SeatSnapshot>,
    pub deck_order: Vec<Card>,
    pub deck_dealt: usize,
    pub rng: GameRngState,
}

/// A game of Straights.
pub struct Game<V: View> {
    config: GameConfig,
    deck: Deck,
    table: Table,
    seats: Vec<Player>,
    view: V,
    phase: Phase,
    round: u32,
}

impl<V: View> Game<V> {
    /// Create a game with no seats filled.
    pub fn new(config: GameConfig, view: V) -> Result<Self, RulesError> {
        config.validate()?;
        let deck = Deck::new(config.seed)?.with_shuffle_passes(config.shuffle_passes);
        let table = Table::new(config.anchor_rank);
        Ok(Self {
            deck,
            table,
            seats: Vec::with_capacity(config.player_count),
            view,
            phase: Phase::Setup,
            round: 0,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Players in seating order.
    #[must_use]
    pub fn seats(&self) -> &[Player] {
        &self.seats
    }

    /// The player in `seat`.
    pub fn player(&self, seat: SeatId) -> Result<&Player, RulesError> {
        self.seats.get(seat.index()).ok_or(RulesError::UnknownSeat(seat))
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the game, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    // === Seating ===

    /// Put a player in the next empty seat.
    pub fn add_player(&mut self, player: Player) -> Result<SeatId, RulesError> {
        if self.seats.len() >= self.config.player_count {
            return Err(RulesError::InvalidConfig(format!(
                "table already has {} players",
                self.config.player_count
            )));
        }
        let seat = SeatId::new(self.seats.len() as u8);
        log::debug!("{} is {}", seat, player.name());
        self.seats.push(player);
        Ok(seat)
    }

    /// Fill the remaining seats from a plan such as `"hccc"`
    /// (`h` human, `c` computer).
    pub fn seat_players(&mut self, plan: &str) -> Result<(), RulesError> {
        for choice in plan.chars() {
            let number = self.seats.len() + 1;
            let player = seat_choice(&choice.to_string(), number).ok_or_else(|| {
                RulesError::InvalidConfig(format!("unknown seat kind '{}' in \"{}\"", choice, plan))
            })?;
            self.add_player(player)?;
        }
        Ok(())
    }

    /// Ask through the view whether each remaining seat is human or
    /// computer.
    ///
    /// Returns `false` if input ran out before every seat was filled.
    pub fn seat_players_interactively(&mut self) -> Result<bool, RulesError> {
        while self.seats.len() < self.config.player_count {
            let number = self.seats.len() + 1;
            self.view.render_message(&format!(
                "Is Player {} a human (h) or a computer (c)?",
                number
            ));
            loop {
                let Some(answer) = self.view.request_command() else {
                    log::warn!("input closed while seating players");
                    return Ok(false);
                };
                match seat_choice(answer.trim(), number) {
                    Some(player) => {
                        self.add_player(player)?;
                        break;
                    }
                    None => self.view.render_error("Invalid Option"),
                }
            }
        }
        Ok(true)
    }

    // === Game loop ===

    /// Play rounds until someone reaches the score ceiling or quits.
    pub fn run(&mut self) -> Result<GameOutcome, RulesError> {
        loop {
            let opener = self.start_round()?;
            if self.play_round(opener)? == RoundOutcome::Quit {
                return Ok(GameOutcome::Quit);
            }
            if let Some(winners) = self.finish_round() {
                return Ok(GameOutcome::Winners(winners));
            }
        }
    }

    /// Reset, shuffle and deal. Returns the seat holding the starting card.
    pub fn start_round(&mut self) -> Result<SeatId, RulesError> {
        self.prepare_round()?;
        self.deck.shuffle();
        self.deal_round()
    }

    /// Reset and deal from an explicit deck order instead of a shuffle.
    ///
    /// Seat `i` receives `order[i * hand_size..(i + 1) * hand_size]`.
    pub fn start_round_with_order(&mut self, order: &[Card]) -> Result<SeatId, RulesError> {
        self.prepare_round()?;
        self.deck.arrange(order)?;
        self.deal_round()
    }

    fn prepare_round(&mut self) -> Result<(), RulesError> {
        if self.seats.len() != self.config.player_count {
            return Err(RulesError::InvalidConfig(format!(
                "{} of {} seats filled",
                self.seats.len(),
                self.config.player_count
            )));
        }
        self.round += 1;
        self.phase = Phase::RoundStart;
        for player in &mut self.seats {
            player.reset_for_new_round();
        }
        self.table.clear();
        self.deck.reset();
        Ok(())
    }

    fn deal_round(&mut self) -> Result<SeatId, RulesError> {
        for player in &mut self.seats {
            for _ in 0..self.config.hand_size {
                self.deck.deal(player)?;
            }
        }
        let starting = self.config.starting_card;
        let opener = self
            .holder(starting)
            .ok_or(RulesError::MissingStartingCard(starting))?;

        log::info!(
            "round {} dealt, {} opens holding {}",
            self.round,
            self.seats[opener.index()].name(),
            starting
        );
        self.view.render_message("A new round begins.");
        self.phase = Phase::TurnRotation;
        Ok(opener)
    }

    /// Visit seats from `first` until every hand is empty or someone quits.
    pub fn play_round(&mut self, first: SeatId) -> Result<RoundOutcome, RulesError> {
        self.player(first)?;
        self.phase = Phase::TurnRotation;
        let mut seat = first;
        loop {
            if self.is_end_of_round() {
                log::info!("round {} over", self.round);
                self.phase = Phase::RoundEnd;
                return Ok(RoundOutcome::Completed);
            }
            if self.take_turn(seat)? == Turn::Quit {
                log::info!("{} quit the game", self.seats[seat.index()].name());
                self.phase = Phase::Quit;
                return Ok(RoundOutcome::Quit);
            }
            seat = seat.next(self.seats.len());
        }
    }

    /// Show the round's scores and check for the end of the game.
    ///
    /// Returns the winners if the game is over.
    pub fn finish_round(&mut self) -> Option<Vec<SeatId>> {
        self.phase = Phase::Scoring;
        self.view.render_message(DIVIDER);
        self.view.render_message("Scores:");
        for player in &self.seats {
            self.view.render_score(
                player.name(),
                player.discards(),
                player.prior_total(),
                player.round_score(),
            );
        }
        self.view.render_message(DIVIDER);

        if !self.is_end_of_game() {
            return None;
        }
        let winners = self.winners();
        for seat in &winners {
            let name = self.seats[seat.index()].name();
            log::info!("{} wins with {}", name, self.seats[seat.index()].total_score());
            self.view.render_win(name);
        }
        self.phase = Phase::EndOfGame;
        Some(winners)
    }

    /// Every hand is empty.
    #[must_use]
    pub fn is_end_of_round(&self) -> bool {
        self.seats.iter().all(|p| p.hand().is_empty())
    }

    /// Some total has reached the ceiling.
    #[must_use]
    pub fn is_end_of_game(&self) -> bool {
        self.seats
            .iter()
            .any(|p| p.total_score() >= self.config.score_ceiling)
    }

    /// Seats sharing the lowest total score.
    #[must_use]
    pub fn winners(&self) -> Vec<SeatId> {
        let Some(lowest) = self.seats.iter().map(Player::total_score).min() else {
            return Vec::new();
        };
        SeatId::all(self.seats.len())
            .filter(|s| self.seats[s.index()].total_score() == lowest)
            .collect()
    }

    // === Turns ===

    /// Give `seat` its turn.
    ///
    /// A ragequit replaces the player and the replacement takes the same
    /// turn, so this never returns `Turn::Substituted`.
    pub fn take_turn(&mut self, seat: SeatId) -> Result<Turn, RulesError> {
        loop {
            let turn = if self.player(seat)?.is_human() {
                self.human_turn(seat)?
            } else {
                self.computer_turn(seat)?
            };
            if turn != Turn::Substituted {
                return Ok(turn);
            }
        }
    }

    fn computer_turn(&mut self, seat: SeatId) -> Result<Turn, RulesError> {
        let player = self.player(seat)?;
        let decision = match player.kind() {
            PlayerKind::Computer(strategy) => {
                let decision = strategy.decide(player.hand(), &self.table);
                if let Some(decision) = decision {
                    log::debug!(
                        "{} ({} strategy) chose {}",
                        player.name(),
                        strategy.name(),
                        decision.card()
                    );
                }
                decision
            }
            PlayerKind::Human => None,
        };
        let Some(decision) = decision else {
            return Ok(Turn::Skipped);
        };
        let name = player.name().to_string();

        self.view.render_message(DIVIDER);
        match decision {
            Decision::Play(card) => {
                self.commit_play(seat, card)?;
                self.view.render_message(&format!("{} plays {}", name, card));
                Ok(Turn::Played(card))
            }
            Decision::Discard(card) => {
                self.commit_discard(seat, card)?;
                self.view.render_message(&format!("{} discards {}", name, card));
                Ok(Turn::Discarded(card))
            }
        }
    }

    fn human_turn(&mut self, seat: SeatId) -> Result<Turn, RulesError> {
        let player = self.player(seat)?;
        if player.hand().is_empty() {
            return Ok(Turn::Skipped);
        }
        let name = player.name().to_string();
        let legal = self.table.legal_plays_for(player.hand());
        let hand = player.hand().to_vec();

        self.view.render_message(DIVIDER);
        self.view.render_message(&format!("It's {}'s turn to play", name));
        self.view.render_board(self.table.piles());
        self.view.render_hand(&hand);
        self.view.render_legal_plays(&legal);

        loop {
            let Some(line) = self.view.request_command() else {
                log::warn!("input closed during {}'s turn", name);
                return Ok(Turn::Quit);
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    self.view.render_error(&err.to_string());
                    continue;
                }
            };
            if let Some(turn) = self.human_command(seat, &name, command)? {
                return Ok(turn);
            }
        }
    }

    /// Carry out one human command. `None` means ask again.
    fn human_command(
        &mut self,
        seat: SeatId,
        name: &str,
        command: Command,
    ) -> Result<Option<Turn>, RulesError> {
        match command {
            Command::Play(token) => {
                let Some(token) = self.card_token(token) else {
                    return Ok(Some(Turn::Quit));
                };
                match self.check_play(seat, &token) {
                    Ok(card) => {
                        self.view.render_message(&format!("{} plays {}", name, card));
                        self.commit_play(seat, card)?;
                        Ok(Some(Turn::Played(card)))
                    }
                    Err(err) => self.reject(err),
                }
            }
            Command::Discard(token) => {
                let Some(token) = self.card_token(token) else {
                    return Ok(Some(Turn::Quit));
                };
                match self.check_discard(seat, &token) {
                    Ok(card) => {
                        self.view.render_message(&format!("{} discards {}", name, card));
                        self.commit_discard(seat, card)?;
                        Ok(Some(Turn::Discarded(card)))
                    }
                    Err(err) => self.reject(err),
                }
            }
            Command::Deck => {
                self.view.render_deck(self.deck.cards());
                Ok(Some(Turn::Passed))
            }
            Command::Quit => Ok(Some(Turn::Quit)),
            Command::RageQuit => {
                self.view.render_message(&format!(
                    "{} ragequits. A computer will now take over.",
                    name
                ));
                let slot = &mut self.seats[seat.index()];
                let ghost = slot.substitute(format!("{}'s Ghost", name), SimpleStrategy);
                log::debug!("{} replaced by {}", name, ghost.name());
                *slot = ghost;
                Ok(Some(Turn::Substituted))
            }
        }
    }

    fn card_token(&mut self, token: Option<String>) -> Option<String> {
        token.or_else(|| self.view.request_card_token("Which card?"))
    }

    fn reject(&mut self, err: CommandError) -> Result<Option<Turn>, RulesError> {
        log::debug!("rejected command: {:?}", err);
        self.view.render_error(&err.to_string());
        Ok(None)
    }

    /// Resolve, then check the card is held and legal.
    fn check_play(&self, seat: SeatId, token: &str) -> Result<Card, CommandError> {
        let card = self
            .deck
            .lookup(token)
            .ok_or_else(|| CommandError::UnresolvedToken(token.to_string()))?;
        let held = self.seats[seat.index()].has_card(card);
        if !held || !self.table.is_legal_play(card) {
            return Err(CommandError::IllegalPlay(card));
        }
        Ok(card)
    }

    /// Resolve, then ownership, then "no legal play exists".
    fn check_discard(&self, seat: SeatId, token: &str) -> Result<Card, CommandError> {
        let card = self
            .deck
            .lookup(token)
            .ok_or_else(|| CommandError::UnresolvedToken(token.to_string()))?;
        let player = &self.seats[seat.index()];
        if !player.has_card(card) {
            return Err(CommandError::NotInHand(card));
        }
        if !self.table.legal_plays_for(player.hand()).is_empty() {
            return Err(CommandError::IllegalDiscard(card));
        }
        Ok(card)
    }

    // === Commit points ===

    /// Move `card` from `seat`'s hand onto its pile.
    pub fn commit_play(&mut self, seat: SeatId, card: Card) -> Result<PileEnd, RulesError> {
        let player = self
            .seats
            .get_mut(seat.index())
            .ok_or(RulesError::UnknownSeat(seat))?;
        if !player.has_card(card) {
            return Err(RulesError::CardNotInHand(card));
        }
        let end = self.table.commit_play(card)?;
        player.remove_from_hand(card)?;
        log::debug!("{} played {} ({:?})", player.name(), card, end);
        self.debug_audit()?;
        Ok(end)
    }

    /// Move `card` from `seat`'s hand to its discards and score it.
    ///
    /// Refused while the hand still has a legal play.
    pub fn commit_discard(&mut self, seat: SeatId, card: Card) -> Result<u32, RulesError> {
        let player = self
            .seats
            .get_mut(seat.index())
            .ok_or(RulesError::UnknownSeat(seat))?;
        if !self.table.legal_plays_for(player.hand()).is_empty() {
            return Err(RulesError::IllegalDiscard(card));
        }
        let points = player.discard(card)?;
        log::debug!(
            "{} discarded {} (+{}, total {})",
            player.name(),
            card,
            points,
            player.total_score()
        );
        self.debug_audit()?;
        Ok(points)
    }

    // === Bookkeeping ===

    /// Seat whose hand holds `card`.
    #[must_use]
    pub fn holder(&self, card: Card) -> Option<SeatId> {
        self.seats
            .iter()
            .position(|p| p.has_card(card))
            .map(|i| SeatId::new(i as u8))
    }

    /// Where `card` is right now.
    #[must_use]
    pub fn locate(&self, card: Card) -> Option<CardLocation> {
        if self.table.pile(card.suit()).contains(card) {
            return Some(CardLocation::Pile(card.suit()));
        }
        if let Some(seat) = self.holder(card) {
            return Some(CardLocation::Hand(seat));
        }
        if let Some(i) = self.seats.iter().position(|p| p.discards().contains(&card)) {
            return Some(CardLocation::Discards(SeatId::new(i as u8)));
        }
        if self.deck.undealt().contains(&card) {
            return Some(CardLocation::Deck);
        }
        None
    }

    /// Check that every card is in exactly one place.
    pub fn audit(&self) -> Result<(), RulesError> {
        let mut seen: FxHashMap<Card, usize> = FxHashMap::default();
        let everywhere = self
            .deck
            .undealt()
            .iter()
            .copied()
            .chain(self.seats.iter().flat_map(|p| p.hand().iter().copied()))
            .chain(self.seats.iter().flat_map(|p| p.discards().iter().copied()))
            .chain(self.table.piles().iter().flat_map(|p| p.iter()));
        for card in everywhere {
            *seen.entry(card).or_default() += 1;
        }

        for &card in self.deck.cards() {
            match seen.get(&card).copied().unwrap_or(0) {
                1 => {}
                0 => {
                    return Err(RulesError::CardConservation {
                        card,
                        detail: "card is nowhere".to_string(),
                    })
                }
                n => {
                    return Err(RulesError::CardConservation {
                        card,
                        detail: format!("card is in {} places", n),
                    })
                }
            }
        }
        Ok(())
    }

    fn debug_audit(&self) -> Result<(), RulesError> {
        if cfg!(debug_assertions) {
            self.audit()?;
        }
        Ok(())
    }

    /// Capture the whole observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round,
            phase: self.phase,
            table: self.table.clone(),
            seats: self
                .seats
                .iter()
                .map(|p| SeatSnapshot {
                    name: p.name().to_string(),
                    human: p.is_human(),
                    hand: p.hand().to_vec(),
                    discards: p.discards().to_vec(),
                    round_score: p.round_score(),
                    total_score: p.total_score(),
                })
                .collect(),
            deck_order: self.deck.cards().to_vec(),
            deck_dealt: self.deck.dealt(),
            rng: self.deck.rng_state(),
        }
    }
}

fn seat_choice(answer: &str, number: usize) -> Option<Player> {
    match answer {
        "h" => Some(Player::human(format!("Player{}", number))),
        "c" => Some(Player::simple_computer(format!("Computer{}", number))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DECK_SIZE;
    use crate::view::{ScriptedView, ViewEvent};

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    /// Deck order that deals `first_hand` to seat 0 and the rest of the
    /// deck, in standard order, to seats 1-3.
    fn stacked(first_hand: &[&str]) -> Vec<Card> {
        let first: Vec<Card> = first_hand.iter().map(|t| card(t)).collect();
        let rest = Deck::new(1)
            .unwrap()
            .cards()
            .iter()
            .copied()
            .filter(|c| !first.contains(c))
            .collect::<Vec<_>>();
        first.into_iter().chain(rest).collect()
    }

    /// Thirteen clubs-and-hearts cards with no seven.
    const NO_SEVENS: [&str; 13] = [
        "AC", "2C", "3C", "4C", "5C", "6C", "8C", "9C", "10C", "JC", "QC", "KC", "5H",
    ];

    fn game(plan: &str, inputs: &[&str]) -> Game<ScriptedView> {
        let mut game = Game::new(
            GameConfig::default().with_seed(42),
            ScriptedView::new(inputs.iter().copied()),
        )
        .unwrap();
        game.seat_players(plan).unwrap();
        game
    }

    #[test]
    fn test_seat_players_from_plan() {
        let g = game("hccc", &[]);
        let names: Vec<_> = g.seats().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["Player1", "Computer2", "Computer3", "Computer4"]);
        assert!(g.seats()[0].is_human());
        assert_eq!(g.phase(), Phase::Setup);
    }

    #[test]
    fn test_seat_plan_rejects_unknown_kind_and_overflow() {
        let mut g = Game::new(GameConfig::default(), ScriptedView::default()).unwrap();
        assert!(matches!(g.seat_players("hx"), Err(RulesError::InvalidConfig(_))));

        let mut g = Game::new(GameConfig::default(), ScriptedView::default()).unwrap();
        assert!(matches!(g.seat_players("ccccc"), Err(RulesError::InvalidConfig(_))));
        assert_eq!(g.seats().len(), 4);
    }

    #[test]
    fn test_seat_players_interactively() {
        let mut g = Game::new(
            GameConfig::default(),
            ScriptedView::new(["h", "robot", "c", "c", "h"]),
        )
        .unwrap();

        assert_eq!(g.seat_players_interactively(), Ok(true));
        let names: Vec<_> = g.seats().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["Player1", "Computer2", "Computer3", "Player4"]);
        assert_eq!(g.view().errors(), vec!["Invalid Option"]);
    }

    #[test]
    fn test_seat_players_interactively_out_of_input() {
        let mut g = Game::new(GameConfig::default(), ScriptedView::new(["c"])).unwrap();
        assert_eq!(g.seat_players_interactively(), Ok(false));
        assert_eq!(g.seats().len(), 1);
    }

    #[test]
    fn test_start_round_needs_full_table() {
        let mut g = Game::new(GameConfig::default(), ScriptedView::default()).unwrap();
        g.seat_players("cc").unwrap();
        assert!(matches!(g.start_round(), Err(RulesError::InvalidConfig(_))));
    }

    #[test]
    fn test_start_round_deals_everything() {
        let mut g = game("cccc", &[]);
        let opener = g.start_round().unwrap();

        assert_eq!(g.round(), 1);
        assert_eq!(g.phase(), Phase::TurnRotation);
        assert!(g.seats().iter().all(|p| p.hand().len() == 13));
        assert_eq!(g.deck().dealt(), DECK_SIZE);
        assert!(g.player(opener).unwrap().has_card(card("7S")));
        assert_eq!(g.holder(card("7S")), Some(opener));
        assert!(g.audit().is_ok());
    }

    #[test]
    fn test_stacked_deal() {
        let mut g = game("hccc", &[]);
        let opener = g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();

        let hand: Vec<_> = g.seats()[0].hand().iter().map(|c| c.to_string()).collect();
        assert_eq!(hand, NO_SEVENS);
        assert_ne!(opener, SeatId::new(0));
        assert_eq!(g.locate(card("5H")), Some(CardLocation::Hand(SeatId::new(0))));
    }

    #[test]
    fn test_commit_play_moves_card() {
        let mut g = game("cccc", &[]);
        let opener = g.start_round().unwrap();

        assert_eq!(g.commit_play(opener, card("7S")), Ok(PileEnd::Opened));
        assert_eq!(g.locate(card("7S")), Some(CardLocation::Pile(Suit::Spades)));
        assert_eq!(g.player(opener).unwrap().hand().len(), 12);
        assert_eq!(g.table().card_count(), 1);
        assert!(g.audit().is_ok());
    }

    #[test]
    fn test_commit_play_refuses_bad_requests() {
        let mut g = game("cccc", &[]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        let seat0 = SeatId::new(0);

        // Held but not legal: nothing moves.
        assert_eq!(
            g.commit_play(seat0, card("8C")),
            Err(RulesError::IllegalPlay(card("8C")))
        );
        assert_eq!(g.player(seat0).unwrap().hand().len(), 13);

        // Legal but not held.
        assert_eq!(
            g.commit_play(seat0, card("7S")),
            Err(RulesError::CardNotInHand(card("7S")))
        );
        assert_eq!(g.table().card_count(), 0);
        assert!(g.audit().is_ok());
    }

    #[test]
    fn test_commit_discard_refused_with_legal_play() {
        let mut g = game("cccc", &[]);
        let opener = g.start_round().unwrap();

        assert_eq!(
            g.commit_discard(opener, card("7S")),
            Err(RulesError::IllegalDiscard(card("7S")))
        );
        assert_eq!(g.player(opener).unwrap().total_score(), 0);
    }

    #[test]
    fn test_human_discard_scores() {
        let mut g = game("hccc", &["discard 5H"]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        let seat0 = SeatId::new(0);

        assert_eq!(g.take_turn(seat0), Ok(Turn::Discarded(card("5H"))));

        let p = g.player(seat0).unwrap();
        assert_eq!(p.round_score(), 5);
        assert_eq!(p.total_score(), 5);
        assert_eq!(p.discards(), &[card("5H")]);
        assert_eq!(g.locate(card("5H")), Some(CardLocation::Discards(seat0)));
        assert!(g.view().messages().contains(&"Player1 discards 5H"));
    }

    #[test]
    fn test_human_errors_reprompt_without_side_effects() {
        let mut g = game(
            "hccc",
            &["dance", "play ZZ", "play 8C", "play 7S", "discard 7S", "discard"],
        );
        g.view_mut().push_input("AC");
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        let seat0 = SeatId::new(0);

        assert_eq!(g.take_turn(seat0), Ok(Turn::Discarded(card("AC"))));
        assert_eq!(
            g.view().errors(),
            vec![
                "Invalid Command",
                "Invalid Command: no card named \"ZZ\"",
                "This is not a legal play",
                "This is not a legal play",
                "You do not hold 7S",
            ]
        );
        assert!(g
            .view()
            .events()
            .contains(&ViewEvent::Prompt("Which card?".to_string())));
        assert_eq!(g.player(seat0).unwrap().total_score(), 1);
        assert_eq!(g.table().card_count(), 0);
    }

    #[test]
    fn test_deck_command_ends_turn() {
        let mut g = game("hccc", &["deck"]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        let seat0 = SeatId::new(0);

        assert_eq!(g.take_turn(seat0), Ok(Turn::Passed));
        assert!(g
            .view()
            .events()
            .iter()
            .any(|e| matches!(e, ViewEvent::Deck(cards) if cards.len() == DECK_SIZE)));
        assert_eq!(g.player(seat0).unwrap().hand().len(), 13);
        assert_eq!(g.player(seat0).unwrap().total_score(), 0);
        assert!(g.view().errors().is_empty());
    }

    #[test]
    fn test_human_cannot_discard_with_legal_play() {
        let mut g = game("hccc", &["discard 5H", "play 7C"]);
        let mut hand = NO_SEVENS;
        hand[0] = "7C";
        g.start_round_with_order(&stacked(&hand)).unwrap();
        let seat0 = SeatId::new(0);

        assert_eq!(g.take_turn(seat0), Ok(Turn::Played(card("7C"))));
        assert_eq!(
            g.view().errors(),
            vec!["You have a legal play. You may not discard."]
        );
        assert_eq!(g.player(seat0).unwrap().total_score(), 0);
    }

    #[test]
    fn test_human_quit() {
        let mut g = game("hccc", &["quit"]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        assert_eq!(g.take_turn(SeatId::new(0)), Ok(Turn::Quit));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut g = game("hccc", &["dance"]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        assert_eq!(g.take_turn(SeatId::new(0)), Ok(Turn::Quit));
    }

    #[test]
    fn test_ragequit_takes_same_turn() {
        let mut g = game("hccc", &["discard 5H", "ragequit"]);
        g.start_round_with_order(&stacked(&NO_SEVENS)).unwrap();
        let seat0 = SeatId::new(0);

        g.take_turn(seat0).unwrap();
        // The ghost has no legal play either, so it discards its first card.
        assert_eq!(g.take_turn(seat0), Ok(Turn::Discarded(card("AC"))));

        let ghost = g.player(seat0).unwrap();
        assert!(!ghost.is_human());
        assert_eq!(ghost.name(), "Player1's Ghost");
        assert_eq!(ghost.hand().len(), 11);
        assert_eq!(ghost.discards(), &[card("5H"), card("AC")]);
        assert_eq!(ghost.total_score(), 6);
        assert!(g.audit().is_ok());
    }

    #[test]
    fn test_empty_hand_is_skipped() {
        let mut g = game("hccc", &[]);
        assert_eq!(g.take_turn(SeatId::new(0)), Ok(Turn::Skipped));
        assert_eq!(g.take_turn(SeatId::new(1)), Ok(Turn::Skipped));
        assert!(g.view().events().is_empty());
    }

    #[test]
    fn test_unknown_seat() {
        let mut g = game("cccc", &[]);
        assert_eq!(
            g.take_turn(SeatId::new(9)),
            Err(RulesError::UnknownSeat(SeatId::new(9)))
        );
    }

    #[test]
    fn test_computer_round_completes() {
        let mut g = game("cccc", &[]);
        let opener = g.start_round().unwrap();

        assert_eq!(g.play_round(opener), Ok(RoundOutcome::Completed));
        assert!(g.is_end_of_round());
        assert_eq!(g.phase(), Phase::RoundEnd);
        assert!(g.audit().is_ok());

        let on_table = g.table().card_count();
        let discarded: usize = g.seats().iter().map(|p| p.discards().len()).sum();
        assert_eq!(on_table + discarded, DECK_SIZE);
    }

    #[test]
    fn test_finish_round_winners() {
        let mut g = Game::new(
            GameConfig::default().with_seed(3).with_score_ceiling(1),
            ScriptedView::default(),
        )
        .unwrap();
        g.seat_players("cccc").unwrap();

        let outcome = g.run().unwrap();
        let GameOutcome::Winners(winners) = &outcome else {
            panic!("expected winners, got {:?}", outcome);
        };
        let lowest = g.seats().iter().map(Player::total_score).min().unwrap();
        assert!(!winners.is_empty());
        for seat in SeatId::all(4) {
            let total = g.player(seat).unwrap().total_score();
            assert_eq!(outcome.is_winner(seat), total == lowest);
        }
        assert_eq!(g.phase(), Phase::EndOfGame);
        assert_eq!(g.view().wins().len(), winners.len());
    }

    #[test]
    fn test_game_outcome_is_winner() {
        let outcome = GameOutcome::Winners(vec![SeatId::new(0), SeatId::new(2)]);
        assert!(outcome.is_winner(SeatId::new(0)));
        assert!(!outcome.is_winner(SeatId::new(1)));
        assert!(outcome.is_winner(SeatId::new(2)));
        assert!(!GameOutcome::Quit.is_winner(SeatId::new(0)));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut g = game("cccc", &[]);
        g.start_round().unwrap();
        let snapshot = g.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
        assert_eq!(snapshot.deck_dealt, DECK_SIZE);
    }
}
