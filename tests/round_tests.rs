//! Whole-round and whole-game tests.
//!
//! These drive four computer seats through rounds and games and check the
//! round-level rules: determinism under a seed, card conservation, round
//! end, scoring and winners.

use straights::core::SeatId;
use straights::rules::{Game, GameOutcome, Phase, RoundOutcome, Turn};
use straights::view::{ScriptedView, ViewEvent};
use straights::{Card, GameConfig, Player, Rank, DECK_SIZE};

fn computers(config: GameConfig) -> Game<ScriptedView> {
    let mut game = Game::new(config, ScriptedView::default()).unwrap();
    game.seat_players("cccc").unwrap();
    game
}

/// The same seed deals and plays the same round.
#[test]
fn test_seed_42_round_is_deterministic() {
    let play = || {
        let mut game = computers(GameConfig::default().with_seed(42));
        let opener = game.start_round().unwrap();
        let dealt = game.snapshot();
        game.play_round(opener).unwrap();
        (opener, dealt, game.snapshot(), game.view().events().to_vec())
    };

    let (opener_a, dealt_a, end_a, events_a) = play();
    let (opener_b, dealt_b, end_b, events_b) = play();

    assert_eq!(opener_a, opener_b);
    assert_eq!(dealt_a, dealt_b);
    assert_eq!(end_a, end_b);
    assert_eq!(events_a, events_b);
}

/// Different seeds shuffle differently.
#[test]
fn test_different_seeds_deal_differently() {
    let mut a = computers(GameConfig::default().with_seed(1));
    let mut b = computers(GameConfig::default().with_seed(2));
    a.start_round().unwrap();
    b.start_round().unwrap();
    assert_ne!(a.snapshot().deck_order, b.snapshot().deck_order);
}

/// Every card is in exactly one place after every turn of a round.
#[test]
fn test_conservation_through_a_round() {
    let mut game = computers(GameConfig::default().with_seed(7));
    let mut seat = game.start_round().unwrap();
    game.audit().unwrap();

    while !game.is_end_of_round() {
        game.take_turn(seat).unwrap();
        game.audit().unwrap();
        seat = seat.next(4);
    }

    let snapshot = game.snapshot();
    let held: usize = snapshot.seats.iter().map(|s| s.hand.len()).sum();
    let discarded: usize = snapshot.seats.iter().map(|s| s.discards.len()).sum();
    assert_eq!(held, 0);
    assert_eq!(snapshot.table.card_count() + discarded, DECK_SIZE);
}

/// The round ends exactly when the last hand empties.
#[test]
fn test_round_ends_only_when_all_hands_empty() {
    let mut game = computers(GameConfig::default().with_seed(11));
    let mut seat = game.start_round().unwrap();
    let mut turns = 0;

    while !game.is_end_of_round() {
        assert!(game.seats().iter().any(|p| !p.hand().is_empty()));
        game.take_turn(seat).unwrap();
        seat = seat.next(4);
        turns += 1;
    }

    // One card leaves a hand per non-skipped turn.
    assert!(turns >= DECK_SIZE);
    assert!(game.seats().iter().all(|p| p.hand().is_empty()));
}

/// The holder of the starting card opens by founding a pile.
#[test]
fn test_opener_founds_a_pile() {
    let mut game = computers(GameConfig::default().with_seed(5));
    let opener = game.start_round().unwrap();
    let seven: Card = "7S".parse().unwrap();

    assert_eq!(game.holder(seven), Some(opener));
    let Ok(Turn::Played(card)) = game.take_turn(opener) else {
        panic!("opener holds a seven and must play");
    };
    assert_eq!(card.rank(), Rank::SEVEN);
    assert_eq!(game.table().card_count(), 1);
}

/// Round scores reset each round, totals accumulate.
#[test]
fn test_scores_across_rounds() {
    let mut game = computers(GameConfig::default().with_seed(9).with_score_ceiling(10_000));

    let opener = game.start_round().unwrap();
    assert_eq!(game.play_round(opener), Ok(RoundOutcome::Completed));
    assert_eq!(game.finish_round(), None);
    let after_first: Vec<u32> = game.seats().iter().map(Player::total_score).collect();

    let opener = game.start_round().unwrap();
    assert_eq!(game.round(), 2);
    assert!(game.seats().iter().all(|p| p.round_score() == 0));
    assert!(game.seats().iter().all(|p| p.discards().is_empty()));
    assert_eq!(game.table().card_count(), 0);

    game.play_round(opener).unwrap();
    for (player, before) in game.seats().iter().zip(&after_first) {
        assert_eq!(player.prior_total(), *before);
        assert_eq!(player.total_score(), before + player.round_score());
        let discarded: u32 = player.discards().iter().map(|c| c.score()).sum();
        assert_eq!(player.round_score(), discarded);
    }
}

/// Scoring shows every seat's discards and breakdown.
#[test]
fn test_finish_round_renders_scores() {
    let mut game = computers(GameConfig::default().with_seed(13).with_score_ceiling(10_000));
    let opener = game.start_round().unwrap();
    game.play_round(opener).unwrap();
    game.view_mut().clear_events();

    assert_eq!(game.finish_round(), None);
    assert_eq!(game.phase(), Phase::Scoring);

    let scores: Vec<_> = game
        .view()
        .events()
        .iter()
        .filter_map(|e| match e {
            ViewEvent::Score { name, discards, prior_total, round_delta } => {
                Some((name.clone(), discards.clone(), *prior_total, *round_delta))
            }
            _ => None,
        })
        .collect();
    assert_eq!(scores.len(), 4);
    for (player, (name, discards, prior, delta)) in game.seats().iter().zip(scores) {
        assert_eq!(player.name(), name);
        assert_eq!(player.discards(), discards.as_slice());
        assert_eq!(prior, 0);
        assert_eq!(delta, player.round_score());
    }
    assert!(game.view().wins().is_empty());
}

/// A game ends once a total reaches the ceiling; the winners are every seat
/// with the lowest total.
#[test]
fn test_game_winners_are_lowest_totals() {
    for seed in [3, 17, 42] {
        let mut game = computers(GameConfig::default().with_seed(seed).with_score_ceiling(40));
        let outcome = game.run().unwrap();

        let totals: Vec<u32> = game.seats().iter().map(Player::total_score).collect();
        let lowest = *totals.iter().min().unwrap();
        assert!(totals.iter().any(|t| *t >= 40));

        let GameOutcome::Winners(winners) = &outcome else {
            panic!("computer game should not quit");
        };
        let expected: Vec<SeatId> = SeatId::all(4)
            .filter(|s| totals[s.index()] == lowest)
            .collect();
        assert_eq!(winners, &expected);
        assert_eq!(game.phase(), Phase::EndOfGame);

        let names: Vec<&str> = winners.iter().map(|s| game.seats()[s.index()].name()).collect();
        assert_eq!(game.view().wins(), names);
    }
}

/// Earlier rounds never reached the ceiling.
#[test]
fn test_game_stops_at_first_round_over_ceiling() {
    let mut game = computers(GameConfig::default().with_seed(21).with_score_ceiling(60));
    game.run().unwrap();

    let rounds = game.round();
    let max_total = game.seats().iter().map(Player::total_score).max().unwrap();
    let max_prior = game.seats().iter().map(Player::prior_total).max().unwrap();
    assert!(rounds >= 1);
    assert!(max_total >= 60);
    assert!(max_prior < 60);
}

/// A smaller table still deals out the whole deck.
#[test]
fn test_two_seat_table() {
    let config = GameConfig::default().with_seed(8).with_table(2, 26);
    let mut game = Game::new(config, ScriptedView::default()).unwrap();
    game.seat_players("cc").unwrap();

    let opener = game.start_round().unwrap();
    assert!(game.seats().iter().all(|p| p.hand().len() == 26));
    assert_eq!(game.play_round(opener), Ok(RoundOutcome::Completed));
    game.audit().unwrap();
}
