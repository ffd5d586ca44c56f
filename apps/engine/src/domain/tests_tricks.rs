//! Trick resolution tests.

use crate::domain::piece_parsing::try_parse_pieces;
use crate::domain::plays::PlayType;
use crate::domain::tricks::{current_leader, resolve_trick, would_win, TrickOutcome, TrickPlay};

fn play(seat: u8, tokens: &[&str]) -> TrickPlay {
    TrickPlay::new(seat, try_parse_pieces(tokens).unwrap())
}

#[test]
fn highest_single_wins() {
    let plays = vec![
        play(0, &["HORSE_RED"]),
        play(1, &["GENERAL_BLACK"]),
        play(2, &["SOLDIER_RED"]),
        play(3, &["ADVISOR_RED"]),
    ];
    assert_eq!(
        resolve_trick(&plays),
        Some(TrickOutcome {
            winner: 1,
            kind: PlayType::Single,
            piles: 1
        })
    );
}

#[test]
fn invalid_plays_never_win() {
    let plays = vec![
        play(0, &["SOLDIER_RED", "SOLDIER_RED"]),
        play(1, &["GENERAL_RED", "ADVISOR_BLACK"]),
        play(2, &["SOLDIER_BLACK", "SOLDIER_BLACK"]),
        play(3, &["CANNON_RED", "HORSE_RED"]),
    ];
    let outcome = resolve_trick(&plays).unwrap();
    assert_eq!(outcome.winner, 0);
    assert_eq!(outcome.piles, 2);
}

#[test]
fn shape_is_set_by_first_valid_play() {
    // Seat 0 forfeits with junk; seat 1's pair sets the shape.
    let plays = vec![
        play(0, &["GENERAL_RED", "SOLDIER_BLACK"]),
        play(1, &["CANNON_BLACK", "CANNON_BLACK"]),
        play(2, &["HORSE_BLACK", "HORSE_BLACK"]),
    ];
    assert_eq!(current_leader(&plays).map(|p| p.seat), Some(2));
}

#[test]
fn ties_go_to_earlier_play() {
    let plays = vec![
        play(0, &["SOLDIER_RED"]),
        play(1, &["HORSE_BLACK"]),
        play(2, &["HORSE_BLACK"]),
    ];
    assert_eq!(resolve_trick(&plays).map(|o| o.winner), Some(1));
}

#[test]
fn no_valid_play_means_no_winner() {
    let plays = vec![
        play(0, &["GENERAL_RED", "SOLDIER_BLACK"]),
        play(1, &["HORSE_RED", "CANNON_BLACK"]),
    ];
    assert_eq!(resolve_trick(&plays), None);
    assert_eq!(resolve_trick(&[]), None);
}

#[test]
fn would_win_checks_strict_improvement() {
    let plays = vec![play(0, &["CHARIOT_RED"])];
    assert!(would_win(&plays, &try_parse_pieces(["ELEPHANT_BLACK"]).unwrap()));
    assert!(!would_win(&plays, &try_parse_pieces(["CHARIOT_RED"]).unwrap()));
    assert!(!would_win(&plays, &try_parse_pieces(["HORSE_RED"]).unwrap()));
    assert!(would_win(&[], &try_parse_pieces(["SOLDIER_BLACK"]).unwrap()));
    assert!(!would_win(
        &[],
        &try_parse_pieces(["SOLDIER_BLACK", "HORSE_RED"]).unwrap()
    ));
}
