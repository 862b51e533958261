//! Behavior of the default 51-field course.
//!
//! These tests drive the movement engine over the course the original
//! game shipped: teleport chains, the 28/34 mutual pair, the capture
//! knock-back, and the sleep fields.

use boardrace::{default_course, Board, Game, MoveEvent, ScriptedDice};

fn course_game(rolls: Vec<u32>) -> Game<ScriptedDice> {
    let board = Board::new(default_course()).unwrap();
    Game::new("course", board, ScriptedDice::new(rolls))
}

#[test]
fn test_teleport_field_relocates_arrival() {
    let mut game = course_game(vec![6, 6, 5]);
    let a = game.add_player("a");

    game.advance_turn().unwrap(); // 0 -> 6 -> 13 (6 teleports to 13)
    assert_eq!(game.player(a).unwrap().position, 13);

    game.advance_turn().unwrap(); // 13 -> 19
    assert_eq!(game.player(a).unwrap().position, 19);

    // Reposition expectations: 19 + 5 = 24, the sleep field.
    let outcome = game.advance_turn().unwrap();
    assert_eq!(
        outcome.events,
        vec![MoveEvent { player: a, from: 19, to: 24 }]
    );
    assert_eq!(game.player(a).unwrap().sleep_remaining, 2);
}

#[test]
fn test_teleport_chain_events_in_order() {
    let mut game = course_game(vec![5]);
    let a = game.add_player("a");

    // 0 + 5 lands on 5 -> 7. One hop, recorded in order.
    let outcome = game.advance_turn().unwrap();
    assert_eq!(
        outcome.events,
        vec![
            MoveEvent { player: a, from: 0, to: 5 },
            MoveEvent { player: a, from: 5, to: 7 },
        ]
    );
    assert_eq!(game.player(a).unwrap().position, 7);
    assert!(game.board().occupants_of(5).is_empty());
}

#[test]
fn test_mutual_teleport_pair_takes_one_hop() {
    // Land on 28: hop to 34; 34 points back at 28 but the reversal guard
    // stops the bounce.
    let mut game = course_game(vec![4, 6, 6, 5, 2, 5]);
    let a = game.add_player("a");

    // Plain fields all the way: 0 -> 4 -> 10 -> 16 -> 21 -> 23.
    for expected in [4, 10, 16, 21, 23] {
        game.advance_turn().unwrap();
        assert_eq!(game.player(a).unwrap().position, expected);
    }

    // 23 + 5 = 28, one hop to 34, no bounce back.
    let outcome = game.advance_turn().unwrap();
    assert_eq!(
        outcome.events,
        vec![
            MoveEvent { player: a, from: 23, to: 28 },
            MoveEvent { player: a, from: 28, to: 34 },
        ]
    );
    assert_eq!(game.player(a).unwrap().position, 34);
    assert!(game.board().occupants_of(28).is_empty());
}

#[test]
fn test_capture_on_course_field() {
    // A reaches field 4, then B lands on 4 as well: A is knocked to 1.
    let mut game = course_game(vec![4]);
    let a = game.add_player("a");
    let b = game.add_player("b");

    let first = game.advance_turn().unwrap();
    assert_eq!(first.player, a);
    assert_eq!(game.player(a).unwrap().position, 4);

    let second = game.advance_turn().unwrap();
    assert_eq!(
        second.events,
        vec![
            MoveEvent { player: b, from: 0, to: 4 },
            MoveEvent { player: a, from: 4, to: 1 },
        ]
    );
    assert_eq!(game.board().occupants_of(4), &[b]);
    assert_eq!(game.board().occupants_of(1), &[a]);
}

#[test]
fn test_home_field_is_shared() {
    let mut game = course_game(vec![1]);
    let a = game.add_player("a");
    let b = game.add_player("b");
    let c = game.add_player("c");

    assert_eq!(game.board().occupants_of(0), &[a, b, c]);
    assert_eq!(game.player(c).unwrap().position, 0);
}

#[test]
fn test_sleep_field_skips_two_turns() {
    // Two players; A lands on 24 and must sit out exactly two of its own
    // turns while B keeps rolling.
    let mut game = course_game(vec![6, 1, 6, 1, 5, 1]);
    let a = game.add_player("a");
    let b = game.add_player("b");

    game.advance_turn().unwrap(); // a: 0 -> 6 -> 13
    game.advance_turn().unwrap(); // b: 0 -> 1
    game.advance_turn().unwrap(); // a: 13 -> 19
    game.advance_turn().unwrap(); // b: 1 -> 2
    game.advance_turn().unwrap(); // a: 19 -> 24, sleep 2
    assert_eq!(game.player(a).unwrap().sleep_remaining, 2);

    game.advance_turn().unwrap(); // b: 2 -> 3
    let asleep = game.advance_turn().unwrap(); // a: sleeping
    assert_eq!(asleep.player, a);
    assert_eq!(asleep.roll, None);
    assert_eq!(game.player(a).unwrap().sleep_remaining, 1);

    game.advance_turn().unwrap(); // b
    let asleep = game.advance_turn().unwrap(); // a: sleeping
    assert_eq!(asleep.roll, None);
    assert_eq!(game.player(a).unwrap().sleep_remaining, 0);

    game.advance_turn().unwrap(); // b
    let awake = game.advance_turn().unwrap(); // a rolls again
    assert_eq!(awake.player, a);
    assert!(awake.roll.is_some());
    assert_ne!(game.player(a).unwrap().position, 24);
}
