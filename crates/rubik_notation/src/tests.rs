use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

#[test]
fn test_single_moves() {
    assert_eq!(parse_move("R"), Ok(Move::new(Turn::R, 1)));
    assert_eq!(parse_move("U'"), Ok(Move::new(Turn::U, 3)));
    assert_eq!(parse_move("F2"), Ok(Move::new(Turn::F, 2)));
    assert_eq!(parse_move("x'"), Ok(Move::new(Turn::x, 3)));
    assert_eq!(parse_move(" z2 "), Ok(Move::new(Turn::z, 2)));

    for turn in Turn::iter() {
        assert_eq!(Turn::from_symbol(turn.symbol()), Some(turn));
        assert_eq!(parse_move(&turn.to_string()), Ok(Move::from(turn)));
    }
}

#[test]
fn test_move_string() {
    let expected = MoveList(vec![
        Move::new(Turn::R, 1),
        Move::new(Turn::U, 1),
        Move::new(Turn::R, 3),
        Move::new(Turn::U, 3),
    ]);
    assert_eq!(parse_moves("R U R' U'"), Ok(expected.clone()));
    assert_eq!(expected.to_string(), "R U R' U'");

    // extra whitespace
    assert_eq!(parse_moves("  R  U R'\tU'\n"), Ok(expected.clone()));
    assert_eq!("R U R' U'".parse::<MoveList>(), Ok(expected));
}

#[test]
fn test_notation_errors() {
    assert_eq!(parse_moves(""), Err(ParseError::Empty));
    assert_eq!(parse_moves("   "), Err(ParseError::Empty));
    assert_eq!(parse_move(""), Err(ParseError::Empty));

    assert_eq!(
        parse_moves("Q"),
        Err(ParseError::UnknownTurn {
            token: "Q".to_owned(),
            turn: 'Q',
        }),
    );
    assert_eq!(
        parse_moves("r"),
        Err(ParseError::UnknownTurn {
            token: "r".to_owned(),
            turn: 'r',
        }),
    );
    assert_eq!(
        parse_moves("R3"),
        Err(ParseError::UnknownModifier {
            token: "R3".to_owned(),
            modifier: '3',
        }),
    );
    assert_eq!(
        parse_moves("RR"),
        Err(ParseError::UnknownModifier {
            token: "RR".to_owned(),
            modifier: 'R',
        }),
    );
    assert_eq!(
        parse_moves("R U2' D"),
        Err(ParseError::TooLong {
            token: "U2'".to_owned(),
        }),
    );

    // first bad token wins
    assert_eq!(parse_moves("R Q R3").map_err(|e| e.token().to_owned()), Err("Q".to_owned()));
}

#[test]
fn test_error_messages() {
    assert_eq!(ParseError::Empty.to_string(), "no moves given");
    let e = parse_move("R3").expect_err("bad modifier");
    assert_eq!(e.to_string(), "invalid move 'R3': unknown modifier '3'");
    let e = parse_move("Q").expect_err("bad turn");
    assert_eq!(e.to_string(), "invalid move 'Q': unknown turn 'Q'");
    let e = parse_move("R2'").expect_err("too long");
    assert_eq!(
        e.to_string(),
        "invalid move 'R2'': move should be at most 2 characters long",
    );
}

#[test]
fn test_move_counts() {
    assert_eq!(Move::new(Turn::R, 5), Move::new(Turn::R, 1));
    assert!(Move::new(Turn::R, 4).is_identity());
    assert_eq!(Move::new(Turn::R, 1).inv(), Move::new(Turn::R, 3));
    assert_eq!(Move::new(Turn::R, 2).inv(), Move::new(Turn::R, 2));
    assert_eq!(Move::new(Turn::R, 0).inv(), Move::new(Turn::R, 0));

    assert!(Turn::y.is_rotation());
    assert!(!Turn::D.is_rotation());
}

#[test]
fn test_inverse_list() {
    let moves = parse_moves("R U2 x' F").expect("valid notation");
    assert_eq!(moves.inv().to_string(), "F' x U2 R'");
    assert_eq!(moves.inv().inv(), moves);
}

fn non_identity_move() -> impl Strategy<Value = Move> {
    (any::<Turn>(), 1..=3_u8).prop_map(|(turn, count)| Move::new(turn, count))
}

proptest! {
    #[test]
    fn proptest_notation_roundtrip(moves in prop::collection::vec(non_identity_move(), 1..20)) {
        let moves = MoveList(moves);
        prop_assert_eq!(parse_moves(&moves.to_string()), Ok(moves));
    }

    #[test]
    fn proptest_move_inverse(m in non_identity_move()) {
        prop_assert_eq!((m.count() + m.inv().count()) % QUARTER_TURNS_PER_REVOLUTION, 0);
        prop_assert_eq!(m.inv().inv(), m);
    }
}
