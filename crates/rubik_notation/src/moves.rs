use std::fmt;
use std::str::FromStr;

use strum::{EnumCount, EnumIter};

use crate::{ParseError, QUARTER_TURNS_PER_REVOLUTION};

/// Elementary cube operation, identified by a single notation letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(non_camel_case_types)]
pub enum Turn {
    /// Right face, clockwise as seen from the right.
    R,
    /// Left face, clockwise as seen from the left.
    L,
    /// Front face, clockwise as seen from the front.
    F,
    /// Back face, clockwise as seen from the back.
    B,
    /// Top face, clockwise as seen from above.
    U,
    /// Bottom face, clockwise as seen from below.
    D,
    /// Whole-cube rotation in the same direction as `R`.
    x,
    /// Whole-cube rotation in the same direction as `U`.
    y,
    /// Whole-cube rotation in the same direction as `F`.
    z,
}

impl Turn {
    /// Returns the notation letter for the turn.
    pub const fn symbol(self) -> char {
        match self {
            Turn::R => 'R',
            Turn::L => 'L',
            Turn::F => 'F',
            Turn::B => 'B',
            Turn::U => 'U',
            Turn::D => 'D',
            Turn::x => 'x',
            Turn::y => 'y',
            Turn::z => 'z',
        }
    }

    /// Returns the turn with the given notation letter, or `None` if there is
    /// no such turn. Letters are case-sensitive.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'R' => Some(Turn::R),
            'L' => Some(Turn::L),
            'F' => Some(Turn::F),
            'B' => Some(Turn::B),
            'U' => Some(Turn::U),
            'D' => Some(Turn::D),
            'x' => Some(Turn::x),
            'y' => Some(Turn::y),
            'z' => Some(Turn::z),
            _ => None,
        }
    }

    /// Returns whether the turn rotates the whole cube instead of a single
    /// face.
    pub const fn is_rotation(self) -> bool {
        matches!(self, Turn::x | Turn::y | Turn::z)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Turn applied some number of quarter turns.
///
/// The count is always stored modulo 4, so `Move::new(Turn::R, 5)` is the
/// same as `Move::new(Turn::R, 1)`. A count of `0` is the identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    turn: Turn,
    count: u8,
}

impl Move {
    /// Constructs a move that applies `turn` `count` times.
    pub const fn new(turn: Turn, count: u8) -> Self {
        Self {
            turn,
            count: count % QUARTER_TURNS_PER_REVOLUTION,
        }
    }

    /// Returns the turn.
    pub const fn turn(self) -> Turn {
        self.turn
    }
    /// Returns the number of clockwise quarter turns, from 0 to 3.
    pub const fn count(self) -> u8 {
        self.count
    }

    /// Returns whether the move does nothing.
    pub const fn is_identity(self) -> bool {
        self.count == 0
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inv(self) -> Self {
        Self::new(self.turn, QUARTER_TURNS_PER_REVOLUTION - self.count)
    }
}

impl From<Turn> for Move {
    fn from(turn: Turn) -> Self {
        Self::new(turn, 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.turn)?;
        match self.count {
            1 => Ok(()),
            2 => write!(f, "2"),
            3 => write!(f, "'"),
            n => write!(f, "{n}"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Parses a single move token such as `R`, `U'`, or `x2`.
///
/// Surrounding whitespace is ignored, but whitespace inside the token is not.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    let token = token.trim();
    let mut chars = token.chars();

    let turn_char = chars.next().ok_or(ParseError::Empty)?;
    let count = match (chars.next(), chars.next()) {
        (None, _) => 1,
        (Some('2'), None) => 2,
        (Some('\''), None) => 3,
        (Some(modifier), None) => {
            return Err(ParseError::UnknownModifier {
                token: token.to_owned(),
                modifier,
            });
        }
        (Some(_), Some(_)) => {
            return Err(ParseError::TooLong {
                token: token.to_owned(),
            });
        }
    };
    let turn = Turn::from_symbol(turn_char).ok_or_else(|| ParseError::UnknownTurn {
        token: token.to_owned(),
        turn: turn_char,
    })?;

    Ok(Move::new(turn, count))
}
