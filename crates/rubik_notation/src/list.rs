use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::{Move, ParseError, parse_move};

/// Parses a whitespace-separated string of moves, such as `R U R' U'`.
///
/// Returns an error for the first invalid token, or [`ParseError::Empty`] if
/// the string contains no tokens.
pub fn parse_moves(s: &str) -> Result<MoveList, ParseError> {
    let moves = s
        .split_whitespace()
        .map(parse_move)
        .collect::<Result<Vec<_>, _>>()?;
    if moves.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(MoveList(moves))
}

/// Ordered sequence of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MoveList(pub Vec<Move>);

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_first = true;
        for m in &self.0 {
            if is_first {
                is_first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moves(s)
    }
}

impl Deref for MoveList {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    /// Constructs a new empty move list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a list with all moves inverted, in reverse order.
    #[must_use]
    pub fn inv(&self) -> Self {
        self.0.iter().rev().map(|m| m.inv()).collect()
    }
}
