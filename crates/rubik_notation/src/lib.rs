//! Move notation parser and serializer for the 3x3x3 Rubik's Cube.
//!
//! A move is a turn letter optionally followed by a modifier:
//!
//! - `R`, `L`, `F`, `B`, `U`, `D` turn a single face
//! - `x`, `y`, `z` rotate the whole cube
//! - `2` doubles the turn and `'` inverts it
//!
//! ```
//! use rubik_notation::{Move, Turn, parse_moves};
//!
//! let moves = parse_moves("R U R' U'").unwrap();
//! assert_eq!(moves.len(), 4);
//! assert_eq!(moves[2], Move::new(Turn::R, 3));
//! ```

mod errors;
mod list;
mod moves;

pub use errors::ParseError;
pub use list::{MoveList, parse_moves};
pub use moves::{Move, Turn, parse_move};

/// Number of quarter turns that make up a full turn.
pub const QUARTER_TURNS_PER_REVOLUTION: u8 = 4;

#[cfg(test)]
mod tests;
