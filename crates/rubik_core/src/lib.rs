//! Sticker-level state model of the 3x3x3 Rubik's Cube.
//!
//! A [`Cube`] holds six [`Face`]s, one per [`Role`]. Moves permute stickers
//! between faces but never create, destroy, or recolor them.
//!
//! ```
//! use rubik_core::Cube;
//!
//! let mut cube = Cube::new();
//! cube.apply_notation("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//! ```

mod color;
mod cube;
mod errors;
mod face;
mod role;
mod turns;

/// Re-export of `rubik_notation`.
pub use rubik_notation;
pub use rubik_notation::{Move, MoveList, ParseError, Turn, parse_move, parse_moves};

pub use crate::color::Color;
pub use crate::cube::Cube;
pub use crate::errors::ParseFaceError;
pub use crate::face::{CENTER, Face};
pub use crate::role::{PerRole, Role};

/// Number of stickers on each face.
pub const STICKERS_PER_FACE: usize = 9;

/// Number of quarter turns that make up a full turn.
pub use rubik_notation::QUARTER_TURNS_PER_REVOLUTION;
