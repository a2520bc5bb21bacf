use std::fmt;

use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// Color of a single sticker.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Home color of the top face.
    Yellow,
    /// Home color of the bottom face.
    White,
    /// Home color of the front face.
    Red,
    /// Home color of the back face.
    Orange,
    /// Home color of the left face.
    Blue,
    /// Home color of the right face.
    Green,
    /// Color of the plastic between stickers.
    ///
    /// This is only used by renderers and never appears on a [`crate::Face`]
    /// that was produced by moves.
    Black,
}

impl Color {
    /// Returns the single-character code for the color.
    pub const fn code(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Black => 'K',
        }
    }

    /// Returns the color with the given single-character code, or `None` if
    /// there is no such color.
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Color::Yellow),
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'O' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'K' => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns whether this is a real sticker color, as opposed to
    /// [`Color::Black`].
    pub const fn is_sticker(self) -> bool {
        !matches!(self, Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
