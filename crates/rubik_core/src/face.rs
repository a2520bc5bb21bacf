use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;

use crate::{Color, ParseFaceError, QUARTER_TURNS_PER_REVOLUTION, STICKERS_PER_FACE};

/// Index of the center sticker, which no rotation moves.
pub const CENTER: usize = 4;

/// Cycles of sticker indices followed by a clockwise quarter turn. The sticker
/// at each index moves to the next index in its cycle.
const ROTATION_CYCLES: [[usize; 4]; 2] = [
    [0, 2, 8, 6], // corners
    [1, 5, 7, 3], // edges
];

/// One 3x3 side of the cube.
///
/// Stickers are indexed in row-major order, as seen looking at the face:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Face([Color; STICKERS_PER_FACE]);

impl Face {
    /// Constructs a face with every sticker the same color.
    pub const fn from_color(color: Color) -> Self {
        Self([color; STICKERS_PER_FACE])
    }

    /// Constructs a face from stickers in row-major order.
    pub const fn from_stickers(stickers: [Color; STICKERS_PER_FACE]) -> Self {
        Self(stickers)
    }

    /// Returns the stickers in row-major order.
    pub const fn stickers(&self) -> &[Color; STICKERS_PER_FACE] {
        &self.0
    }

    /// Returns the center sticker.
    pub const fn center(&self) -> Color {
        self.0[CENTER]
    }

    /// Returns whether every sticker on the face is the same color.
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all_equal()
    }

    /// Rotates the face clockwise by `n` quarter turns. Only this face's own
    /// stickers move; the center stays put.
    pub fn rotate(&mut self, n: u8) {
        for _ in 0..n % QUARTER_TURNS_PER_REVOLUTION {
            let old = self.0;
            for cycle in ROTATION_CYCLES {
                for (&from, &to) in cycle.iter().circular_tuple_windows() {
                    self.0[to] = old[from];
                }
            }
        }
    }

    /// Returns a copy of the face rotated clockwise by `n` quarter turns.
    #[must_use]
    pub fn rotated(mut self, n: u8) -> Self {
        self.rotate(n);
        self
    }

    /// Returns the stickers at three indices.
    pub(crate) fn strip(&self, indices: [usize; 3]) -> [Color; 3] {
        indices.map(|i| self.0[i])
    }

    /// Overwrites the stickers at three indices.
    pub(crate) fn set_strip(&mut self, indices: [usize; 3], colors: [Color; 3]) {
        for (i, color) in indices.into_iter().zip(colors) {
            self.0[i] = color;
        }
    }
}

impl Index<usize> for Face {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Parses nine color codes in row-major order. Whitespace is ignored, so the
/// output of [`Face`]'s `Display` impl parses back to the same face.
impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Color::from_code(c).ok_or(ParseFaceError::UnknownColor(c)))
            .collect::<Result<Vec<_>, _>>()?;
        let len = colors.len();
        let stickers = colors
            .try_into()
            .map_err(|_| ParseFaceError::WrongLength(len))?;
        Ok(Self(stickers))
    }
}
