use std::fmt;

use rubik_notation::{Move, ParseError, parse_moves};
use serde::Serialize;

use crate::turns::QuarterTurn;
use crate::{Face, PerRole, Role};

/// 3x3x3 Rubik's Cube, tracked sticker by sticker.
///
/// A cube starts out solved and is mutated in place by moves. Faces are plain
/// values stored by role, so a whole-cube rotation just moves faces between
/// roles.
///
/// A cube has no internal synchronization. Callers that render a cube while
/// another thread applies moves must snapshot it (`Cube` is `Copy`) or lock
/// around it.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cube {
    faces: PerRole<Face>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            faces: PerRole::from_fn(|role| Face::from_color(role.home_color())),
        }
    }

    /// Returns the face currently in `role`.
    pub fn face(&self, role: Role) -> &Face {
        &self.faces[role]
    }
    /// Returns all six faces.
    pub fn faces(&self) -> &PerRole<Face> {
        &self.faces
    }

    /// Returns the top face.
    pub fn top(&self) -> &Face {
        self.face(Role::Top)
    }
    /// Returns the bottom face.
    pub fn bottom(&self) -> &Face {
        self.face(Role::Bottom)
    }
    /// Returns the front face.
    pub fn front(&self) -> &Face {
        self.face(Role::Front)
    }
    /// Returns the back face.
    pub fn back(&self) -> &Face {
        self.face(Role::Back)
    }
    /// Returns the left face.
    pub fn left(&self) -> &Face {
        self.face(Role::Left)
    }
    /// Returns the right face.
    pub fn right(&self) -> &Face {
        self.face(Role::Right)
    }

    /// Returns whether every face is a single color. This is true for any
    /// whole-cube rotation of a solved cube.
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(Face::is_uniform)
    }

    /// Applies a move, one quarter turn at a time.
    pub fn make_move(&mut self, m: Move) {
        log::trace!("applying {m}");
        let quarter_turn = QuarterTurn::of(m.turn());
        for _ in 0..m.count() {
            quarter_turn.apply(&mut self.faces);
        }
    }

    /// Applies a sequence of moves in order.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &m in moves {
            self.make_move(m);
        }
    }

    /// Parses a string of moves and applies them.
    ///
    /// The whole string is parsed before any move is applied, so the cube is
    /// left untouched if parsing fails.
    pub fn apply_notation(&mut self, s: &str) -> Result<(), ParseError> {
        let moves = parse_moves(s)?;
        log::debug!("applying {} moves: {moves}", moves.len());
        self.apply_moves(&moves);
        Ok(())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DISPLAY_ORDER: [Role; 6] = [
            Role::Top,
            Role::Front,
            Role::Left,
            Role::Right,
            Role::Bottom,
            Role::Back,
        ];
        for role in DISPLAY_ORDER {
            writeln!(f, "{role}:")?;
            writeln!(f, "{}", self.faces[role])?;
        }
        Ok(())
    }
}
