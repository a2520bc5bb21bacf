//! Lookup tables describing each elementary quarter turn.
//!
//! ```text
//!                 0 1 2
//!                 3 U 5
//!                 6 7 8
//!
//!   0 1 2  0 1 2  0 1 2  0 1 2
//!   3 B 5  3 L 5  3 F 5  3 R 5
//!   6 7 8  6 7 8  6 7 8  6 7 8
//!
//!                 0 1 2
//!                 3 D 5
//!                 6 7 8
//! ```

use rubik_notation::Turn;

use crate::{Face, PerRole, Role};

/// Clockwise quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct FaceTurn {
    /// Face that rotates in place.
    pub face: Role,
    /// Adjacent strips, in the order that stickers travel. Position `j` of
    /// each strip moves to position `j` of the next strip, and the last strip
    /// wraps around to the first.
    pub strips: [(Role, [usize; 3]); 4],
}

/// Clockwise quarter rotation of the whole cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct CubeRotation {
    /// Pole that rotates clockwise in place.
    pub cw_pole: Role,
    /// Pole that rotates counterclockwise in place.
    pub ccw_pole: Role,
    /// `(destination, source, quarter turns)` for each of the other four
    /// faces. The face in `source` moves to `destination` and is rotated
    /// clockwise by the given number of quarter turns.
    pub reassignments: [(Role, Role, u8); 4],
}

/// Elementary quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum QuarterTurn {
    Face(FaceTurn),
    Rotation(CubeRotation),
}

impl QuarterTurn {
    pub(crate) const fn of(turn: Turn) -> Self {
        match turn {
            Turn::R => Self::Face(R),
            Turn::L => Self::Face(L),
            Turn::F => Self::Face(F),
            Turn::B => Self::Face(B),
            Turn::U => Self::Face(U),
            Turn::D => Self::Face(D),
            Turn::x => Self::Rotation(X),
            Turn::y => Self::Rotation(Y),
            Turn::z => Self::Rotation(Z),
        }
    }

    /// Applies the quarter turn to a set of faces.
    pub(crate) fn apply(self, faces: &mut PerRole<Face>) {
        match self {
            QuarterTurn::Face(t) => t.apply(faces),
            QuarterTurn::Rotation(t) => t.apply(faces),
        }
    }
}

impl FaceTurn {
    fn apply(self, faces: &mut PerRole<Face>) {
        faces[self.face].rotate(1);

        let old = self.strips.map(|(role, indices)| faces[role].strip(indices));
        for (i, &(role, indices)) in self.strips.iter().enumerate() {
            let prev = (i + old.len() - 1) % old.len();
            faces[role].set_strip(indices, old[prev]);
        }
    }
}

impl CubeRotation {
    fn apply(self, faces: &mut PerRole<Face>) {
        let old = *faces;
        faces[self.cw_pole].rotate(1);
        faces[self.ccw_pole].rotate(3);
        for (dst, src, n) in self.reassignments {
            faces[dst] = old[src].rotated(n);
        }
    }
}

const COL_LEFT: [usize; 3] = [0, 3, 6];
const COL_RIGHT: [usize; 3] = [2, 5, 8];
const ROW_TOP: [usize; 3] = [0, 1, 2];
const ROW_BOTTOM: [usize; 3] = [6, 7, 8];

const R: FaceTurn = FaceTurn {
    face: Role::Right,
    strips: [
        (Role::Front, COL_RIGHT),
        (Role::Top, COL_RIGHT),
        (Role::Back, [6, 3, 0]),
        (Role::Bottom, COL_RIGHT),
    ],
};
const L: FaceTurn = FaceTurn {
    face: Role::Left,
    strips: [
        (Role::Front, COL_LEFT),
        (Role::Bottom, COL_LEFT),
        (Role::Back, [8, 5, 2]),
        (Role::Top, COL_LEFT),
    ],
};
const U: FaceTurn = FaceTurn {
    face: Role::Top,
    strips: [
        (Role::Front, ROW_TOP),
        (Role::Left, ROW_TOP),
        (Role::Back, ROW_TOP),
        (Role::Right, ROW_TOP),
    ],
};
const D: FaceTurn = FaceTurn {
    face: Role::Bottom,
    strips: [
        (Role::Front, ROW_BOTTOM),
        (Role::Right, ROW_BOTTOM),
        (Role::Back, ROW_BOTTOM),
        (Role::Left, ROW_BOTTOM),
    ],
};
// F and B reverse the strip direction on the side faces.
const F: FaceTurn = FaceTurn {
    face: Role::Front,
    strips: [
        (Role::Top, ROW_BOTTOM),
        (Role::Right, COL_LEFT),
        (Role::Bottom, [2, 1, 0]),
        (Role::Left, [8, 5, 2]),
    ],
};
const B: FaceTurn = FaceTurn {
    face: Role::Back,
    strips: [
        (Role::Top, ROW_TOP),
        (Role::Left, [6, 3, 0]),
        (Role::Bottom, [8, 7, 6]),
        (Role::Right, COL_RIGHT),
    ],
};

const X: CubeRotation = CubeRotation {
    cw_pole: Role::Right,
    ccw_pole: Role::Left,
    reassignments: [
        (Role::Top, Role::Front, 0),
        (Role::Front, Role::Bottom, 0),
        (Role::Bottom, Role::Back, 2),
        (Role::Back, Role::Top, 2),
    ],
};
const Y: CubeRotation = CubeRotation {
    cw_pole: Role::Top,
    ccw_pole: Role::Bottom,
    reassignments: [
        (Role::Left, Role::Front, 0),
        (Role::Front, Role::Right, 0),
        (Role::Right, Role::Back, 0),
        (Role::Back, Role::Left, 0),
    ],
};
const Z: CubeRotation = CubeRotation {
    cw_pole: Role::Front,
    ccw_pole: Role::Back,
    reassignments: [
        (Role::Right, Role::Top, 1),
        (Role::Top, Role::Left, 1),
        (Role::Left, Role::Bottom, 1),
        (Role::Bottom, Role::Right, 1),
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tables_are_permutations() {
        for turn in [R, L, F, B, U, D] {
            let roles: HashSet<Role> = turn.strips.iter().map(|&(role, _)| role).collect();
            assert_eq!(roles.len(), 4);
            assert!(!roles.contains(&turn.face));
            for (_, indices) in turn.strips {
                assert!(!indices.contains(&crate::face::CENTER));
            }
        }

        for rot in [X, Y, Z] {
            let dst: HashSet<Role> = rot.reassignments.iter().map(|r| r.0).collect();
            let src: HashSet<Role> = rot.reassignments.iter().map(|r| r.1).collect();
            assert_eq!(dst, src);
            assert_eq!(dst.len(), 4);
            assert!(!dst.contains(&rot.cw_pole));
            assert!(!dst.contains(&rot.ccw_pole));
        }
    }
}
