use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::Color;

/// Position of a face relative to the viewer.
///
/// Whole-cube rotations move faces between roles, but the set of roles never
/// changes.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Top (`U`) face.
    Top,
    /// Bottom (`D`) face.
    Bottom,
    /// Front (`F`) face.
    Front,
    /// Back (`B`) face.
    Back,
    /// Left (`L`) face.
    Left,
    /// Right (`R`) face.
    Right,
}

impl Role {
    /// Every role, in index order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Top,
        Role::Bottom,
        Role::Front,
        Role::Back,
        Role::Left,
        Role::Right,
    ];

    /// Returns the color of every sticker on this face of a solved cube.
    pub const fn home_color(self) -> Color {
        match self {
            Role::Top => Color::Yellow,
            Role::Bottom => Color::White,
            Role::Front => Color::Red,
            Role::Back => Color::Orange,
            Role::Left => Color::Blue,
            Role::Right => Color::Green,
        }
    }

    /// Returns the human-friendly name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Bottom => "Bottom",
            Role::Front => "Front",
            Role::Back => "Back",
            Role::Left => "Left",
            Role::Right => "Right",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One value per [`Role`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerRole<T>([T; Role::COUNT]);

impl<T> PerRole<T> {
    /// Constructs a new collection by calling `f` on each role.
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Role::ALL[i])))
    }

    /// Returns an iterator over roles and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::iter().zip(&self.0)
    }

    /// Returns an iterator over the values, in role order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Applies a function to each value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerRole<U> {
        PerRole(self.0.map(f))
    }
}

impl<T> Index<Role> for PerRole<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        &self.0[role.index()]
    }
}

impl<T> IndexMut<Role> for PerRole<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        &mut self.0[role.index()]
    }
}

impl<T: Serialize> Serialize for PerRole<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, value) in self.iter() {
            map.serialize_entry(&role, value)?;
        }
        map.end()
    }
}
