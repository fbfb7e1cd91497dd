//! Key, color and handle types shared by the arena and the tree.
//!
//! Nodes never hold pointers. Every link (`p`, `l`, `r`) is an
//! `Option<u32>` slot index into the tree's [`NodeArena`](crate::NodeArena),
//! and callers outside the crate only ever see [`NodeHandle`]s.

use std::fmt;

/// Keys stored in the tree.
pub type Key = i32;

/// Node color. An absent child counts as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Stable reference to a node of one particular tree.
///
/// A handle stays valid until the node it names is released. Slots are
/// reused, so each handle also records the slot generation it was issued
/// for; a handle from another tree or an older generation is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) tree: u32,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeHandle {
    /// Arena slot the handle points at.
    pub fn index(&self) -> u32 {
        self.index
    }
}
