//! Red-black balancing: rotations, insert/remove fixups and the verifier.
//!
//! Every function here works on a [`NodeArena`] plus the tree's root slot,
//! passed as `&mut Option<u32>` so that a rotation at the root can replace it.

mod insert;
mod remove;
mod rotate;
pub mod types;
mod verify;

pub use insert::insert;
pub use remove::remove;
pub use rotate::{rotate_left, rotate_right};
pub use types::RbNode;
pub use verify::assert_red_black_tree;

use crate::arena::NodeArena;
use crate::types::Color;

/// Color of a possibly absent node. Absent children are black.
#[inline]
pub(crate) fn color_of(arena: &NodeArena, node: Option<u32>) -> Color {
    node.map_or(Color::Black, |i| arena[i].color)
}

#[inline]
pub(crate) fn set_color(arena: &mut NodeArena, node: Option<u32>, color: Color) {
    if let Some(i) = node {
        arena[i].color = color;
    }
}

#[inline]
pub(crate) fn left_of(arena: &NodeArena, node: Option<u32>) -> Option<u32> {
    node.and_then(|i| arena[i].l)
}

#[inline]
pub(crate) fn right_of(arena: &NodeArena, node: Option<u32>) -> Option<u32> {
    node.and_then(|i| arena[i].r)
}

/// Points whatever referenced `old` (its parent's child slot, or the root)
/// at `new`. Does not touch `new`'s parent link.
#[inline]
pub(crate) fn replace_child(
    arena: &mut NodeArena,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) if arena[p].l == Some(old) => arena[p].l = new,
        Some(p) => arena[p].r = new,
    }
}
