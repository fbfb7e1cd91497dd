use crate::types::{Color, Key};

/// A red-black tree node stored in a [`NodeArena`](crate::NodeArena) slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RbNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    pub color: Color,
}

impl RbNode {
    /// A fresh node is red and unlinked.
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            color: Color::Red,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }
}
