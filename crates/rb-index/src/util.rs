//! Read-only walks over the arena: search, successor, size, height.
//!
//! All functions take the arena and a root index and never relink nodes.

use std::cmp::Ordering;

use crate::arena::NodeArena;
use crate::types::Key;

/// Leftmost node under `root`.
pub fn first(arena: &NodeArena, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr].l {
        curr = l;
    }
    Some(curr)
}

/// In-order successor.
///
/// With a right subtree this is its leftmost node. Otherwise it is the
/// parent of the first ancestor (starting from `curr`) that is a left
/// child; reaching the root without finding one means there is none.
pub fn next(arena: &NodeArena, mut curr: u32) -> Option<u32> {
    if arena[curr].r.is_some() {
        return first(arena, arena[curr].r);
    }
    let mut p = arena[curr].p;
    while let Some(pi) = p {
        if arena[pi].r == Some(curr) {
            curr = pi;
            p = arena[pi].p;
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds the node holding `key`.
pub fn find(arena: &NodeArena, root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(&arena[i].k) {
            Ordering::Equal => return Some(i),
            Ordering::Less => arena[i].l,
            Ordering::Greater => arena[i].r,
        };
    }
    None
}

/// Number of nodes under `root`.
pub fn size(arena: &NodeArena, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height(arena: &NodeArena, root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        let node = &arena[i];
        stack.extend(node.l.map(|l| (l, depth + 1)));
        stack.extend(node.r.map(|r| (r, depth + 1)));
    }
    max
}
