use std::cmp::Ordering;

use tracing::trace;

use super::{color_of, rotate_left, rotate_right, set_color};
use crate::arena::NodeArena;
use crate::error::Result;
use crate::types::{Color, Key};

/// Inserts `key` and rebalances.
///
/// Returns the node holding `key` and whether it was newly created. An
/// existing key is returned untouched: no node is allocated and nothing is
/// recolored. If allocation fails nothing has been linked yet and the tree
/// is unchanged.
pub fn insert(arena: &mut NodeArena, root: &mut Option<u32>, key: Key) -> Result<(u32, bool)> {
    let Some(mut curr) = *root else {
        let n = arena.create_node(key)?;
        *root = Some(n);
        fix_after_insert(arena, root, n);
        return Ok((n, true));
    };

    let go_left = loop {
        let next = match key.cmp(&arena[curr].k) {
            Ordering::Equal => return Ok((curr, false)),
            Ordering::Less => arena[curr].l,
            Ordering::Greater => arena[curr].r,
        };
        match next {
            Some(next) => curr = next,
            None => break key < arena[curr].k,
        }
    };

    let n = arena.create_node(key)?;
    if go_left {
        arena[curr].l = Some(n);
    } else {
        arena[curr].r = Some(n);
    }
    arena[n].p = Some(curr);

    fix_after_insert(arena, root, n);
    Ok((n, true))
}

/// Resolves red-red edges above `n`, then forces the root black.
///
/// A red uncle recolors and moves the violation two levels up. A black uncle
/// is resolved with at most two rotations and ends the loop.
fn fix_after_insert(arena: &mut NodeArena, root: &mut Option<u32>, mut n: u32) {
    while Some(n) != *root {
        let Some(p) = arena[n].p else { break };
        if arena[p].is_black() {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let Some(g) = arena[p].p else { break };

        if arena[g].l == Some(p) {
            let uncle = arena[g].r;
            if color_of(arena, uncle).is_red() {
                trace!(node = n, grandparent = g, "insert fixup: red uncle, recolor");
                arena[p].color = Color::Black;
                set_color(arena, uncle, Color::Black);
                arena[g].color = Color::Red;
                n = g;
                continue;
            }

            let parent = if arena[p].r == Some(n) {
                trace!(node = n, "insert fixup: inner left case");
                rotate_left(arena, root, p);
                let promoted = n;
                n = p;
                promoted
            } else {
                p
            };
            trace!(node = n, grandparent = g, "insert fixup: outer left case");
            arena[parent].color = Color::Black;
            arena[g].color = Color::Red;
            rotate_right(arena, root, g);
            break;
        } else {
            let uncle = arena[g].l;
            if color_of(arena, uncle).is_red() {
                trace!(node = n, grandparent = g, "insert fixup: red uncle, recolor");
                arena[p].color = Color::Black;
                set_color(arena, uncle, Color::Black);
                arena[g].color = Color::Red;
                n = g;
                continue;
            }

            let parent = if arena[p].l == Some(n) {
                trace!(node = n, "insert fixup: inner right case");
                rotate_right(arena, root, p);
                let promoted = n;
                n = p;
                promoted
            } else {
                p
            };
            trace!(node = n, grandparent = g, "insert fixup: outer right case");
            arena[parent].color = Color::Black;
            arena[g].color = Color::Red;
            rotate_left(arena, root, g);
            break;
        }
    }

    set_color(arena, *root, Color::Black);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::assert_red_black_tree;

    fn build(keys: &[Key]) -> (NodeArena, Option<u32>) {
        let mut arena = NodeArena::new();
        let mut root = None;
        for &k in keys {
            insert(&mut arena, &mut root, k).unwrap();
            assert_red_black_tree(&arena, root).unwrap();
        }
        (arena, root)
    }

    type Shape = (Key, Color, Option<Key>, Option<Key>);

    fn shape(arena: &NodeArena, root: Option<u32>) -> Option<Shape> {
        let r = root?;
        let n = &arena[r];
        Some((n.k, n.color, n.l.map(|i| arena[i].k), n.r.map(|i| arena[i].k)))
    }

    #[test]
    fn first_insert_becomes_black_root() {
        let (arena, root) = build(&[5]);
        assert_eq!(shape(&arena, root), Some((5, Color::Black, None, None)));
    }

    #[test]
    fn ascending_triple_rotates_left() {
        let (arena, root) = build(&[1, 2, 3]);
        assert_eq!(shape(&arena, root), Some((2, Color::Black, Some(1), Some(3))));
        let l = arena[root.unwrap()].l.unwrap();
        assert_eq!(arena[l].color, Color::Red);
    }

    #[test]
    fn zigzag_triples_double_rotate() {
        let (arena, root) = build(&[3, 1, 2]);
        assert_eq!(shape(&arena, root), Some((2, Color::Black, Some(1), Some(3))));
        let (arena, root) = build(&[1, 3, 2]);
        assert_eq!(shape(&arena, root), Some((2, Color::Black, Some(1), Some(3))));
    }

    #[test]
    fn red_uncle_recolors_without_rotation() {
        let (arena, root) = build(&[2, 1, 3, 4]);
        assert_eq!(shape(&arena, root), Some((2, Color::Black, Some(1), Some(3))));
        let l = arena[root.unwrap()].l.unwrap();
        let r = arena[root.unwrap()].r.unwrap();
        assert_eq!(arena[l].color, Color::Black);
        assert_eq!(arena[r].color, Color::Black);
        assert_eq!(arena[arena[r].r.unwrap()].color, Color::Red);
    }

    #[test]
    fn duplicate_returns_existing_node() {
        let (mut arena, mut root) = build(&[4, 2, 6]);
        let live = arena.live();
        let before: Vec<_> = (0..3).map(|i| arena[i].clone()).collect();
        let (idx, created) = insert(&mut arena, &mut root, 2).unwrap();
        assert!(!created);
        assert_eq!(arena[idx].k, 2);
        assert_eq!(arena.live(), live);
        let after: Vec<_> = (0..3).map(|i| arena[i].clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn allocation_failure_leaves_tree_untouched() {
        let mut arena = NodeArena::with_capacity(2, Some(2));
        let mut root = None;
        insert(&mut arena, &mut root, 1).unwrap();
        insert(&mut arena, &mut root, 2).unwrap();
        let before: Vec<_> = (0..2).map(|i| arena[i].clone()).collect();

        assert!(insert(&mut arena, &mut root, 3).is_err());
        let after: Vec<_> = (0..2).map(|i| arena[i].clone()).collect();
        assert_eq!(before, after);
        assert_eq!(root, Some(0));

        // Duplicates need no allocation and still succeed at the cap.
        assert_eq!(insert(&mut arena, &mut root, 2).unwrap(), (1, false));
    }
}
