use crate::arena::NodeArena;
use crate::error::InvariantViolation;
use crate::util::{first, next};

/// Checks every red-black and search-tree invariant of the tree at `root`.
///
/// Verifies that the root is parentless and black, that parent links agree
/// with child links, that no red node has a red child, that all paths to a
/// nil leaf carry the same number of black nodes, and that an in-order walk
/// yields strictly increasing keys.
pub fn assert_red_black_tree(
    arena: &NodeArena,
    root: Option<u32>,
) -> Result<(), InvariantViolation> {
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root].p.is_some() {
        return Err(InvariantViolation::RootHasParent);
    }
    if !arena[root].is_black() {
        return Err(InvariantViolation::RootNotBlack);
    }

    fn black_height(arena: &NodeArena, node: Option<u32>) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &arena[node];

        for child in [n.l, n.r].into_iter().flatten() {
            if arena[child].p != Some(node) {
                return Err(InvariantViolation::BrokenParentLink { index: node });
            }
            if !n.is_black() && !arena[child].is_black() {
                return Err(InvariantViolation::RedRedEdge { index: node });
            }
        }

        let left = black_height(arena, n.l)?;
        let right = black_height(arena, n.r)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                index: node,
                left,
                right,
            });
        }

        Ok(left + usize::from(n.is_black()))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if arena[prev].k >= arena[i].k {
                return Err(InvariantViolation::OrderViolated {
                    prev: arena[prev].k,
                    next: arena[i].k,
                });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
