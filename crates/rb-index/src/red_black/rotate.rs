use tracing::trace;

use super::replace_child;
use crate::arena::NodeArena;

/// Promotes `n.r` into `n`'s position.
///
/// `n.r.l` becomes `n.r`'s replacement as `n`'s right child and `n` becomes
/// the left child of the promoted node. Does nothing if `n` has no right
/// child.
pub fn rotate_left(arena: &mut NodeArena, root: &mut Option<u32>, n: u32) {
    let Some(r) = arena[n].r else {
        return;
    };
    trace!(pivot = n, promoted = r, "rotate left");

    let rl = arena[r].l;
    arena[n].r = rl;
    if let Some(rl) = rl {
        arena[rl].p = Some(n);
    }

    let p = arena[n].p;
    arena[r].p = p;
    replace_child(arena, root, p, n, Some(r));

    arena[r].l = Some(n);
    arena[n].p = Some(r);
}

/// Mirror of [`rotate_left`] over `n.l`.
pub fn rotate_right(arena: &mut NodeArena, root: &mut Option<u32>, n: u32) {
    let Some(l) = arena[n].l else {
        return;
    };
    trace!(pivot = n, promoted = l, "rotate right");

    let lr = arena[l].r;
    arena[n].l = lr;
    if let Some(lr) = lr {
        arena[lr].p = Some(n);
    }

    let p = arena[n].p;
    arena[l].p = p;
    replace_child(arena, root, p, n, Some(l));

    arena[l].r = Some(n);
    arena[n].p = Some(l);
}
