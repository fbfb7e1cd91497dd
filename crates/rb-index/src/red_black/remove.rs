use tracing::trace;

use super::{color_of, left_of, replace_child, right_of, rotate_left, rotate_right, set_color};
use crate::arena::NodeArena;
use crate::types::Color;
use crate::util::next;

/// Removes the key held by `n` and releases one node.
///
/// If `n` has two children its key is overwritten with its successor's and
/// the successor's node is the one unlinked and released, so only handles
/// to that successor become stale. Returns the index of the released slot.
pub fn remove(arena: &mut NodeArena, root: &mut Option<u32>, mut n: u32) -> u32 {
    if arena[n].l.is_some() && arena[n].r.is_some() {
        if let Some(s) = next(arena, n) {
            trace!(node = n, successor = s, "remove: copy successor key");
            arena[n].k = arena[s].k;
            n = s;
        }
    }

    let parent = arena[n].p;
    match arena[n].l.or(arena[n].r) {
        None => {
            // The fixup needs n's position and sibling, so it runs first.
            if arena[n].is_black() {
                fix_after_remove(arena, root, n);
            }
            let parent = arena[n].p;
            replace_child(arena, root, parent, n, None);
        }
        Some(child) => {
            arena[child].p = parent;
            replace_child(arena, root, parent, n, Some(child));
            if arena[n].is_black() {
                fix_after_remove(arena, root, child);
            }
        }
    }

    let node = &mut arena[n];
    node.p = None;
    node.l = None;
    node.r = None;
    arena.destroy_node(n);
    n
}

/// Repairs the missing black left by removing a black node at `n`.
///
/// Each pass either resolves the deficiency with a rotation and ends the
/// loop, or recolors the sibling and moves the deficiency to the parent.
fn fix_after_remove(arena: &mut NodeArena, root: &mut Option<u32>, mut n: u32) {
    while Some(n) != *root && arena[n].is_black() {
        let Some(p) = arena[n].p else { break };

        if arena[p].l == Some(n) {
            let mut sibling = arena[p].r;
            if color_of(arena, sibling).is_red() {
                trace!(node = n, parent = p, "remove fixup: red sibling");
                set_color(arena, sibling, Color::Black);
                arena[p].color = Color::Red;
                rotate_left(arena, root, p);
                sibling = arena[p].r;
            }

            if color_of(arena, left_of(arena, sibling)).is_black()
                && color_of(arena, right_of(arena, sibling)).is_black()
            {
                trace!(node = n, parent = p, "remove fixup: black nephews, move up");
                set_color(arena, sibling, Color::Red);
                n = p;
                continue;
            }

            if color_of(arena, right_of(arena, sibling)).is_black() {
                trace!(node = n, parent = p, "remove fixup: near nephew red");
                let near = left_of(arena, sibling);
                set_color(arena, near, Color::Black);
                set_color(arena, sibling, Color::Red);
                if let Some(s) = sibling {
                    rotate_right(arena, root, s);
                }
                sibling = arena[p].r;
            }

            trace!(node = n, parent = p, "remove fixup: far nephew red");
            let parent_color = arena[p].color;
            let far = right_of(arena, sibling);
            set_color(arena, sibling, parent_color);
            arena[p].color = Color::Black;
            set_color(arena, far, Color::Black);
            rotate_left(arena, root, p);
            break;
        } else {
            let mut sibling = arena[p].l;
            if color_of(arena, sibling).is_red() {
                trace!(node = n, parent = p, "remove fixup: red sibling");
                set_color(arena, sibling, Color::Black);
                arena[p].color = Color::Red;
                rotate_right(arena, root, p);
                sibling = arena[p].l;
            }

            if color_of(arena, left_of(arena, sibling)).is_black()
                && color_of(arena, right_of(arena, sibling)).is_black()
            {
                trace!(node = n, parent = p, "remove fixup: black nephews, move up");
                set_color(arena, sibling, Color::Red);
                n = p;
                continue;
            }

            if color_of(arena, left_of(arena, sibling)).is_black() {
                trace!(node = n, parent = p, "remove fixup: near nephew red");
                let near = right_of(arena, sibling);
                set_color(arena, near, Color::Black);
                set_color(arena, sibling, Color::Red);
                if let Some(s) = sibling {
                    rotate_left(arena, root, s);
                }
                sibling = arena[p].l;
            }

            trace!(node = n, parent = p, "remove fixup: far nephew red");
            let parent_color = arena[p].color;
            let far = left_of(arena, sibling);
            set_color(arena, sibling, parent_color);
            arena[p].color = Color::Black;
            set_color(arena, far, Color::Black);
            rotate_right(arena, root, p);
            break;
        }
    }

    arena[n].color = Color::Black;
}
