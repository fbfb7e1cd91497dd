//! Node repository.
//!
//! A slot arena with a free list. Released slots bump their generation so
//! that stale [`NodeHandle`](crate::NodeHandle)s can be told apart from the
//! node that later reuses the slot.

use std::ops::{Index, IndexMut};

use tracing::{debug, warn};

use crate::error::{RbTreeError, Result};
use crate::red_black::RbNode;
use crate::types::Key;

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<RbNode>,
}

/// Arena owning every node of one tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    max_nodes: Option<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates `capacity` slots. With `max_nodes` set, allocation fails
    /// once that many nodes are live.
    pub fn with_capacity(capacity: usize, max_nodes: Option<usize>) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
            max_nodes,
        }
    }

    /// Number of nodes currently allocated.
    pub fn live(&self) -> usize {
        self.live
    }

    pub fn is_live(&self, idx: u32) -> bool {
        self.slots
            .get(idx as usize)
            .is_some_and(|slot| slot.node.is_some())
    }

    /// Generation of a slot, or `None` if the index was never handed out.
    pub fn generation(&self, idx: u32) -> Option<u32> {
        self.slots.get(idx as usize).map(|slot| slot.generation)
    }

    /// Allocates a red, unlinked node holding `key`.
    pub fn create_node(&mut self, key: Key) -> Result<u32> {
        if let Some(max) = self.max_nodes {
            if self.live >= max {
                return Err(RbTreeError::AllocationFailed { capacity: max });
            }
        }

        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize].node = Some(RbNode::new(key));
            self.live += 1;
            return Ok(idx);
        }

        let idx = u32::try_from(self.slots.len()).map_err(|_| RbTreeError::AllocationFailed {
            capacity: self.slots.len(),
        })?;
        self.slots
            .try_reserve(1)
            .map_err(|_| RbTreeError::AllocationFailed {
                capacity: self.slots.len(),
            })?;
        self.slots.push(Slot {
            generation: 0,
            node: Some(RbNode::new(key)),
        });
        self.live += 1;
        Ok(idx)
    }

    /// Releases a node.
    ///
    /// The node must not have children. A node that still has children is
    /// left in place and `false` is returned; debug builds assert instead.
    /// Releasing an already free slot is also refused.
    pub fn destroy_node(&mut self, idx: u32) -> bool {
        let Some(slot) = self.slots.get_mut(idx as usize) else {
            return false;
        };
        let Some(node) = slot.node.as_ref() else {
            return false;
        };
        if !node.is_leaf() {
            warn!(index = idx, "refusing to release a node that still has children");
            debug_assert!(false, "destroy_node({idx}) called on a node with children");
            return false;
        }

        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(idx);
        self.live -= 1;
        true
    }

    /// Releases every node reachable from `root`, children before parents.
    ///
    /// Walks with an explicit stack. Each child link is cleared by its parent
    /// frame before descending, so every node is a leaf by the time it is
    /// released. Returns the number of nodes released.
    pub fn destroy_all(&mut self, root: Option<u32>) -> usize {
        let mut released = 0;
        let mut stack: Vec<u32> = root.into_iter().collect();

        while let Some(&top) = stack.last() {
            let node = &mut self[top];
            if let Some(l) = node.l.take() {
                stack.push(l);
            } else if let Some(r) = node.r.take() {
                stack.push(r);
            } else {
                stack.pop();
                node.p = None;
                if self.destroy_node(top) {
                    released += 1;
                }
            }
        }

        debug!(released, live = self.live, "released subtree");
        released
    }
}

impl Index<u32> for NodeArena {
    type Output = RbNode;

    fn index(&self, idx: u32) -> &RbNode {
        self.slots[idx as usize]
            .node
            .as_ref()
            .expect("arena slot holds a live node")
    }
}

impl IndexMut<u32> for NodeArena {
    fn index_mut(&mut self, idx: u32) -> &mut RbNode {
        self.slots[idx as usize]
            .node
            .as_mut()
            .expect("arena slot holds a live node")
    }
}
