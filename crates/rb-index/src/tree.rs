//! The tree container: owns the arena and the root, hands out handles.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use crate::arena::NodeArena;
use crate::config::TreeConfig;
use crate::error::{InvariantViolation, RbTreeError, Result};
use crate::red_black;
use crate::types::{Color, Key, NodeHandle};
use crate::util;

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(0);

/// Red-black tree of unique integer keys.
///
/// Not synchronized: wrap it in a mutex to share it between threads.
///
/// # Example
///
/// ```
/// use rb_index::RbTree;
///
/// let mut tree = RbTree::new();
/// for k in [5, 1, 9] {
///     tree.insert(k)?;
/// }
/// let h = tree.find(1).unwrap();
/// tree.delete(h)?;
/// assert!(tree.find(1).is_none());
/// assert_eq!(tree.len(), 2);
/// # Ok::<(), rb_index::RbTreeError>(())
/// ```
#[derive(Debug)]
pub struct RbTree {
    id: u32,
    arena: NodeArena,
    root: Option<u32>,
    len: usize,
    config: TreeConfig,
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RbTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        let id = NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(tree = id, ?config, "created tree");
        Self {
            id,
            arena: NodeArena::with_capacity(config.initial_capacity, config.max_nodes),
            root: None,
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes currently allocated from the arena. Equals [`len`](Self::len)
    /// unless a release was refused.
    pub fn live_nodes(&self) -> usize {
        self.arena.live()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<NodeHandle> {
        self.root.map(|i| self.handle(i))
    }

    /// Inserts `key`, returning the handle of the node that holds it.
    ///
    /// Inserting a key that is already present returns its existing handle
    /// and leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// [`RbTreeError::AllocationFailed`] if no node could be allocated; the
    /// tree is unchanged.
    pub fn insert(&mut self, key: Key) -> Result<NodeHandle> {
        let (idx, created) = red_black::insert(&mut self.arena, &mut self.root, key)
            .inspect_err(|err| debug!(tree = self.id, key, %err, "insert failed"))?;
        if created {
            self.len += 1;
            self.check_after_mutation("insert");
        }
        Ok(self.handle(idx))
    }

    pub fn find(&self, key: Key) -> Option<NodeHandle> {
        util::find(&self.arena, self.root, key).map(|i| self.handle(i))
    }

    pub fn contains(&self, key: Key) -> bool {
        util::find(&self.arena, self.root, key).is_some()
    }

    /// Removes the key held by `handle`.
    ///
    /// When that node has two children it takes over its successor's key and
    /// the successor's node is released instead: `handle` stays valid (now
    /// holding the successor key) and the successor's handle goes stale.
    ///
    /// # Errors
    ///
    /// [`RbTreeError::NotAMember`] if `handle` was issued by another tree or
    /// its node has already been released.
    pub fn delete(&mut self, handle: NodeHandle) -> Result<()> {
        let idx = self.resolve(handle)?;
        red_black::remove(&mut self.arena, &mut self.root, idx);
        self.len -= 1;
        self.check_after_mutation("delete");
        Ok(())
    }

    /// Releases every node. The tree is empty and reusable afterwards.
    /// Returns the number of nodes released.
    pub fn destroy(&mut self) -> usize {
        let released = self.arena.destroy_all(self.root.take());
        debug!(tree = self.id, released, "destroyed tree");
        self.len = 0;
        released
    }

    /// Read-only view of the node behind `handle`.
    pub fn get(&self, handle: NodeHandle) -> Option<NodeRef<'_>> {
        self.resolve(handle).ok().map(|index| NodeRef { tree: self, index })
    }

    pub fn key(&self, handle: NodeHandle) -> Option<Key> {
        self.get(handle).map(|n| n.key())
    }

    pub fn color(&self, handle: NodeHandle) -> Option<Color> {
        self.get(handle).map(|n| n.color())
    }

    pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.get(handle)?.parent().map(|n| n.handle())
    }

    pub fn left(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.get(handle)?.left().map(|n| n.handle())
    }

    pub fn right(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.get(handle)?.right().map(|n| n.handle())
    }

    /// Checks every red-black invariant. See
    /// [`assert_red_black_tree`](red_black::assert_red_black_tree).
    pub fn verify(&self) -> std::result::Result<(), InvariantViolation> {
        red_black::assert_red_black_tree(&self.arena, self.root)
    }

    fn handle(&self, index: u32) -> NodeHandle {
        NodeHandle {
            tree: self.id,
            index,
            generation: self.arena.generation(index).unwrap_or_default(),
        }
    }

    fn resolve(&self, handle: NodeHandle) -> Result<u32> {
        let member = handle.tree == self.id
            && self.arena.is_live(handle.index)
            && self.arena.generation(handle.index) == Some(handle.generation);
        if member {
            Ok(handle.index)
        } else {
            Err(RbTreeError::NotAMember {
                index: handle.index,
            })
        }
    }

    fn check_after_mutation(&self, op: &str) {
        if cfg!(debug_assertions) && self.config.verify_after_mutation {
            if let Err(err) = self.verify() {
                panic!("red-black invariant broken after {op}: {err}");
            }
        }
    }
}

/// Borrowed view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RbTree,
    index: u32,
}

impl<'a> NodeRef<'a> {
    pub fn handle(&self) -> NodeHandle {
        self.tree.handle(self.index)
    }

    pub fn key(&self) -> Key {
        self.tree.arena[self.index].k
    }

    pub fn color(&self) -> Color {
        self.tree.arena[self.index].color
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.tree.arena[self.index].p)
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.link(self.tree.arena[self.index].l)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.link(self.tree.arena[self.index].r)
    }

    /// Whether this node is its parent's left child. `false` for the root.
    pub fn is_left_child(&self) -> bool {
        self.parent()
            .is_some_and(|p| self.tree.arena[p.index].l == Some(self.index))
    }

    fn link(&self, index: Option<u32>) -> Option<NodeRef<'a>> {
        index.map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("key", &self.key())
            .field("color", &self.color())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tree: &RbTree) -> Vec<Key> {
        std::iter::successors(util::first(&tree.arena, tree.root), |&i| {
            util::next(&tree.arena, i)
        })
        .map(|i| tree.arena[i].k)
        .collect()
    }

    #[test]
    fn new_tree_is_empty() {
        let tree = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.find(1), None);
        assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn insert_find_delete() {
        let mut tree = RbTree::new();
        let h = tree.insert(10).unwrap();
        tree.insert(5).unwrap();
        tree.insert(15).unwrap();
        assert_eq!(tree.find(10), Some(h));
        assert!(tree.contains(15));
        assert_eq!(tree.len(), 3);

        let h5 = tree.find(5).unwrap();
        tree.delete(h5).unwrap();
        assert!(!tree.contains(5));
        assert_eq!(keys(&tree), vec![10, 15]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.live_nodes(), 2);
    }

    #[test]
    fn duplicate_insert_returns_same_handle() {
        let mut tree = RbTree::new();
        let a = tree.insert(3).unwrap();
        let b = tree.insert(3).unwrap();
        assert_eq!(a, b);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut tree = RbTree::new();
        let h = tree.insert(1).unwrap();
        tree.delete(h).unwrap();
        assert_eq!(tree.delete(h), Err(RbTreeError::NotAMember { index: h.index() }));

        // Slot reuse does not revive the old handle.
        let h2 = tree.insert(2).unwrap();
        assert_eq!(h2.index(), h.index());
        assert_ne!(h2, h);
        assert!(tree.get(h).is_none());
        assert_eq!(tree.key(h2), Some(2));
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut a = RbTree::new();
        let mut b = RbTree::new();
        let ha = a.insert(1).unwrap();
        b.insert(1).unwrap();
        assert!(matches!(b.delete(ha), Err(RbTreeError::NotAMember { .. })));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn accessors_follow_links() {
        let mut tree = RbTree::new();
        for k in [2, 1, 3] {
            tree.insert(k).unwrap();
        }
        let root = tree.root().unwrap();
        assert_eq!(tree.key(root), Some(2));
        assert_eq!(tree.color(root), Some(Color::Black));
        assert_eq!(tree.parent(root), None);

        let l = tree.left(root).unwrap();
        let r = tree.right(root).unwrap();
        assert_eq!(tree.key(l), Some(1));
        assert_eq!(tree.key(r), Some(3));
        assert_eq!(tree.color(l), Some(Color::Red));
        assert_eq!(tree.parent(l), Some(root));

        let lv = tree.get(l).unwrap();
        assert!(lv.is_left_child());
        assert!(!tree.get(r).unwrap().is_left_child());
        assert!(!tree.get(root).unwrap().is_left_child());
    }

    #[test]
    fn two_child_delete_keeps_handle_valid() {
        let mut tree = RbTree::new();
        let h2 = tree.insert(2).unwrap();
        tree.insert(1).unwrap();
        let h3 = tree.insert(3).unwrap();

        tree.delete(h2).unwrap();
        assert_eq!(tree.key(h2), Some(3));
        assert_eq!(tree.key(h3), None);
        assert_eq!(tree.find(3), Some(h2));
    }

    #[test]
    fn destroy_releases_everything_and_tree_is_reusable() {
        let mut tree = RbTree::new();
        for k in 0..100 {
            tree.insert(k).unwrap();
        }
        assert_eq!(tree.destroy(), 100);
        assert_eq!(tree.live_nodes(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);

        tree.insert(7).unwrap();
        assert_eq!(keys(&tree), vec![7]);
    }

    #[test]
    fn max_nodes_makes_insert_fail() {
        let mut tree = RbTree::with_config(TreeConfig::new().with_max_nodes(3));
        for k in 0..3 {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            tree.insert(3),
            Err(RbTreeError::AllocationFailed { capacity: 3 })
        );
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), vec![0, 1, 2]);
        assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn verifying_config_checks_each_mutation() {
        let mut tree = RbTree::with_config(TreeConfig::new().with_verify_after_mutation(true));
        for k in (0..50).rev() {
            tree.insert(k).unwrap();
        }
        for k in (0..50).step_by(2) {
            let h = tree.find(k).unwrap();
            tree.delete(h).unwrap();
        }
        assert_eq!(tree.len(), 25);
    }

    #[test]
    fn tree_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<RbTree>();
    }
}
