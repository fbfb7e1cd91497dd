//! Error types returned by the tree and its verifier.

use thiserror::Error;

/// Result alias for tree operations.
pub type Result<T> = std::result::Result<T, RbTreeError>;

/// Errors reported by [`RbTree`](crate::RbTree) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RbTreeError {
    /// The node repository could not hand out another slot. The tree is
    /// left exactly as it was before the call.
    #[error("node allocation failed (capacity: {capacity})")]
    AllocationFailed { capacity: usize },

    /// The handle was issued by another tree, or its node has since been
    /// released.
    #[error("handle does not belong to this tree (slot {index})")]
    NotAMember { index: u32 },
}

/// A broken red-black or search-tree invariant found by
/// [`assert_red_black_tree`](crate::red_black::assert_red_black_tree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root has a parent")]
    RootHasParent,
    #[error("root is not black")]
    RootNotBlack,
    #[error("broken parent link below slot {index}")]
    BrokenParentLink { index: u32 },
    #[error("red node {index} has a red child")]
    RedRedEdge { index: u32 },
    #[error("black height mismatch at slot {index}: left={left}, right={right}")]
    BlackHeightMismatch {
        index: u32,
        left: usize,
        right: usize,
    },
    #[error("key order violated: {prev} is not less than {next}")]
    OrderViolated { prev: i32, next: i32 },
}
