//! Tree configuration.

use serde::{Deserialize, Serialize};

/// Default number of node slots reserved up front.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for an [`RbTree`](crate::RbTree).
///
/// # Example
///
/// ```rust
/// use rb_index::{RbTree, TreeConfig};
///
/// let config = TreeConfig::new().with_initial_capacity(1024).with_max_nodes(10_000);
/// let tree = RbTree::with_config(config);
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Node slots to pre-allocate.
    pub initial_capacity: usize,

    /// Upper bound on live nodes. Inserting a new key beyond it fails with
    /// [`RbTreeError::AllocationFailed`](crate::RbTreeError::AllocationFailed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,

    /// Run the invariant verifier after every insert and delete
    /// (debug builds only).
    pub verify_after_mutation: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_nodes: None,
            verify_after_mutation: false,
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_verify_after_mutation(mut self, enable: bool) -> Self {
        self.verify_after_mutation = enable;
        self
    }
}
