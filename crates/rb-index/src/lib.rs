//! Arena-backed red-black tree of unique `i32` keys.
//!
//! Meant as the ordered-index building block of larger storage or
//! in-memory indexing code: insert, exact-match lookup and delete all run in
//! O(log n) worst case.
//!
//! Nodes live in a [`NodeArena`] and link to each other through
//! `Option<u32>` slot indices (`p` / `l` / `r`) instead of pointers. Callers
//! receive [`NodeHandle`]s, which carry the owning tree and the slot
//! generation so that foreign or stale handles are rejected.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`arena`] | Node repository: slot allocation, release, post-order destroy |
//! [`red_black`] | Rotations, insert/remove fixups, invariant verifier |
//! [`util`] | `find`, `first`, `next` (successor), `size`, `height` |
//! [`tree`] | [`RbTree`] container and the [`NodeRef`] read-only view |
//! [`print`] | Debug dumps built on the read-only accessors |
//!
//! # Example
//!
//! ```
//! use rb_index::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! for k in 0..10 {
//!     tree.insert(k)?;
//! }
//! tree.delete(tree.find(4).unwrap())?;
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.color(root), Some(Color::Black));
//! assert!(!tree.contains(4));
//! tree.verify().unwrap();
//! assert_eq!(tree.destroy(), 9);
//! # Ok::<(), rb_index::RbTreeError>(())
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod print;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::NodeArena;
pub use config::TreeConfig;
pub use error::{InvariantViolation, RbTreeError, Result};
pub use tree::{NodeRef, RbTree};
pub use types::{Color, Key, NodeHandle};
