//! ## About
//!
//! This crate contains a generic binary tree whose nodes are owned by an
//! [arena](https://en.wikipedia.org/wiki/Region-based_memory_management), together with
//! preorder, inorder and postorder traversals that run on an explicit stack instead of
//! recursion. Traversal depth is therefore not bounded by the size of the call stack.
//!
//! See the [BinaryTree] struct to get started.
//!
//! ```
//! use bintree::{BinaryTree, Order};
//!
//! let mut tree = BinaryTree::new();
//! tree.add_root(4)?;
//! tree.add_left(&4, 2)?;
//! tree.add_right(&4, 6)?;
//!
//! assert_eq!(tree.iter(Order::Preorder).copied().collect::<Vec<_>>(), [4, 2, 6]);
//! assert_eq!(tree.iter(Order::Postorder).copied().collect::<Vec<_>>(), [2, 6, 4]);
//! # Ok::<(), bintree::BinaryTreeError<i32>>(())
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives or nouns that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod arena;
pub mod errors;

pub use arena::{ArenaIndex, ArenaNode, BinaryTree, Inorder, Nodelike, Order, Postorder, Preorder, Traversal};
pub use errors::BinaryTreeError;
