//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary tree with non-recursive preorder, inorder and postorder traversal.

pub mod inorder;
pub mod iterables;
pub mod node;
pub mod postorder;
pub mod preorder;
pub mod tree;

pub use inorder::Inorder;
pub use iterables::{Nodelike, Order, Traversal};
pub use node::{ArenaIndex, ArenaNode};
pub use postorder::Postorder;
pub use preorder::Preorder;
pub use tree::BinaryTree;
