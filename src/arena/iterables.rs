//! Definition of the interfaces for tree traversal
use super::{ArenaIndex, ArenaNode, BinaryTree};

/// Order of traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree
    Preorder,
    /// Left subtree, node, right subtree
    Inorder,
    /// Left subtree, right subtree, node
    Postorder,
}

/// Container that holds data in a [BinaryTree]
pub trait Nodelike<Load> {
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Load;

    fn index(&self) -> ArenaIndex;
    /// Get the node's distance to the root node.
    fn depth(&self) -> usize;
}

/// A cursor that reproduces a depth-first order with an explicit stack instead of recursion.
///
/// A traversal started at `None` is the end marker of its order. Two traversals compare equal
/// if they point to the very same node (or both are at the end). Traversals borrow the tree,
/// so the tree cannot be mutated while one is alive.
pub trait Traversal<'a, Load: 'a>: Iterator<Item = &'a Load> {
    /// Start a traversal of the subtree rooted at `start`. A node that does not belong to
    /// `tree` yields the end marker.
    fn new(tree: &'a BinaryTree<Load>, start: Option<&'a ArenaNode<Load>>) -> Self
    where
        Self: Sized;

    /// The node the traversal currently points to, `None` once exhausted.
    fn node(&self) -> Option<&'a ArenaNode<Load>>;

    /// Move to the next node. A no-op at the end.
    fn advance(&mut self);

    /// Dereference: the load of the current node.
    fn current(&self) -> Option<&'a Load> {
        self.node().map(Nodelike::get)
    }

    fn is_end(&self) -> bool {
        self.node().is_none()
    }
}

/// `start` if it is a node of `tree` (by identity), `None` otherwise.
pub(super) fn start_in<'a, Load>(
    tree: &'a BinaryTree<Load>,
    start: Option<&'a ArenaNode<Load>>,
) -> Option<&'a ArenaNode<Load>> {
    let start = start?;
    tree.nodes.get(start.index.0).filter(|node| std::ptr::eq(*node, start))
}

/// Identity (not value) comparison of two cursor positions.
pub(super) fn same_node<Load>(first: Option<&ArenaNode<Load>>, second: Option<&ArenaNode<Load>>) -> bool {
    match (first, second) {
        (Some(first), Some(second)) => std::ptr::eq(first, second),
        (None, None) => true,
        _ => false,
    }
}
