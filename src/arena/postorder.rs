//! Postorder traversal: left subtree, right subtree, node.
//!
//! Unlike [Preorder](super::Preorder) and [Inorder](super::Inorder), which only hold the
//! active frontier, this traversal materializes the complete visiting order of the subtree
//! when it is created. Memory is therefore proportional to the size of the subtree.

use super::{
    iterables::{same_node, start_in},
    ArenaNode, BinaryTree, Nodelike, Traversal,
};
use std::iter::FusedIterator;

/// Iterator over the loads of a [BinaryTree] in postorder.
pub struct Postorder<'a, Load> {
    tree: &'a BinaryTree<Load>,
    /// Precomputed order, the next node to visit is on top
    visits: Vec<&'a ArenaNode<Load>>,
}

impl<'a, Load> Traversal<'a, Load> for Postorder<'a, Load> {
    fn new(tree: &'a BinaryTree<Load>, start: Option<&'a ArenaNode<Load>>) -> Self {
        let mut visits = Vec::new();
        let mut pending = Vec::with_capacity(tree.height());
        pending.extend(start_in(tree, start));

        // Nodes end up in reverse postorder (node, right, left), so popping `visits`
        // yields left, right, node.
        while let Some(node) = pending.pop() {
            visits.push(node);
            pending.extend(tree.left(node));
            pending.extend(tree.right(node));
        }
        Postorder { tree, visits }
    }

    fn node(&self) -> Option<&'a ArenaNode<Load>> {
        self.visits.last().copied()
    }

    fn advance(&mut self) {
        self.visits.pop();
    }
}

impl<'a, Load> Iterator for Postorder<'a, Load> {
    type Item = &'a Load;

    fn next(&mut self) -> Option<Self::Item> {
        self.visits.pop().map(Nodelike::get)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.visits.len(), Some(self.visits.len()))
    }
}

impl<Load> ExactSizeIterator for Postorder<'_, Load> {}

impl<Load> FusedIterator for Postorder<'_, Load> {}

impl<Load> Clone for Postorder<'_, Load> {
    fn clone(&self) -> Self {
        Postorder {
            tree: self.tree,
            visits: self.visits.clone(),
        }
    }
}

impl<Load> PartialEq for Postorder<'_, Load> {
    fn eq(&self, other: &Self) -> bool {
        same_node(self.node(), other.node())
    }
}
