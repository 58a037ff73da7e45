//! Preorder traversal: node, left subtree, right subtree.

use super::{
    iterables::{same_node, start_in},
    ArenaNode, BinaryTree, Nodelike, Traversal,
};
use std::iter::FusedIterator;

/// Iterator over the loads of a [BinaryTree] in preorder.
///
/// The stack holds the pending frontier, its top is the current node. Children are pushed
/// right first so that the left subtree is visited before the right one.
pub struct Preorder<'a, Load> {
    tree: &'a BinaryTree<Load>,
    stack: Vec<&'a ArenaNode<Load>>,
}

impl<'a, Load> Traversal<'a, Load> for Preorder<'a, Load> {
    fn new(tree: &'a BinaryTree<Load>, start: Option<&'a ArenaNode<Load>>) -> Self {
        let mut stack = Vec::with_capacity(tree.height());
        stack.extend(start_in(tree, start));
        Preorder { tree, stack }
    }

    fn node(&self) -> Option<&'a ArenaNode<Load>> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.stack.extend(self.tree.right(node));
            self.stack.extend(self.tree.left(node));
        }
    }
}

impl<'a, Load> Iterator for Preorder<'a, Load> {
    type Item = &'a Load;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node()?;
        self.advance();
        Some(node.get())
    }
}

impl<Load> FusedIterator for Preorder<'_, Load> {}

impl<Load> Clone for Preorder<'_, Load> {
    fn clone(&self) -> Self {
        Preorder {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<Load> PartialEq for Preorder<'_, Load> {
    fn eq(&self, other: &Self) -> bool {
        same_node(self.node(), other.node())
    }
}
