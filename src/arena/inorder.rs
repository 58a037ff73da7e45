//! Inorder traversal: left subtree, node, right subtree.

use super::{
    iterables::{same_node, start_in},
    ArenaNode, BinaryTree, Nodelike, Traversal,
};
use std::iter::FusedIterator;

/// Iterator over the loads of a [BinaryTree] in inorder.
///
/// The stack holds the path of left descents that still has to be visited. Its top is the
/// current node.
pub struct Inorder<'a, Load> {
    tree: &'a BinaryTree<Load>,
    stack: Vec<&'a ArenaNode<Load>>,
}

impl<'a, Load> Inorder<'a, Load> {
    /// Push `node` and all its left descendants
    fn descend(&mut self, mut node: Option<&'a ArenaNode<Load>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = self.tree.left(current);
        }
    }
}

impl<'a, Load> Traversal<'a, Load> for Inorder<'a, Load> {
    fn new(tree: &'a BinaryTree<Load>, start: Option<&'a ArenaNode<Load>>) -> Self {
        let mut this = Inorder {
            tree,
            stack: Vec::with_capacity(tree.height()),
        };
        this.descend(start_in(tree, start));
        this
    }

    fn node(&self) -> Option<&'a ArenaNode<Load>> {
        self.stack.last().copied()
    }

    fn advance(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.descend(self.tree.right(node));
        }
    }
}

impl<'a, Load> Iterator for Inorder<'a, Load> {
    type Item = &'a Load;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node()?;
        self.advance();
        Some(node.get())
    }
}

impl<Load> FusedIterator for Inorder<'_, Load> {}

impl<Load> Clone for Inorder<'_, Load> {
    fn clone(&self) -> Self {
        Inorder {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<Load> PartialEq for Inorder<'_, Load> {
    fn eq(&self, other: &Self) -> bool {
        same_node(self.node(), other.node())
    }
}
