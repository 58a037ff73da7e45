//! Cells of the [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary tree.

use super::iterables::Nodelike;
use core::fmt;

/// Position of a node in the arena of its [BinaryTree](super::BinaryTree).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ArenaIndex(pub usize);

/// A node structure to be used in an arena allocated binary tree.
#[derive(Debug, Clone)]
pub struct ArenaNode<Load> {
    /// The user-defined load that the node owns
    pub(super) load: Load,
    /// Index in the arena allocation
    pub(super) index: ArenaIndex,
    pub(super) left: Option<ArenaIndex>,
    pub(super) right: Option<ArenaIndex>,
    /// Distance to the root
    pub(super) depth: usize,
}

impl<Load> ArenaNode<Load> {
    /// A node without children. Children are only ever attached by the owning tree.
    pub(super) fn leaf(load: Load, index: ArenaIndex, depth: usize) -> Self {
        ArenaNode {
            load,
            index,
            left: None,
            right: None,
            depth,
        }
    }
}

impl<Load> Nodelike<Load> for ArenaNode<Load> {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn get(&self) -> &Load {
        &self.load
    }

    fn index(&self) -> ArenaIndex {
        self.index
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

impl<Load> fmt::Display for ArenaNode<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arena index {:?}, children: ({:?}, {:?}), payload: {} ",
            self.index.0,
            self.left.map(|i| i.0),
            self.right.map(|i| i.0),
            self.load
        )
    }
}
