//! Implementation of a binary tree in an
//! [arena allocation](https://en.wikipedia.org/wiki/Region-based_memory_management).
//!
//! All nodes are owned by the arena of a single [BinaryTree]. Nodes refer to their children
//! by [ArenaIndex] and an index is only written when a new node is pushed, hence every node
//! has exactly one parent. Teardown releases the arena as a whole, so neither dropping nor
//! copying recurses along the height of the tree.

use super::{ArenaIndex, ArenaNode, Inorder, Nodelike, Order, Postorder, Preorder, Traversal};
use crate::BinaryTreeError;
use core::fmt;
use itertools::Itertools;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Side of a parent to which a child is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Binary tree that uses arena allocation. The root is the first node in the arena.
///
/// Adding a value to an occupied position overwrites the load of the node there and
/// keeps its children.
#[derive(Debug, Clone)]
pub struct BinaryTree<Load> {
    /// Memory allocated area for nodes
    pub(super) nodes: Vec<ArenaNode<Load>>,

    /// Number of levels, used as a capacity hint for traversal stacks
    pub(super) height: usize,
}

impl<Load> BinaryTree<Load> {
    /// Constructor for an empty tree
    pub fn new() -> Self {
        BinaryTree {
            nodes: vec![],
            height: 0,
        }
    }

    /// Constructor for an empty tree with memory reserved for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            nodes: Vec::with_capacity(capacity),
            height: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels of the tree, zero for an empty tree
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn root(&self) -> Result<&ArenaNode<Load>, BinaryTreeError<Load>> {
        self.nodes.first().ok_or(BinaryTreeError::RootNotSet)
    }

    pub fn left(&self, node: &ArenaNode<Load>) -> Option<&ArenaNode<Load>> {
        node.left.and_then(|index| self.nodes.get(index.0))
    }

    pub fn right(&self, node: &ArenaNode<Load>) -> Option<&ArenaNode<Load>> {
        node.right.and_then(|index| self.nodes.get(index.0))
    }

    /// Sets the load of the root node. Creates the root if the tree is empty,
    /// otherwise the load is overwritten and the children are kept.
    pub fn add_root(&mut self, load: Load) -> Result<(), BinaryTreeError<Load>> {
        match self.nodes.first_mut() {
            Some(root) => {
                trace!("Overwriting root");
                root.load = load;
            }
            None => {
                self.nodes.try_reserve(1)?;
                self.nodes.push(ArenaNode::leaf(load, ArenaIndex(0), 0));
                self.height = 1;
                trace!("Created root");
            }
        }
        Ok(())
    }

    /// Deletes all nodes. The tree stays usable.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), "Releasing tree");
        self.nodes.clear();
        self.height = 0;
    }

    /// Moves all nodes into a new tree in constant time and leaves this one empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Sets the child on `side` of the node at `parent`. An existing child is
    /// overwritten in place. Memory is reserved before anything is changed.
    fn attach(&mut self, parent: ArenaIndex, side: Side, load: Load) -> Result<(), BinaryTreeError<Load>> {
        let (slot, depth) = match self.nodes.get(parent.0) {
            Some(node) => (
                match side {
                    Side::Left => node.left,
                    Side::Right => node.right,
                },
                node.depth() + 1,
            ),
            None => return Err(BinaryTreeError::RootNotSet),
        };

        if let Some(child) = slot {
            if let Some(node) = self.nodes.get_mut(child.0) {
                trace!(?side, index = child.0, "Overwriting child");
                node.load = load;
                return Ok(());
            }
        }

        self.nodes.try_reserve(1)?;
        let index = ArenaIndex(self.nodes.len());
        self.nodes.push(ArenaNode::leaf(load, index, depth));
        if let Some(node) = self.nodes.get_mut(parent.0) {
            match side {
                Side::Left => node.left = Some(index),
                Side::Right => node.right = Some(index),
            }
        }
        self.height = self.height.max(depth + 1);
        trace!(?side, index = index.0, depth, "Attached child");
        Ok(())
    }

    /// Start a traversal in preorder
    pub fn begin_preorder(&self) -> Preorder<'_, Load> {
        Preorder::new(self, self.nodes.first())
    }

    /// End marker of traversals in preorder
    pub fn end_preorder(&self) -> Preorder<'_, Load> {
        Preorder::new(self, None)
    }

    pub fn begin_inorder(&self) -> Inorder<'_, Load> {
        Inorder::new(self, self.nodes.first())
    }

    pub fn end_inorder(&self) -> Inorder<'_, Load> {
        Inorder::new(self, None)
    }

    pub fn begin_postorder(&self) -> Postorder<'_, Load> {
        Postorder::new(self, self.nodes.first())
    }

    pub fn end_postorder(&self) -> Postorder<'_, Load> {
        Postorder::new(self, None)
    }

    /// Default traversal (inorder)
    pub fn begin(&self) -> Inorder<'_, Load> {
        self.begin_inorder()
    }

    pub fn end(&self) -> Inorder<'_, Load> {
        self.end_inorder()
    }

    /// Iterate over all loads in the given order
    pub fn iter(&self, order: Order) -> Box<dyn Iterator<Item = &Load> + '_> {
        match order {
            Order::Preorder => Box::new(self.begin_preorder()),
            Order::Inorder => Box::new(self.begin_inorder()),
            Order::Postorder => Box::new(self.begin_postorder()),
        }
    }

    /// Iterate over the loads of the subtree below `root` in the given order.
    /// Yields nothing if `root` is not a node of this tree.
    pub fn iter_sub<'a>(&'a self, order: Order, root: &'a ArenaNode<Load>) -> Box<dyn Iterator<Item = &'a Load> + 'a> {
        let start = Some(root);
        match order {
            Order::Preorder => Box::new(Preorder::new(self, start)),
            Order::Inorder => Box::new(Inorder::new(self, start)),
            Order::Postorder => Box::new(Postorder::new(self, start)),
        }
    }
}

impl<Load> BinaryTree<Load>
where
    Load: PartialEq,
{
    /// Depth-first search for the first node that carries `load`. The node is checked
    /// before its left subtree, the left subtree before the right one (preorder).
    pub fn node_by_load(&self, load: &Load) -> Option<&ArenaNode<Load>> {
        let mut cursor = self.begin_preorder();
        while let Some(node) = cursor.node() {
            if node.load == *load {
                return Some(node);
            }
            cursor.advance();
        }
        None
    }

    pub fn contains(&self, load: &Load) -> bool {
        self.node_by_load(load).is_some()
    }
}

impl<Load> BinaryTree<Load>
where
    Load: PartialEq + Clone,
{
    /// Sets the left child of the first node carrying `existing` (see [BinaryTree::node_by_load]).
    /// An existing left child is overwritten and keeps its children.
    #[instrument(skip_all)]
    pub fn add_left(&mut self, existing: &Load, load: Load) -> Result<(), BinaryTreeError<Load>> {
        self.add_child(existing, Side::Left, load)
    }

    /// Sets the right child of the first node carrying `existing` (see [BinaryTree::node_by_load]).
    /// An existing right child is overwritten and keeps its children.
    #[instrument(skip_all)]
    pub fn add_right(&mut self, existing: &Load, load: Load) -> Result<(), BinaryTreeError<Load>> {
        self.add_child(existing, Side::Right, load)
    }

    fn add_child(&mut self, existing: &Load, side: Side, load: Load) -> Result<(), BinaryTreeError<Load>> {
        let parent = match self.node_by_load(existing) {
            Some(node) => node.index,
            None => {
                debug!("Parent value not found");
                return Err(BinaryTreeError::UnknownValue(existing.clone()));
            }
        };
        self.attach(parent, side, load)
    }
}

impl<Load> BinaryTree<Load>
where
    Load: Clone,
{
    /// Deep copy that reports allocation failure instead of aborting.
    #[instrument(skip_all)]
    pub fn try_clone(&self) -> Result<Self, BinaryTreeError<Load>> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend(self.nodes.iter().cloned());
        debug!(nodes = nodes.len(), "Copied tree");
        Ok(BinaryTree {
            nodes,
            height: self.height,
        })
    }

    /// Copy assignment that reports allocation failure. The copy is completed before
    /// the current nodes are released, on failure `self` is left untouched.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), BinaryTreeError<Load>> {
        let copy = source.try_clone()?;
        self.clear();
        *self = copy;
        Ok(())
    }
}

impl<Load> Default for BinaryTree<Load> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Load> IntoIterator for &'a BinaryTree<Load> {
    type Item = &'a Load;
    type IntoIter = Inorder<'a, Load>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_inorder()
    }
}

/// Human readable output of the loads in inorder. The format is not stable.
impl<Load> fmt::Display for BinaryTree<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.begin_inorder().join(", "))
    }
}
