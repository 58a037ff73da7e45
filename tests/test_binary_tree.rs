use bintree::{BinaryTree, BinaryTreeError, Inorder, Nodelike, Order, Postorder, Preorder, Traversal};
use itertools::Itertools;

// Layout of the tree
//       4
//      / \
//     2   6
//    / \
//   1   3
fn example() -> BinaryTree<i32> {
    let mut tree = BinaryTree::new();
    tree.add_root(4).unwrap();
    tree.add_left(&4, 2).unwrap();
    tree.add_right(&4, 6).unwrap();
    tree.add_left(&2, 1).unwrap();
    tree.add_right(&2, 3).unwrap();
    tree
}

fn traversals(tree: &BinaryTree<i32>) -> [Vec<i32>; 3] {
    [
        tree.begin_preorder().copied().collect_vec(),
        tree.begin_inorder().copied().collect_vec(),
        tree.begin_postorder().copied().collect_vec(),
    ]
}

#[test_log::test]
fn test_traversal_orders() {
    let tree = example();
    let [preorder, inorder, postorder] = traversals(&tree);

    assert_eq!(preorder, &[4, 2, 1, 3, 6]);
    assert_eq!(inorder, &[1, 2, 3, 4, 6]);
    assert_eq!(postorder, &[1, 3, 2, 6, 4]);

    // Boxed and default traversals agree with the concrete ones
    assert_eq!(tree.iter(Order::Preorder).copied().collect_vec(), preorder);
    assert_eq!(tree.iter(Order::Postorder).copied().collect_vec(), postorder);
    assert_eq!((&tree).into_iter().copied().collect_vec(), inorder);
    assert_eq!(tree.begin().copied().collect_vec(), inorder);
}

#[test_log::test]
fn test_shape_follows_calls() {
    let tree = example();

    let root = tree.root().unwrap();
    let two = tree.left(root).unwrap();
    let six = tree.right(root).unwrap();
    assert_eq!((*two.get(), *six.get()), (2, 6));
    assert_eq!(tree.left(two).map(|n| *n.get()), Some(1));
    assert_eq!(tree.right(two).map(|n| *n.get()), Some(3));
    assert!(six.is_leaf());
    assert_eq!(tree.height(), 3);
}

#[test_log::test]
fn test_unknown_value_keeps_tree() {
    let mut tree = example();
    let before = traversals(&tree);

    let error = tree.add_left(&5, 9).unwrap_err();
    assert!(matches!(error, BinaryTreeError::UnknownValue(5)));
    assert_eq!(error.to_string(), "Value not in tree: 5");
    assert!(tree.add_right(&0, 9).is_err());

    assert_eq!(traversals(&tree), before);
    assert_eq!(tree.len(), 5);
}

#[test_log::test]
fn test_overwrite_keeps_subtree() {
    let mut tree = example();
    tree.add_left(&4, 20).unwrap();
    tree.add_right(&20, 30).unwrap();

    let [preorder, inorder, _] = traversals(&tree);
    assert_eq!(preorder, &[4, 20, 1, 30, 6]);
    assert_eq!(inorder, &[1, 20, 30, 4, 6]);
    assert_eq!(tree.len(), 5);
}

#[test_log::test]
fn test_root_overwrite() {
    let mut tree = BinaryTree::new();
    tree.add_root("first").unwrap();
    tree.add_root("second").unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.begin_preorder().collect_vec(), &[&"second"]);
}

#[test_log::test]
fn test_copy_is_independent() {
    let original = example();
    let expected = traversals(&original);

    let mut copy = original.clone();
    copy.add_root(40).unwrap();
    copy.add_left(&6, 5).unwrap();
    assert_eq!(traversals(&copy)[1], &[1, 2, 3, 40, 5, 6]);
    assert_eq!(traversals(&original), expected);

    let mut assigned = BinaryTree::new();
    assigned.add_root(100).unwrap();
    assigned.clone_from(&original);
    assert_eq!(traversals(&assigned), expected);
    assigned.add_right(&6, 7).unwrap();
    assert_eq!(traversals(&original), expected);

    let copy = original.try_clone().unwrap();
    assert_eq!(traversals(&copy), expected);
}

#[test_log::test]
fn test_move_empties_source() {
    let mut source = example();
    let expected = traversals(&source);

    let mut destination = BinaryTree::new();
    destination.add_root(0).unwrap();
    destination = source.take();

    assert!(source.is_empty());
    assert!(source.begin_preorder() == source.end_preorder());
    assert!(source.begin_inorder() == source.end_inorder());
    assert!(source.begin_postorder() == source.end_postorder());
    assert_eq!(traversals(&destination), expected);

    // The moved-from tree remains usable
    source.add_root(1).unwrap();
    assert_eq!(source.len(), 1);
}

#[test_log::test]
fn test_empty_tree() {
    let tree = BinaryTree::<i32>::new();

    assert!(tree.begin_preorder() == tree.end_preorder());
    assert!(tree.begin_inorder() == tree.end_inorder());
    assert!(tree.begin_postorder() == tree.end_postorder());
    assert!(tree.begin() == tree.end());
    assert_eq!(tree.iter(Order::Inorder).count(), 0);
    assert!(tree.node_by_load(&1).is_none());
}

#[test_log::test]
fn test_single_node() {
    let mut tree = BinaryTree::new();
    tree.add_root('x').unwrap();

    for order in [Order::Preorder, Order::Inorder, Order::Postorder] {
        assert_eq!(tree.iter(order).collect_vec(), &[&'x']);
    }
}

#[test_log::test]
fn test_exhaustion_is_stable() {
    let tree = example();

    let mut preorder = tree.begin_preorder();
    let mut inorder = tree.begin_inorder();
    let mut postorder = tree.begin_postorder();
    for _ in 0..10 {
        preorder.advance();
        inorder.advance();
        postorder.advance();
    }

    assert!(preorder == tree.end_preorder());
    assert!(inorder == tree.end_inorder());
    assert!(postorder == tree.end_postorder());
    assert_eq!(preorder.current(), None);
    assert_eq!(inorder.next(), None);
    assert_eq!(postorder.next(), None);
}

#[test_log::test]
fn test_equality_is_identity() {
    // Two nodes with the same load are still different positions
    let mut tree = BinaryTree::new();
    tree.add_root(1).unwrap();
    tree.add_left(&1, 1).unwrap();

    let mut first = tree.begin_preorder();
    let second = tree.begin_preorder();
    assert!(first == second);

    first.advance();
    assert_eq!(first.current(), second.current());
    assert!(first != second);
}

#[test_log::test]
fn test_foreign_start_node() {
    let tree = example();
    let mut other = BinaryTree::new();
    other.add_root(9).unwrap();
    other.add_left(&9, 8).unwrap();

    // The root of `other` shares index 0 with the root of `tree`
    let foreign = other.root().ok();
    assert!(Preorder::new(&tree, foreign).is_end());
    assert!(Inorder::new(&tree, foreign) == tree.end_inorder());
    assert_eq!(Postorder::new(&tree, foreign).count(), 0);
    assert_eq!(tree.iter_sub(Order::Preorder, other.root().unwrap()).count(), 0);

    // Nodes of the same tree still start a subtree traversal
    let own = tree.node_by_load(&2);
    assert_eq!(Preorder::new(&tree, own).copied().collect_vec(), &[2, 1, 3]);
    assert_eq!(Preorder::new(&other, foreign).copied().collect_vec(), &[9, 8]);
}

#[test_log::test]
fn test_degenerate_tree() {
    // A chain of right children, every traversal stack stays flat or grows linearly
    let length = 2_000;
    let mut tree = BinaryTree::with_capacity(length);
    tree.add_root(0).unwrap();
    for i in 1..length {
        tree.add_right(&(i - 1), i).unwrap();
    }

    assert_eq!(tree.height(), length);
    assert_eq!(tree.begin_postorder().len(), length);
    assert_eq!(tree.begin_postorder().next(), Some(&(length - 1)));
    assert_eq!(tree.begin_inorder().last(), Some(&(length - 1)));
    assert!(tree.begin_preorder().copied().eq(0..length));

    let copy = tree.clone();
    drop(tree);
    assert_eq!(copy.begin_preorder().count(), length);
}
