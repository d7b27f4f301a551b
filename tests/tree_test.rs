//! Tests for the arena-backed binary tree and its level-order traversal

use rstest::rstest;

use nodewalk::domain::{level_order, BinaryTree, DomainError};

fn build_complete_tree(depth: u32) -> BinaryTree {
    let mut tree = BinaryTree::new();
    let root = tree.set_root(0).unwrap();
    let mut frontier = vec![root];
    let mut next_value = 1;
    for _ in 1..depth {
        let mut next = Vec::new();
        for parent in frontier {
            next.push(tree.insert_left(parent, next_value).unwrap());
            next.push(tree.insert_right(parent, next_value + 1).unwrap());
            next_value += 2;
        }
        frontier = next;
    }
    tree
}

#[test]
fn given_absent_tree_when_level_order_then_returns_no_levels() {
    assert_eq!(level_order(None), Vec::<Vec<i64>>::new());
}

#[test]
fn given_root_with_two_children_when_level_order_then_two_levels() {
    // Arrange
    let mut tree = BinaryTree::new();
    let root = tree.set_root(1).unwrap();
    tree.insert_left(root, 2).unwrap();
    tree.insert_right(root, 3).unwrap();

    // Act
    let levels = level_order(Some(&tree));

    // Assert
    assert_eq!(levels, vec![vec![1], vec![2, 3]]);
}

#[rstest]
#[case("[1]")]
#[case("[1,2]")]
#[case("[1,null,2,null,3,null,4]")]
#[case("[3,9,20,null,null,15,7]")]
#[case("[1,2,3,4,5,6,7,8,null,null,9]")]
fn given_any_tree_when_level_order_then_levels_match_height_and_node_count(#[case] literal: &str) {
    let tree: BinaryTree = literal.parse().unwrap();

    let levels = tree.level_order();

    assert_eq!(levels.len(), tree.height());
    assert_eq!(levels.iter().map(Vec::len).sum::<usize>(), tree.len());
    assert!(levels.iter().all(|level| !level.is_empty()));
}

#[test]
fn given_complete_tree_when_level_order_then_levels_double_in_width() {
    let tree = build_complete_tree(5);

    let levels = tree.level_order();

    let widths: Vec<usize> = levels.iter().map(Vec::len).collect();
    assert_eq!(widths, vec![1, 2, 4, 8, 16]);
    assert_eq!(levels[2], vec![3, 4, 5, 6]);
}

#[test]
fn given_degenerate_chain_when_level_order_then_one_value_per_level() {
    // Arrange: a left-leaning chain 0 <- 1 <- 2 ...
    let mut tree = BinaryTree::new();
    let mut current = tree.set_root(0).unwrap();
    for value in 1..1000 {
        current = tree.insert_left(current, value).unwrap();
    }

    // Act
    let levels = tree.level_order();

    // Assert
    assert_eq!(levels.len(), 1000);
    assert_eq!(levels[999], vec![999]);
}

#[test]
fn given_node_when_inspecting_then_parent_links_point_back() {
    let tree: BinaryTree = "[1,2,3]".parse().unwrap();
    let root = tree.root().unwrap();
    let left = tree.node(root).unwrap().left.unwrap();

    assert_eq!(tree.node(left).unwrap().parent, Some(root));
    assert!(tree.node(left).unwrap().is_leaf());
}

#[test]
fn given_index_from_other_tree_when_inserting_then_node_not_found() {
    // Arrange: index 1 exists in `other` but not in `tree`
    let other: BinaryTree = "[1,2]".parse().unwrap();
    let foreign = other.node(other.root().unwrap()).unwrap().left.unwrap();
    let mut tree = BinaryTree::new();
    tree.set_root(1).unwrap();

    // Act
    let result = tree.insert_left(foreign, 5);

    // Assert
    assert_eq!(result, Err(DomainError::NodeNotFound));
}
