//! Arena-backed binary tree with breadth-first level traversal.

use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::str::FromStr;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Tree node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Payload
    pub value: i64,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Index of the left child
    pub left: Option<Index>,
    /// Index of the right child
    pub right: Option<Index>,
}

impl TreeNode {
    fn new(value: i64, parent: Option<Index>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    /// Existing children, left before right.
    pub fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Nodes are addressed by generational indices, so a child link can never
/// dangle: looking up a stale index simply yields `None`. Children are only
/// attached through [`BinaryTree::insert_left`] / [`BinaryTree::insert_right`],
/// which refuse occupied slots, so every node has at most one parent and the
/// structure stays acyclic.
#[derive(Debug, Clone)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: i64) -> DomainResult<Index> {
        if self.root.is_some() {
            return Err(DomainError::RootOccupied);
        }
        let idx = self.arena.insert(TreeNode::new(value, None));
        self.root = Some(idx);
        Ok(idx)
    }

    pub fn insert_left(&mut self, parent: Index, value: i64) -> DomainResult<Index> {
        self.insert_child(parent, Side::Left, value)
    }

    pub fn insert_right(&mut self, parent: Index, value: i64) -> DomainResult<Index> {
        self.insert_child(parent, Side::Right, value)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: Index, side: Side, value: i64) -> DomainResult<Index> {
        let node = self.arena.get(parent).ok_or(DomainError::NodeNotFound)?;
        let slot = match side {
            Side::Left => node.left,
            Side::Right => node.right,
        };
        if slot.is_some() {
            return Err(DomainError::ChildOccupied {
                side: side.as_str(),
            });
        }

        let child = self.arena.insert(TreeNode::new(value, Some(parent)));
        let node = self
            .arena
            .get_mut(parent)
            .ok_or(DomainError::NodeNotFound)?;
        match side {
            Side::Left => node.left = Some(child),
            Side::Right => node.right = Some(child),
        }
        Ok(child)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.levels().count()
    }

    /// Iterates the tree one level at a time, root level first.
    pub fn levels(&self) -> LevelIterator<'_> {
        LevelIterator::new(self)
    }

    /// Node values grouped by level, left to right within a level.
    ///
    /// An empty tree yields no levels at all (not a single empty level).
    #[instrument(level = "debug", skip(self))]
    pub fn level_order(&self) -> Vec<Vec<i64>> {
        let levels: Vec<Vec<i64>> = self
            .levels()
            .map(|level| {
                level
                    .iter()
                    .filter_map(|&idx| self.node(idx))
                    .map(|node| node.value)
                    .collect()
            })
            .collect();
        debug!(levels = levels.len(), nodes = self.len(), "level order complete");
        levels
    }

    /// Renders the tree for terminal display.
    pub fn to_term_tree(&self) -> Tree<String> {
        fn build_tree(tree: &BinaryTree, idx: Index, parent_tree: &mut Tree<String>) {
            let Some(node) = tree.node(idx) else {
                return;
            };
            for (label, child_idx) in [("L", node.left), ("R", node.right)] {
                if let Some((c, child)) = child_idx.and_then(|c| tree.node(c).map(|n| (c, n))) {
                    let mut child_tree = Tree::new(format!("{}: {}", label, child.value));
                    build_tree(tree, c, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        match self.root.and_then(|r| self.node(r).map(|n| (r, n))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.value.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}

/// Level-order traversal of an optional tree; an absent tree has no levels.
pub fn level_order(tree: Option<&BinaryTree>) -> Vec<Vec<i64>> {
    tree.map(BinaryTree::level_order).unwrap_or_default()
}

pub struct LevelIterator<'a> {
    tree: &'a BinaryTree,
    current: Vec<Index>,
}

impl<'a> LevelIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            current: tree.root().into_iter().collect(),
        }
    }
}

impl Iterator for LevelIterator<'_> {
    type Item = Vec<Index>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }
        let mut next_level = Vec::new();
        for &idx in &self.current {
            if let Some(node) = self.tree.node(idx) {
                next_level.extend(node.children());
            }
        }
        trace!(width = self.current.len(), "level");
        Some(mem::replace(&mut self.current, next_level))
    }
}

fn parse_tokens(s: &str) -> DomainResult<Vec<Option<i64>>> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('[')
        .map(|rest| rest.strip_suffix(']').unwrap_or(rest))
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.eq_ignore_ascii_case("null") || t.eq_ignore_ascii_case("nil") {
                Ok(None)
            } else {
                t.parse::<i64>()
                    .map(Some)
                    .map_err(|_| DomainError::token(t, "expected integer or null"))
            }
        })
        .collect()
}

/// Parses the breadth-first literal form, e.g. `[3,9,20,null,null,15,7]`.
///
/// After the root, tokens fill the left then right slot of every present
/// node in level order; `null` leaves a slot empty.
impl FromStr for BinaryTree {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let mut tree = BinaryTree::new();
        let mut tokens = parse_tokens(s)?.into_iter();

        let root_value = match tokens.next() {
            None => return Ok(tree),
            Some(None) if tokens.len() == 0 => return Ok(tree),
            Some(None) => {
                return Err(DomainError::token(
                    "null",
                    "root is null but more values follow",
                ))
            }
            Some(Some(value)) => value,
        };

        let root = tree.set_root(root_value)?;
        let mut pending = VecDeque::from([root]);

        while tokens.len() > 0 {
            let Some(parent) = pending.pop_front() else {
                // Trailing nulls are harmless, values are not.
                return match tokens.flatten().next() {
                    Some(value) => Err(DomainError::token(
                        value.to_string(),
                        "no free child slot left for value",
                    )),
                    None => Ok(tree),
                };
            };
            for side in [Side::Left, Side::Right] {
                match tokens.next() {
                    Some(Some(value)) => {
                        let child = tree.insert_child(parent, side, value)?;
                        pending.push_back(child);
                    }
                    Some(None) => {}
                    None => break,
                }
            }
        }

        Ok(tree)
    }
}

/// Writes the breadth-first literal form with trailing nulls trimmed.
impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = Vec::new();
        let mut queue: VecDeque<Option<Index>> = VecDeque::from([self.root]);

        if self.root.is_some() {
            while let Some(slot) = queue.pop_front() {
                match slot.and_then(|idx| self.node(idx)) {
                    Some(node) => {
                        tokens.push(node.value.to_string());
                        queue.push_back(node.left);
                        queue.push_back(node.right);
                    }
                    None => tokens.push("null".to_string()),
                }
            }
        }
        while tokens.last().is_some_and(|t| t == "null") {
            tokens.pop();
        }

        write!(f, "[{}]", tokens.iter().join(","))
    }
}
