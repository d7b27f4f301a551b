//! Domain layer: the arena-backed structures and the algorithms over them
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod grid;
pub mod list;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use grid::{
    count_islands, count_islands_with, island_sizes, Cell, Grid, IslandSearch, VisitedMask,
};
pub use list::{add_two_digit_chains, DigitList, ListNode};
pub use tree::{level_order, BinaryTree, Side, TreeNode};

/// Expands `~`, `$VAR` and `${VAR}` in a path-like string, leaving it untouched on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
