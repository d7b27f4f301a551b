//! Arena-backed binary trees, digit chains and land/water grids, with the
//! classic traversals over them: level-order listing, carry-propagating
//! digit addition and 4-connected island counting.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    add_two_digit_chains, count_islands, level_order, BinaryTree, DigitList, DomainError, Grid,
};
