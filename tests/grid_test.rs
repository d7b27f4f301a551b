//! Tests for grid parsing and island counting

use rstest::rstest;

use nodewalk::domain::{
    count_islands, count_islands_with, island_sizes, DomainError, Grid, IslandSearch,
};

fn grid_from(rows: &[&[&str]]) -> Grid {
    let chars: Vec<Vec<char>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.chars().next().unwrap()).collect())
        .collect();
    Grid::from_chars(&chars).unwrap()
}

#[test]
fn given_empty_grid_when_counting_then_zero() {
    assert_eq!(count_islands(&grid_from(&[])), 0);
}

#[test]
fn given_single_cells_when_counting_then_water_zero_land_one() {
    assert_eq!(count_islands(&grid_from(&[&["0"]])), 0);
    assert_eq!(count_islands(&grid_from(&[&["1"]])), 1);
}

#[test]
fn given_two_blocks_and_diagonal_pair_when_counting_then_three() {
    // Arrange
    let grid = grid_from(&[
        &["1", "1", "0", "0"],
        &["1", "1", "0", "0"],
        &["0", "0", "1", "0"],
        &["0", "0", "0", "1"],
    ]);

    // Act / Assert: diagonal neighbours do not connect
    assert_eq!(count_islands(&grid), 3);
    assert_eq!(count_islands(&grid), 3, "counting must be repeatable");
}

#[test]
fn given_all_land_when_counting_then_one() {
    let grid: Grid = "1111;1111;1111".parse().unwrap();
    assert_eq!(count_islands(&grid), 1);
}

#[rstest]
#[case("10101;01010;10101;01010")]
#[case("11100;10001;10111;00000;11011")]
#[case("0110;1001;1001;0110")]
fn given_grid_when_counting_then_strategies_agree(#[case] literal: &str) {
    let grid: Grid = literal.parse().unwrap();

    let dfs = island_sizes(&grid, IslandSearch::DepthFirst);
    let bfs = island_sizes(&grid, IslandSearch::BreadthFirst);

    assert_eq!(dfs, bfs);
    assert_eq!(dfs.iter().sum::<usize>(), grid.land_count());
    assert_eq!(count_islands_with(&grid, IslandSearch::BreadthFirst), dfs.len());
}

#[test]
fn given_large_solid_grid_when_counting_then_single_island() {
    let literal = vec!["1".repeat(300); 300].join("\n");
    let grid: Grid = literal.parse().unwrap();
    assert_eq!(count_islands(&grid), 1);
}

#[test]
fn given_ring_with_open_corners_when_counting_then_four_arcs() {
    let grid: Grid = "0110;1001;1001;0110".parse().unwrap();
    // Corners touch only diagonally
    assert_eq!(island_sizes(&grid, IslandSearch::DepthFirst), vec![2, 2, 2, 2]);
}

#[test]
fn given_bad_cell_when_parsing_then_invalid_cell() {
    let result = "012".parse::<Grid>();
    assert_eq!(
        result,
        Err(DomainError::InvalidCell {
            cell: '2',
            row: 0,
            col: 2
        })
    );
}
