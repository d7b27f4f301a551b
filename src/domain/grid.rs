//! Land/water grids and 4-connected island counting.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Neighbor offsets in exploration order: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Land,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Water),
            '1' => Some(Cell::Land),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Water => '0',
            Cell::Land => '1',
        }
    }
}

/// Rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid, rejecting rows of unequal width.
    pub fn new(rows: Vec<Vec<Cell>>) -> DomainResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(DomainError::RaggedGrid {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a grid from `'0'`/`'1'` characters.
    pub fn from_chars(rows: &[Vec<char>]) -> DomainResult<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, chars)| {
                chars
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| {
                        Cell::from_char(cell).ok_or(DomainError::InvalidCell { cell, row, col })
                    })
                    .collect::<DomainResult<Vec<Cell>>>()
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Land)
    }

    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Land).count()
    }

    /// Neighbor of `(row, col)` in direction `dir`, if inside the grid.
    fn step(&self, (row, col): (usize, usize), dir: usize) -> Option<(usize, usize)> {
        let (dr, dc) = DIRECTIONS[dir];
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }
}

/// Parses rows separated by newlines, `;` or `]`.
///
/// Whitespace, commas, quotes and brackets inside a row are ignored, so both
/// `"110;011"` and `[["1","1","0"],["0","1","1"]]` are accepted.
impl FromStr for Grid {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let rows: Vec<Vec<char>> = s
            .split(&['\n', ';', ']'][..])
            .map(|row| {
                row.chars()
                    .filter(|c| !(c.is_whitespace() || matches!(c, ',' | '"' | '\'' | '[')))
                    .collect::<Vec<char>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_chars(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

/// Cells already attributed to an island, same shape as its grid.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    cols: usize,
    bits: Vec<bool>,
}

impl VisitedMask {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            bits: vec![false; grid.rows() * grid.cols()],
        }
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        let i = row.checked_mul(self.cols)?.checked_add(col)?;
        (i < self.bits.len()).then_some(i)
    }

    /// `false` for cells outside the grid.
    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.offset(row, col).is_some_and(|i| self.bits[i])
    }

    /// Marks a cell; returns `false` if it was already marked or lies outside the grid.
    pub fn mark(&mut self, row: usize, col: usize) -> bool {
        match self.offset(row, col) {
            Some(i) => !std::mem::replace(&mut self.bits[i], true),
            None => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Flood-fill strategy used to explore one island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IslandSearch {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl FromStr for IslandSearch {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(IslandSearch::DepthFirst),
            "breadth-first" | "bfs" => Ok(IslandSearch::BreadthFirst),
            other => Err(DomainError::token(
                other,
                "expected depth-first or breadth-first",
            )),
        }
    }
}

impl fmt::Display for IslandSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IslandSearch::DepthFirst => write!(f, "depth-first"),
            IslandSearch::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Number of maximal 4-connected groups of land cells.
pub fn count_islands(grid: &Grid) -> usize {
    count_islands_with(grid, IslandSearch::DepthFirst)
}

pub fn count_islands_with(grid: &Grid, search: IslandSearch) -> usize {
    island_sizes(grid, search).len()
}

/// Size of every island in discovery (row-major) order.
#[instrument(level = "debug", skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn island_sizes(grid: &Grid, search: IslandSearch) -> Vec<usize> {
    let mut visited = VisitedMask::for_grid(grid);
    let mut sizes = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_land(row, col) && visited.mark(row, col) {
                let size = match search {
                    IslandSearch::DepthFirst => explore_depth_first(grid, &mut visited, (row, col)),
                    IslandSearch::BreadthFirst => {
                        explore_breadth_first(grid, &mut visited, (row, col))
                    }
                };
                trace!(row, col, size, "island found");
                sizes.push(size);
            }
        }
    }

    debug!(islands = sizes.len(), "grid scanned");
    sizes
}

/// Depth-first flood fill from an already marked cell.
///
/// Each frame remembers the next direction to try, which reproduces the
/// visiting order of the recursive formulation without growing the call stack.
fn explore_depth_first(grid: &Grid, visited: &mut VisitedMask, start: (usize, usize)) -> usize {
    let mut stack = vec![(start, 0usize)];
    let mut size = 1;

    while let Some(frame) = stack.last_mut() {
        if frame.1 == DIRECTIONS.len() {
            stack.pop();
            continue;
        }
        let (cell, dir) = *frame;
        frame.1 += 1;

        if let Some((r, c)) = grid.step(cell, dir) {
            if grid.is_land(r, c) && visited.mark(r, c) {
                size += 1;
                stack.push(((r, c), 0));
            }
        }
    }
    size
}

/// Breadth-first flood fill from an already marked cell.
fn explore_breadth_first(grid: &Grid, visited: &mut VisitedMask, start: (usize, usize)) -> usize {
    let mut queue = VecDeque::from([start]);
    let mut size = 1;

    while let Some(cell) = queue.pop_front() {
        for dir in 0..DIRECTIONS.len() {
            if let Some((r, c)) = grid.step(cell, dir) {
                if grid.is_land(r, c) && visited.mark(r, c) {
                    size += 1;
                    queue.push_back((r, c));
                }
            }
        }
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid(rows: &[&str]) -> Grid {
        let chars: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Grid::from_chars(&chars).unwrap()
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&["0"], 0)]
    #[case(&["1"], 1)]
    #[case(&["1100", "1100", "0010", "0001"], 3)]
    #[case(&["111", "111"], 1)]
    #[case(&["101", "010", "101"], 5)]
    #[case(&["11110", "11010", "11000", "00000"], 1)]
    fn test_count_islands(#[case] rows: &[&str], #[case] expected: usize) {
        let g = grid(rows);
        assert_eq!(count_islands(&g), expected);
        assert_eq!(count_islands_with(&g, IslandSearch::BreadthFirst), expected);
    }

    #[test]
    fn test_count_is_idempotent() {
        let g = grid(&["1100", "1100", "0010", "0001"]);
        assert_eq!(count_islands(&g), count_islands(&g));
    }

    #[test]
    fn test_island_sizes_cover_all_land() {
        let g = grid(&["1101", "1001", "0111"]);
        let sizes = island_sizes(&g, IslandSearch::DepthFirst);
        assert_eq!(sizes, vec![3, 5]);
        assert_eq!(sizes.iter().sum::<usize>(), g.land_count());
    }

    #[test]
    fn test_deep_snake_does_not_overflow() {
        let rows: Vec<String> = (0..2000)
            .map(|r| match r % 4 {
                1 => format!("{}1", "0".repeat(49)),
                3 => format!("1{}", "0".repeat(49)),
                _ => "1".repeat(50),
            })
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let g = grid(&refs);
        assert_eq!(count_islands(&g), 1);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        assert_eq!(
            "11;1".parse::<Grid>(),
            Err(DomainError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_invalid_cell_rejected() {
        assert_eq!(
            "10;1x".parse::<Grid>(),
            Err(DomainError::InvalidCell {
                cell: 'x',
                row: 1,
                col: 1
            })
        );
    }

    #[rstest]
    #[case("110\n011")]
    #[case("110;011")]
    #[case(r#"[["1","1","0"],["0","1","1"]]"#)]
    fn test_parse_grid_formats(#[case] literal: &str) {
        let g: Grid = literal.parse().unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(g.to_string(), "110\n011");
    }

    #[test]
    fn test_visited_mask_marks_once() {
        let g = grid(&["11"]);
        let mut mask = VisitedMask::for_grid(&g);
        assert!(mask.mark(0, 1));
        assert!(!mask.mark(0, 1));
        assert!(mask.is_visited(0, 1));
        assert_eq!(mask.visited_count(), 1);
    }

    #[test]
    fn test_visited_mask_ignores_cells_outside_grid() {
        let g = grid(&["11", "01"]);
        let mut mask = VisitedMask::for_grid(&g);
        assert!(!mask.mark(0, 2));
        assert!(!mask.mark(2, 0));
        assert!(!mask.is_visited(0, 2));
        assert!(!mask.is_visited(usize::MAX, 0));
        assert_eq!(mask.visited_count(), 0);
    }

    #[rstest]
    #[case("dfs", IslandSearch::DepthFirst)]
    #[case("Breadth-First", IslandSearch::BreadthFirst)]
    fn test_parse_island_search(#[case] input: &str, #[case] expected: IslandSearch) {
        assert_eq!(input.parse::<IslandSearch>().unwrap(), expected);
    }
}
