//! Rectangular grid with blocked cells, an origin and a destination
//!
//! The grid only stores which cells are blocked. Everything else (walls
//! between maze cells, player position, visited marks) is layered on top
//! by the generator and the solver.
//!
//! Valid coordinates satisfy `0 <= row < rows - 1` and `0 <= col < cols - 1`.
//! The last row and column are deliberately outside the valid region;
//! destination placement in [`crate::maze_gen`] relies on that boundary.
//!
//! Coordinates are `i32`, so only the first [`crate::MAX_DIMENSION`] rows and
//! columns are addressable. Larger sizes saturate at `i32::MAX`.

use std::collections::HashSet;

use crate::coord::Coordinate;
use crate::error::{MazeError, Result};

/// Binary grid value for a wall
pub const WALL: u8 = 0;

/// Binary grid value for an open cell
pub const OPEN: u8 = 1;

/// Row or column index as a coordinate component, saturating at `i32::MAX`
fn component(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// A fixed-size maze map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    origin: Coordinate,
    destination: Coordinate,
    blocked: HashSet<Coordinate>,
}

impl Grid {
    /// Create an open grid (no blocked cells)
    ///
    /// The origin is the top-left cell and the destination the opposite
    /// corner.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            origin: Coordinate::new(0, 0),
            destination: Coordinate::new(component(rows) - 1, component(cols) - 1),
            blocked: HashSet::new(),
        }
    }

    /// Create a grid with every cell in the rectangle blocked
    pub fn new_blocked(rows: usize, cols: usize) -> Self {
        let mut grid = Self::new(rows, cols);
        grid.blocked = grid.coords().collect();
        grid
    }

    /// Rebuild a grid from its binary form (see [`Grid::to_binary_grid`])
    ///
    /// Every row must have the same non-zero length. Any non-zero value is
    /// treated as open.
    pub fn from_binary_grid(
        data: &[Vec<u8>],
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Self> {
        let rows = data.len();
        let cols = data.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MazeError::MalformedGrid("grid has no cells".into()));
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MazeError::MalformedGrid(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        let mut grid = Self::new(rows, cols);
        grid.origin = origin;
        grid.destination = destination;
        for (r, row) in data.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == WALL {
                    grid.blocked.insert(Coordinate::new(component(r), component(c)));
                }
            }
        }
        Ok(grid)
    }

    /// Grid size as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Overwrite the origin. Block state is not checked.
    pub fn set_origin(&mut self, coord: Coordinate) {
        self.origin = coord;
    }

    /// Overwrite the destination. Block state is not checked.
    pub fn set_destination(&mut self, coord: Coordinate) {
        self.destination = coord;
    }

    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.blocked.contains(&coord)
    }

    /// Block a cell; no-op if it is already blocked
    pub fn block(&mut self, coord: Coordinate) {
        self.blocked.insert(coord);
    }

    /// Unblock a cell; no-op if it is already open
    pub fn unblock(&mut self, coord: Coordinate) {
        self.blocked.remove(&coord);
    }

    /// Flip a cell between blocked and open
    pub fn toggle_block(&mut self, coord: Coordinate) {
        if !self.blocked.remove(&coord) {
            self.blocked.insert(coord);
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Whether `coord` lies inside the usable region of the grid
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        match (usize::try_from(coord.row), usize::try_from(coord.col)) {
            (Ok(row), Ok(col)) => row < self.rows.saturating_sub(1) && col < self.cols.saturating_sub(1),
            _ => false,
        }
    }

    /// Translate `coord` if the result is valid, otherwise return `coord`
    ///
    /// Callers detect an edge by comparing the result with the input. A
    /// translation that would overflow `i32` is clamped the same way.
    pub fn translate_coordinate(&self, coord: Coordinate, d_row: i32, d_col: i32) -> Coordinate {
        match coord.checked_translate(d_row, d_col) {
            Some(moved) if self.is_valid_coordinate(moved) => moved,
            _ => coord,
        }
    }

    /// Every coordinate of the `rows x cols` rectangle in row-major order
    ///
    /// Each call starts a fresh iteration.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coordinate::new(component(r), component(c))))
    }

    /// Every open coordinate in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coords().filter(move |&c| !self.is_blocked(c))
    }

    /// Convert to a binary grid where [`WALL`] = blocked and [`OPEN`] = open
    pub fn to_binary_grid(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        if self.is_blocked(Coordinate::new(component(r), component(c))) {
                            WALL
                        } else {
                            OPEN
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Coordinate;
    type IntoIter = Box<dyn Iterator<Item = Coordinate> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_defaults() {
        let grid = Grid::new(10, 12);

        assert_eq!(grid.dimensions(), (10, 12));
        assert_eq!(grid.origin(), Coordinate::new(0, 0));
        assert_eq!(grid.destination(), Coordinate::new(9, 11));
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn test_iteration_covers_every_cell_once() {
        for (rows, cols) in [(1, 1), (3, 7), (10, 10), (13, 4)] {
            let grid = Grid::new(rows, cols);
            let all: Vec<Coordinate> = grid.coords().collect();
            let unique: HashSet<Coordinate> = all.iter().copied().collect();

            assert_eq!(all.len(), rows * cols);
            assert_eq!(unique.len(), rows * cols);
            assert_eq!(all[0], Coordinate::new(0, 0));
        }
    }

    #[test]
    fn test_iteration_is_row_major() {
        let grid = Grid::new(2, 3);
        let all: Vec<(i32, i32)> = grid.coords().map(Into::into).collect();

        assert_eq!(all, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let grid = Grid::new(4, 5);
        let first: Vec<Coordinate> = (&grid).into_iter().collect();
        let second: Vec<Coordinate> = (&grid).into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(first.last(), Some(&Coordinate::new(3, 4)));
    }

    #[test]
    fn test_empty_grid_iterates_nothing() {
        assert_eq!(Grid::new(0, 5).coords().count(), 0);
        assert_eq!(Grid::new(5, 0).coords().count(), 0);
    }

    #[test]
    fn test_block_is_idempotent() {
        let c = Coordinate::new(2, 3);
        let mut once = Grid::new(5, 5);
        once.block(c);
        let mut twice = once.clone();
        twice.block(c);

        assert_eq!(once, twice);
        assert!(twice.is_blocked(c));
    }

    #[test]
    fn test_block_then_unblock_restores() {
        let c = Coordinate::new(2, 3);
        let before = Grid::new(5, 5);
        let mut grid = before.clone();
        grid.block(c);
        grid.unblock(c);
        assert_eq!(grid, before);

        // Unblocking an open cell is a no-op
        grid.unblock(c);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_block() {
        let c = Coordinate::new(1, 1);
        let mut grid = Grid::new(5, 5);

        grid.toggle_block(c);
        assert!(grid.is_blocked(c));
        grid.toggle_block(c);
        assert!(!grid.is_blocked(c));
    }

    #[test]
    fn test_valid_region_excludes_last_row_and_column() {
        let grid = Grid::new(10, 10);

        assert!(grid.is_valid_coordinate(Coordinate::new(0, 0)));
        assert!(grid.is_valid_coordinate(Coordinate::new(8, 8)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(9, 0)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(0, 9)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(-1, 0)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(0, -1)));
    }

    #[test]
    fn test_tiny_grids_have_no_valid_cells() {
        assert!(!Grid::new(0, 0).is_valid_coordinate(Coordinate::new(0, 0)));
        assert!(!Grid::new(1, 1).is_valid_coordinate(Coordinate::new(0, 0)));
        assert!(Grid::new(2, 2).is_valid_coordinate(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_translate_clamps_at_edges() {
        let grid = Grid::new(10, 10);
        let corner = Coordinate::new(0, 0);

        assert_eq!(grid.translate_coordinate(corner, -1, 0), corner);
        assert_eq!(grid.translate_coordinate(corner, 0, -2), corner);
        assert_eq!(grid.translate_coordinate(corner, 1, 0), Coordinate::new(1, 0));

        let edge = Coordinate::new(8, 8);
        assert_eq!(grid.translate_coordinate(edge, 1, 0), edge);
        assert_eq!(grid.translate_coordinate(edge, -2, 0), Coordinate::new(6, 8));
    }

    #[test]
    fn test_translate_clamps_at_i32_limits() {
        let grid = Grid::new(10, 10);

        for extreme in [
            Coordinate::new(i32::MAX, 0),
            Coordinate::new(0, i32::MAX),
            Coordinate::new(i32::MIN, 0),
            Coordinate::new(0, i32::MIN),
        ] {
            for (d_row, d_col) in [(1, 0), (0, 1), (-1, 0), (0, -1), (2, 0), (0, -2)] {
                assert_eq!(grid.translate_coordinate(extreme, d_row, d_col), extreme);
            }
        }
    }

    #[test]
    fn test_oversized_dimensions_saturate() {
        let huge = i32::MAX as usize + 10;
        let grid = Grid::new(huge, 3);

        assert_eq!(grid.destination(), Coordinate::new(i32::MAX - 1, 2));
        assert!(grid.is_valid_coordinate(Coordinate::new(i32::MAX, 1)));
        assert!(!grid.is_valid_coordinate(Coordinate::new(i32::MAX, 2)));
    }

    #[test]
    fn test_new_blocked_and_open_cells() {
        let mut grid = Grid::new_blocked(4, 6);
        assert_eq!(grid.blocked_count(), 24);
        assert_eq!(grid.open_cells().count(), 0);

        grid.unblock(Coordinate::new(1, 2));
        let open: Vec<Coordinate> = grid.open_cells().collect();
        assert_eq!(open, vec![Coordinate::new(1, 2)]);
    }

    #[test]
    fn test_binary_grid() {
        let mut grid = Grid::new_blocked(3, 4);
        grid.unblock(Coordinate::new(1, 1));
        grid.unblock(Coordinate::new(1, 2));

        let binary = grid.to_binary_grid();
        assert_eq!(binary, vec![vec![0, 0, 0, 0], vec![0, 1, 1, 0], vec![0, 0, 0, 0]]);

        let rebuilt = Grid::from_binary_grid(&binary, grid.origin(), grid.destination()).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_from_binary_grid_rejects_bad_shapes() {
        let origin = Coordinate::new(1, 1);

        assert!(matches!(
            Grid::from_binary_grid(&[], origin, origin),
            Err(MazeError::MalformedGrid(_))
        ));
        assert!(matches!(
            Grid::from_binary_grid(&[vec![1, 1], vec![1]], origin, origin),
            Err(MazeError::MalformedGrid(_))
        ));
    }
}
