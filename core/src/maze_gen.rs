//! Maze generation using the Recursive Backtracker algorithm
//!
//! The grid starts fully blocked. Maze cells live on odd coordinates and the
//! cells between them are walls, so every step of the walk jumps two cells
//! and knocks down the wall in the middle.
//!
//! Algorithm: Recursive Backtracker (DFS with backtracking)
//! 1. Carve the origin (1, 1) and push it on the stack
//! 2. While the stack is not empty:
//!    - Collect the uncarved cells two steps away from the top of the stack
//!    - If there are any:
//!      * Choose one at random
//!      * Unblock the wall between them
//!      * Carve the chosen cell and push it
//!    - Else: backtrack (pop)
//!
//! The carved cells form a spanning tree, so the result is a perfect maze:
//! exactly one simple path between any two open cells.

use std::collections::HashSet;

use crate::coord::Coordinate;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::rng::{ChoiceSource, SimpleLCG};
use crate::{MAX_DIMENSION, MIN_DIMENSION};

/// Jumps to the next maze cell: down, up, right, left
const CARVE_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Generate a maze of `rows x cols` cells using `rng` to pick directions
///
/// The origin is always (1, 1). The destination is `(rows - 2, cols - 2)`
/// after rounding even dimensions down to the next odd number, so it always
/// lands on a maze cell rather than a wall.
///
/// # Errors
/// [`MazeError::InvalidDimensions`] if either dimension is outside
/// `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn generate<R: ChoiceSource>(rows: usize, cols: usize, mut rng: R) -> Result<Grid> {
    let allowed = MIN_DIMENSION..=MAX_DIMENSION;
    if !allowed.contains(&rows) || !allowed.contains(&cols) {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }

    let mut grid = Grid::new_blocked(rows, cols);

    let odd_rows = if rows % 2 == 0 { rows - 1 } else { rows };
    let odd_cols = if cols % 2 == 0 { cols - 1 } else { cols };
    let origin = Coordinate::new(1, 1);
    let destination = Coordinate::new(odd_rows as i32 - 2, odd_cols as i32 - 2);
    grid.set_origin(origin);
    grid.set_destination(destination);

    if origin == destination {
        tracing::warn!(rows, cols, "maze too small to separate origin and destination");
    }

    let carved = carve(&mut grid, origin, &mut rng);
    tracing::debug!(rows, cols, carved, open = grid.open_cells().count(), "maze generated");

    Ok(grid)
}

/// Generate a maze with a [`SimpleLCG`] seeded from `seed`
///
/// Same seed and size always produce the same maze.
pub fn generate_from_seed(rows: usize, cols: usize, seed: u32) -> Result<Grid> {
    tracing::debug!(seed, "seeding maze generator");
    generate(rows, cols, SimpleLCG::new(seed))
}

/// Carve a spanning tree starting at `start`; returns the number of maze
/// cells carved
///
/// Iterative with an explicit stack so large grids cannot overflow the call
/// stack. Candidates are recomputed from the top of the stack every round,
/// which is what the recursive form does when a child call returns.
fn carve<R: ChoiceSource>(grid: &mut Grid, start: Coordinate, rng: &mut R) -> usize {
    let mut visited = HashSet::new();
    let mut stack = Vec::new();

    visited.insert(start);
    grid.unblock(start);
    stack.push(start);

    while let Some(&current) = stack.last() {
        let candidates = uncarved_steps(grid, &visited, current);

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (d_row, d_col) = candidates[rng.choice_index(candidates.len())];
        let next = current.translate(d_row, d_col);
        let wall = current.translate(d_row / 2, d_col / 2);

        grid.unblock(wall);
        visited.insert(next);
        grid.unblock(next);
        stack.push(next);
    }

    visited.len()
}

/// Steps from `cell` that stay on the grid and reach an uncarved cell
fn uncarved_steps(
    grid: &Grid,
    visited: &HashSet<Coordinate>,
    cell: Coordinate,
) -> Vec<(i32, i32)> {
    CARVE_STEPS
        .iter()
        .copied()
        .filter(|&(d_row, d_col)| {
            let next = grid.translate_coordinate(cell, d_row, d_col);
            next != cell && !visited.contains(&next)
        })
        .collect()
}
