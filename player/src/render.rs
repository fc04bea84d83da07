//! Text frames for the terminal
//!
//! Legend: `#` wall, ` ` open, `o` origin, `X` destination, `.` visited,
//! `*` on the current path, `@` player.

use std::collections::HashSet;

use maze_core::{Coordinate, Grid, Solver};

/// Draw `grid`, overlaying the solver state if there is one
pub fn render(grid: &Grid, solver: Option<&Solver<'_>>) -> String {
    let (rows, cols) = grid.dimensions();
    let path: HashSet<Coordinate> = solver.map(|s| s.path().iter().copied().collect()).unwrap_or_default();

    let mut out = String::with_capacity(rows * (cols + 1));
    for coord in grid.coords() {
        out.push(cell_char(grid, solver, &path, coord));
        if coord.col as usize == cols - 1 {
            out.push('\n');
        }
    }
    out
}

fn cell_char(grid: &Grid, solver: Option<&Solver<'_>>, path: &HashSet<Coordinate>, coord: Coordinate) -> char {
    if let Some(solver) = solver {
        if coord == solver.current_position() {
            return '@';
        }
    }
    if coord == grid.destination() {
        return 'X';
    }
    if coord == grid.origin() {
        return 'o';
    }
    if grid.is_blocked(coord) {
        return '#';
    }
    match solver {
        Some(_) if path.contains(&coord) => '*',
        Some(solver) if solver.is_visited(coord) => '.',
        _ => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Grid {
        let mut grid = Grid::new_blocked(5, 5);
        for (row, col) in [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)] {
            grid.unblock(Coordinate::new(row, col));
        }
        grid.set_origin(Coordinate::new(1, 1));
        grid.set_destination(Coordinate::new(3, 3));
        grid
    }

    #[test]
    fn test_render_grid_only() {
        let frame = render(&tiny(), None);
        assert_eq!(frame, "#####\n#o###\n# ###\n#  X#\n#####\n");
    }

    #[test]
    fn test_render_with_solver() {
        let grid = tiny();
        let mut solver = Solver::new(&grid);
        solver.step();
        solver.step();
        solver.step();

        // Player went down twice then right; (2,1) and (3,1) are on the path
        let frame = render(&grid, Some(&solver));
        assert_eq!(frame, "#####\n#o###\n#*###\n#*@X#\n#####\n");
    }

    #[test]
    fn test_render_solved() {
        let grid = tiny();
        let mut solver = Solver::new(&grid);
        solver.run(20);

        let frame = render(&grid, Some(&solver));
        assert!(frame.contains('@'));
        assert!(!frame.contains('X'));
    }
}
