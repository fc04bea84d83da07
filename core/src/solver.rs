//! Step-at-a-time depth-first maze player
//!
//! A [`Solver`] simulates a player walking from the origin toward the
//! destination. Each call to [`Solver::step`] moves the player by at most one
//! cell, so a caller can render every frame of the search.
//!
//! Neighbors are tried in a fixed order (down, right, up, left), biased
//! toward the destination in the bottom-right. The search is deterministic;
//! only maze generation is random.
//!
//! Bookkeeping:
//! - `visited` holds every cell the player has stood on and stepped from,
//!   excluding the origin.
//! - `path` is the backtracking stack. A forward move pushes the cell being
//!   left (unless it is the origin) and then the cell entered, so each
//!   cell sits on the stack twice. Backtracking pops one entry per step,
//!   which means a dead end costs one extra step while the player "stands"
//!   on the popped copy of its own cell.
//! - The origin is never on the stack and is never re-entered as a forward
//!   move, even though it is not in `visited`: the neighbor scan skips it on
//!   top of the usual open/unvisited checks. It is the implicit root instead.
//!   When the stack runs dry the player walks back to it, and a dead end at
//!   the origin with an empty stack means the destination is unreachable.

use indexmap::IndexSet;

use crate::coord::Coordinate;
use crate::grid::Grid;

/// Single-cell moves in priority order: down, right, up, left
const STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Where the search stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverStatus {
    /// Still searching
    Exploring,
    /// The player is on the destination
    Solved,
    /// Every reachable cell has been tried; the destination is unreachable
    NoSolution,
}

/// Incremental depth-first search over a finished [`Grid`]
///
/// The grid is only read. Every solver owns its own visited set and path.
#[derive(Clone, Debug)]
pub struct Solver<'a> {
    grid: &'a Grid,
    current: Coordinate,
    visited: IndexSet<Coordinate>,
    path: Vec<Coordinate>,
    status: SolverStatus,
    steps: usize,
}

impl<'a> Solver<'a> {
    /// Place the player on the grid's origin
    pub fn new(grid: &'a Grid) -> Self {
        let current = grid.origin();
        let status = if current == grid.destination() {
            SolverStatus::Solved
        } else {
            SolverStatus::Exploring
        };

        Self {
            grid,
            current,
            visited: IndexSet::new(),
            path: Vec::new(),
            status,
            steps: 0,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The cell the player is standing on
    pub fn current_position(&self) -> Coordinate {
        self.current
    }

    /// Cells visited so far in discovery order, each once, origin excluded
    pub fn visited(&self) -> impl ExactSizeIterator<Item = Coordinate> + '_ {
        self.visited.iter().copied()
    }

    pub fn is_visited(&self, coord: Coordinate) -> bool {
        self.visited.contains(&coord)
    }

    /// The backtracking stack, oldest first
    ///
    /// Every entry other than the current cell is also in [`Solver::visited`].
    /// The current cell itself may be missing.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn status(&self) -> SolverStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == SolverStatus::Solved
    }

    /// Solved or known to have no solution
    pub fn is_finished(&self) -> bool {
        self.status != SolverStatus::Exploring
    }

    /// Number of steps that moved or backtracked the player
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance the simulation by one step
    ///
    /// Does nothing once the search is finished.
    pub fn step(&mut self) -> SolverStatus {
        if self.status != SolverStatus::Exploring {
            return self.status;
        }

        let origin = self.grid.origin();
        if self.current != origin {
            self.visited.insert(self.current);
        }

        if let Some(next) = self.next_unvisited() {
            if self.current != origin {
                self.path.push(self.current);
            }
            self.path.push(next);
            self.current = next;
        } else if let Some(previous) = self.path.pop() {
            self.current = previous;
        } else if self.current != origin {
            self.current = origin;
        } else {
            tracing::debug!(steps = self.steps, visited = self.visited.len(), "no path to destination");
            self.status = SolverStatus::NoSolution;
            return self.status;
        }

        self.steps += 1;
        if self.current == self.grid.destination() {
            tracing::debug!(steps = self.steps, visited = self.visited.len(), "destination reached");
            self.status = SolverStatus::Solved;
        }
        self.status
    }

    /// Step until the search finishes or `max_steps` steps have been taken
    pub fn run(&mut self, max_steps: usize) -> SolverStatus {
        for _ in 0..max_steps {
            if self.step() != SolverStatus::Exploring {
                break;
            }
        }
        self.status
    }

    /// The walk from the origin to the current cell along the path
    ///
    /// Unlike [`Solver::path`] this starts at the origin, ends at the current
    /// cell and has no repeated cells, so consecutive entries are always
    /// neighbors.
    pub fn route(&self) -> Vec<Coordinate> {
        let mut route = vec![self.grid.origin()];
        for &cell in self.path.iter().chain(std::iter::once(&self.current)) {
            if route.last() != Some(&cell) {
                route.push(cell);
            }
        }
        route
    }

    /// First open, unvisited neighbor in priority order
    fn next_unvisited(&self) -> Option<Coordinate> {
        let origin = self.grid.origin();
        STEPS
            .iter()
            .map(|&(d_row, d_col)| self.grid.translate_coordinate(self.current, d_row, d_col))
            .find(|&next| {
                next != self.current
                    && next != origin
                    && !self.grid.is_blocked(next)
                    && !self.visited.contains(&next)
            })
    }
}
