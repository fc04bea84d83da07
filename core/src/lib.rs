//! Shared types and logic for the grid maze and its DFS player
//!
//! This crate provides the coordinate and grid model, the seeded
//! recursive-backtracker generator, the step-at-a-time depth-first
//! solver, and a move-list verifier. The `maze-player` crate drives
//! all of it from the command line.

pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod maze_gen;
pub mod rng;
pub mod solver;

// Re-export commonly used types for convenience
pub use coord::Coordinate;
pub use direction::{moves_from_route, verify_route, Direction};
pub use error::{MazeError, Result};
pub use grid::Grid;
pub use maze_gen::{generate, generate_from_seed};
pub use rng::{ChoiceSource, SimpleLCG};
pub use solver::{Solver, SolverStatus};

/// Default grid height (rows, including walls)
pub const DEFAULT_ROWS: usize = 21;

/// Default grid width (columns, including walls)
pub const DEFAULT_COLS: usize = 21;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u32 = 2918957128;

/// Smallest row or column count that still holds the origin cell (1, 1)
pub const MIN_DIMENSION: usize = 3;

/// Largest row or column count whose cells all fit an `i32` coordinate
pub const MAX_DIMENSION: usize = i32::MAX as usize;
