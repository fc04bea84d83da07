use std::fs;
use std::path::Path;

use maze_core::{generate_from_seed, moves_from_route, Coordinate, Direction, Grid, Solver, SolverStatus};
use serde::{Deserialize, Serialize};

pub mod render;

pub use render::render;

/// Largest moves file accepted by [`load_moves`], in bytes
pub const MAX_MOVES_FILE_BYTES: u64 = 10_000_000;

/// Largest move list accepted by [`load_moves`]
pub const MAX_MOVES: usize = 100_000;

/// A generated maze in a form that can be saved and reloaded
///
/// The grid is stored as rows of bytes (0=wall, 1=open), the same layout
/// as [`Grid::to_binary_grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub rows: usize,
    pub cols: usize,

    /// Seed the maze was generated from, if it came from the generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    pub origin: Coordinate,
    pub destination: Coordinate,

    /// The binary grid data (0=wall, 1=open)
    pub grid_data: Vec<Vec<u8>>,
}

impl MazeSnapshot {
    pub fn from_grid(grid: &Grid, seed: Option<u32>) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            rows,
            cols,
            seed,
            origin: grid.origin(),
            destination: grid.destination(),
            grid_data: grid.to_binary_grid(),
        }
    }

    /// Rebuild the grid, checking the stored size against the data
    pub fn to_grid(&self) -> Result<Grid, Box<dyn std::error::Error>> {
        let grid = Grid::from_binary_grid(&self.grid_data, self.origin, self.destination)?;
        if grid.dimensions() != (self.rows, self.cols) {
            let (rows, cols) = grid.dimensions();
            return Err(format!(
                "Snapshot says {}x{} but grid data is {}x{}",
                self.rows, self.cols, rows, cols
            )
            .into());
        }
        Ok(grid)
    }
}

/// Outcome of driving a [`Solver`] with [`play`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub status: SolverStatus,

    /// Steps that moved or backtracked the player
    pub steps: usize,

    /// Distinct cells visited (origin excluded)
    pub visited: usize,

    /// Length of the backtracking stack when play stopped
    pub path_len: usize,

    /// Walk from the origin to where the player stopped
    pub route: Vec<Coordinate>,

    /// `route` as moves, replayable with [`maze_core::verify_route`]
    pub moves: Vec<Direction>,
}

/// Generate a maze from a seed.
///
/// # Example
/// ```
/// let snapshot = maze_player::generate_maze(11, 11, 42).unwrap();
/// assert_eq!(snapshot.origin, maze_core::Coordinate::new(1, 1));
/// assert_eq!(snapshot.destination, maze_core::Coordinate::new(9, 9));
/// ```
pub fn generate_maze(rows: usize, cols: usize, seed: u32) -> Result<MazeSnapshot, Box<dyn std::error::Error>> {
    tracing::info!("Generating {}x{} maze for seed {}", rows, cols, seed);

    let grid = generate_from_seed(rows, cols, seed)?;

    tracing::info!(
        "Maze generated: {} open cells, destination {}",
        grid.open_cells().count(),
        grid.destination()
    );
    Ok(MazeSnapshot::from_grid(&grid, Some(seed)))
}

/// Step a solver over `grid` until it finishes or `max_steps` runs out.
///
/// `on_frame` sees the solver once before the first step and again after
/// every step, which is enough to animate the search.
pub fn play<F>(grid: &Grid, max_steps: usize, mut on_frame: F) -> SolveReport
where
    F: FnMut(&Solver<'_>),
{
    let mut solver = Solver::new(grid);
    on_frame(&solver);

    while !solver.is_finished() && solver.steps() < max_steps {
        solver.step();
        on_frame(&solver);
    }

    match solver.status() {
        SolverStatus::Solved => tracing::info!("Solved in {} steps", solver.steps()),
        SolverStatus::NoSolution => tracing::info!("No solution after {} steps", solver.steps()),
        SolverStatus::Exploring => tracing::info!("Stopped after {} steps without finishing", solver.steps()),
    }

    let route = solver.route();
    let report = SolveReport {
        status: solver.status(),
        steps: solver.steps(),
        visited: solver.visited().len(),
        path_len: solver.path().len(),
        moves: moves_from_route(&route),
        route,
    };
    report
}

pub fn save_snapshot(snapshot: &MazeSnapshot, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<MazeSnapshot, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let snapshot: MazeSnapshot = serde_json::from_str(&json)?;
    Ok(snapshot)
}

pub fn save_moves(moves: &[Direction], path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(moves)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a JSON array of move bytes (0=north, 1=east, 2=south, 3=west)
pub fn load_moves(path: impl AsRef<Path>) -> Result<Vec<Direction>, Box<dyn std::error::Error>> {
    let path = path.as_ref();

    // Refuse to pull huge files into memory
    let size = fs::metadata(path)?.len();
    if size > MAX_MOVES_FILE_BYTES {
        return Err(format!("Moves file is too large ({} bytes, max {})", size, MAX_MOVES_FILE_BYTES).into());
    }

    let json = fs::read_to_string(path)?;
    let moves: Vec<Direction> = serde_json::from_str(&json)?;

    if moves.is_empty() {
        return Err("Moves array is empty".into());
    }
    if moves.len() > MAX_MOVES {
        return Err(format!("Too many moves: {} (max {})", moves.len(), MAX_MOVES).into());
    }

    Ok(moves)
}
