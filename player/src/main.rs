use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use maze_core::{verify_route, Coordinate, Grid, SolverStatus, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED};
use maze_player::{generate_maze, load_moves, load_snapshot, play, render, save_moves, save_snapshot};

/// Maze generator and depth-first maze player
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Size and seed of a freshly generated maze
#[derive(clap::Args, Debug)]
struct MazeArgs {
    /// Grid height, walls included
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Grid width, walls included
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and save it as JSON
    Generate {
        #[command(flatten)]
        args: MazeArgs,

        /// Output file. Defaults to <seed>_maze.json
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also draw the maze
        #[arg(long)]
        print: bool,
    },

    /// Run the depth-first player through a maze
    Solve {
        #[command(flatten)]
        args: MazeArgs,

        /// Maze snapshot file (JSON); overrides --rows/--cols/--seed
        #[arg(long = "maze", value_name = "FILE")]
        maze_file: Option<PathBuf>,

        /// Draw every step instead of just the final frame
        #[arg(long)]
        animate: bool,

        /// Pause between animation frames, in milliseconds
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,

        /// Give up after this many steps. Defaults to 4 * rows * cols
        #[arg(long)]
        max_steps: Option<usize>,

        /// Save the moves that reach the player's final cell (JSON)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check that a moves file walks from origin to destination
    Verify {
        /// Maze snapshot file (JSON)
        maze_file: PathBuf,

        /// Moves file: JSON array of 0=north, 1=east, 2=south, 3=west
        moves_file: PathBuf,
    },
}

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    println!("🧭 Maze Player");
    println!("{}", "=".repeat(70));
    println!();

    let result = match cli.command {
        Command::Generate { args, output, print } => generate_command(&args, output.as_deref(), print),
        Command::Solve {
            args,
            maze_file,
            animate,
            delay_ms,
            max_steps,
            output,
        } => solve_command(&args, maze_file.as_deref(), animate, delay_ms, max_steps, output.as_deref()),
        Command::Verify { maze_file, moves_file } => verify_command(&maze_file, &moves_file),
    };

    if let Err(e) = result {
        eprintln!();
        eprintln!("❌ Error: {}", e);
        eprintln!("{}", "=".repeat(70));
        std::process::exit(1);
    }

    println!("{}", "=".repeat(70));
}

fn generate_command(args: &MazeArgs, output: Option<&Path>, print: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("📋 Generating maze");
    println!("  Size: {}x{}", args.rows, args.cols);
    println!("  Seed: {}", args.seed);
    println!();

    let start = Instant::now();
    let snapshot = generate_maze(args.rows, args.cols, args.seed)?;
    let grid = snapshot.to_grid()?;
    println!("  Generation time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
    println!();

    println!("✅ Maze generated successfully!");
    println!("  Origin: {}", snapshot.origin);
    println!("  Destination: {}", snapshot.destination);
    println!("  Open cells: {}", grid.open_cells().count());
    println!();

    if print {
        print!("{}", render(&grid, None));
        println!();
    }

    let default_filename = PathBuf::from(format!("{}_maze.json", args.seed));
    let file_to_save = output.unwrap_or(default_filename.as_path());
    save_snapshot(&snapshot, file_to_save)?;
    println!("💾 Maze saved to: {}", file_to_save.display());

    Ok(())
}

fn solve_command(
    args: &MazeArgs,
    maze_file: Option<&Path>,
    animate: bool,
    delay_ms: u64,
    max_steps: Option<usize>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match maze_file {
        Some(path) => {
            let snapshot = load_snapshot(path)?;
            println!("📦 Loaded {}x{} maze from {}", snapshot.rows, snapshot.cols, path.display());
            snapshot
        }
        None => generate_maze(args.rows, args.cols, args.seed)?,
    };
    let grid = snapshot.to_grid()?;
    let max_steps = max_steps.unwrap_or(4 * snapshot.rows * snapshot.cols);

    println!("📋 Solving {}x{} maze", snapshot.rows, snapshot.cols);
    println!("  From {} to {}", grid.origin(), grid.destination());
    println!();

    let start = Instant::now();
    let report = play(&grid, max_steps, |solver| {
        if animate {
            // Clear the screen and home the cursor
            print!("\x1b[2J\x1b[H{}", render(&grid, Some(solver)));
            println!("step {}", solver.steps());
            thread::sleep(Duration::from_millis(delay_ms));
        }
    });
    let duration = start.elapsed();

    if !animate {
        print!("{}", final_frame(&grid, &report.route));
    }
    println!();
    println!("  Solve time: {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!("  Steps: {}", report.steps);
    println!("  Cells visited: {}", report.visited);

    match report.status {
        SolverStatus::Solved => {
            println!("✅ Destination reached! Route length: {} moves", report.moves.len());
        }
        SolverStatus::NoSolution => {
            println!("🚫 No route from {} to {}", grid.origin(), grid.destination());
        }
        SolverStatus::Exploring => {
            println!("⏱️  Gave up after {} steps", max_steps);
        }
    }

    if let Some(path) = output {
        save_moves(&report.moves, path)?;
        println!("💾 Moves saved to: {}", path.display());
        println!("   Use 'verify <maze_file> {}' to check them", path.display());
    }

    Ok(())
}

/// The maze with the final route drawn on it
fn final_frame(grid: &Grid, route: &[Coordinate]) -> String {
    let mut frame: Vec<Vec<char>> = render(grid, None).lines().map(|l| l.chars().collect()).collect();
    for coord in route.iter().skip(1) {
        let (row, col) = (coord.row as usize, coord.col as usize);
        if *coord != grid.destination() {
            frame[row][col] = '*';
        }
    }
    frame.into_iter().map(|row| row.into_iter().collect::<String>() + "\n").collect()
}

fn verify_command(maze_file: &Path, moves_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("📋 Verifying moves");
    println!("  Maze file: {}", maze_file.display());
    println!("  Moves file: {}", moves_file.display());
    println!();

    let snapshot = load_snapshot(maze_file)?;
    let grid = snapshot.to_grid()?;
    let moves = load_moves(moves_file)?;

    println!("📦 Loaded {} moves", moves.len());
    println!("  First 20 moves: {:?}", &moves[..20.min(moves.len())]);
    println!();

    if verify_route(&grid, &moves) {
        println!("✅ The moves reach the destination!");
        Ok(())
    } else {
        Err("The moves do not reach the destination".into())
    }
}
