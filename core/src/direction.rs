//! Cardinal moves and move-list verification
//!
//! Moves are encoded as bytes so a route can be stored or sent as a plain
//! array: 0 = north, 1 = east, 2 = south, 3 = west.

use crate::coord::Coordinate;
use crate::error::MazeError;
use crate::grid::Grid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Delta lookup tables indexed by direction: [NORTH, EAST, SOUTH, WEST]
const ROW_DELTAS: [i32; 4] = [-1, 0, 1, 0];
const COL_DELTAS: [i32; 4] = [0, 1, 0, -1];

/// One of the four single-cell moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// `(d_row, d_col)` for this move
    pub const fn delta(self) -> (i32, i32) {
        let i = self as usize;
        (ROW_DELTAS[i], COL_DELTAS[i])
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The move that takes `from` to `to`, if they are neighbors
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| {
            let (d_row, d_col) = d.delta();
            from.checked_translate(d_row, d_col) == Some(to)
        })
    }
}

impl TryFrom<u8> for Direction {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            other => Err(MazeError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}

/// Moves that walk `route` cell by cell
///
/// Consecutive cells that are not neighbors are skipped.
pub fn moves_from_route(route: &[Coordinate]) -> Vec<Direction> {
    route
        .windows(2)
        .filter_map(|pair| Direction::between(pair[0], pair[1]))
        .collect()
}

/// Replay `moves` from the origin and report whether they reach the
/// destination
///
/// - A move off the valid region or onto a blocked cell fails the route
/// - Processing stops as soon as the destination is reached; later moves
///   are ignored
/// - Running out of moves anywhere else fails the route
pub fn verify_route(grid: &Grid, moves: &[Direction]) -> bool {
    let mut position = grid.origin();

    if grid.is_blocked(position) {
        return false;
    }
    if position == grid.destination() {
        return true;
    }

    for (i, &direction) in moves.iter().enumerate() {
        let (d_row, d_col) = direction.delta();
        let next = grid.translate_coordinate(position, d_row, d_col);

        if next == position || grid.is_blocked(next) {
            tracing::debug!(move_index = i, %position, ?direction, "route hits a wall");
            return false;
        }
        position = next;

        if position == grid.destination() {
            return true;
        }
    }

    false
}
