//! Line scanning around a single cell.
//!
//! A scan looks at a fixed window of `2 * reach + 1` cells centered on the
//! target along one orientation. With `reach = run - 1`, every run of length
//! `run` that contains the target lies entirely inside the window, wherever
//! the target sits within it.

use super::board::Board;
use super::player::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

/// All four orientations, in the order they are scanned.
pub const ORIENTATIONS: [Orientation; 4] = [
    Orientation::Horizontal,
    Orientation::Vertical,
    Orientation::DiagonalDown,
    Orientation::DiagonalUp,
];

impl Orientation {
    /// `(row, col)` step between consecutive cells of the line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }
}

/// Coordinates of the window centered on `(row, col)`, ordered along the
/// line. Coordinates may fall outside the board.
pub fn window(
    orientation: Orientation,
    row: usize,
    col: usize,
    reach: usize,
) -> impl Iterator<Item = (isize, isize)> {
    let (dr, dc) = orientation.step();
    let (row, col, reach) = (row as isize, col as isize, reach as isize);
    (-reach..=reach).map(move |k| (row + k * dr, col + k * dc))
}

/// Longest run of consecutive cells owned by `seat` along `coords`.
/// Empty, foreign and off-board cells break a run.
pub fn max_run<I>(board: &Board, coords: I, seat: Seat) -> usize
where
    I: IntoIterator<Item = (isize, isize)>,
{
    let mut current = 0;
    let mut best = 0;
    for (row, col) in coords {
        if board.at(row, col).owner() == Some(seat) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// Longest run for `seat` in the window through `(row, col)`.
pub fn run_through(
    board: &Board,
    orientation: Orientation,
    row: usize,
    col: usize,
    reach: usize,
    seat: Seat,
) -> usize {
    max_run(board, window(orientation, row, col, reach), seat)
}
