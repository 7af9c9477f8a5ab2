use super::board::Board;
use super::player::Seat;
use super::scanner::{run_through, ORIENTATIONS};

pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Check whether `seat` has at least `required_run` in a row through
/// `target` along any orientation.
///
/// Only the just-placed cell needs checking: a new line can only be formed
/// by the newest piece.
pub fn check_win(target: (usize, usize), required_run: usize, seat: Seat, board: &Board) -> bool {
    let (row, col) = target;
    let reach = required_run.saturating_sub(1);
    ORIENTATIONS
        .iter()
        .any(|&orientation| run_through(board, orientation, row, col, reach, seat) >= required_run)
}
