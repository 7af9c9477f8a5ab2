//! Core Connect Four game logic: board, players, line scanning, win
//! evaluation and the session state machine.

mod board;
mod player;
pub mod scanner;
mod session;
mod win;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{Player, Seat};
pub use scanner::{Orientation, ORIENTATIONS};
pub use session::{
    validate_dimensions, GameSession, GameStatus, Move, MoveOutcome, Rejection, MAX_CELLS,
};
pub use win::{check_win, DEFAULT_WIN_LENGTH};
