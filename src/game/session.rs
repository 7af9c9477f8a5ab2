use tracing::{debug, info, instrument};

use super::board::Board;
use super::player::{Player, Seat};
use super::win::{check_win, DEFAULT_WIN_LENGTH};
use crate::config::AppConfig;
use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Seat> {
        match self {
            GameStatus::Won(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won(_) => "won",
            GameStatus::Tied => "tied",
        }
    }
}

/// A placed piece. Sequence numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub seat: Seat,
    pub row: usize,
    pub col: usize,
    pub sequence: usize,
}

/// Why a submitted column was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("column {column} is outside the board (width {width})")]
    OutOfRange { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is over")]
    GameOver,
}

/// Result of [`GameSession::submit_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { mv: Move, status: GameStatus },
    Ignored { reason: Rejection, status: GameStatus },
}

impl MoveOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }

    pub fn placed(&self) -> Option<Move> {
        match self {
            MoveOutcome::Placed { mv, .. } => Some(*mv),
            MoveOutcome::Ignored { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::Ignored { reason, .. } => Some(*reason),
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            MoveOutcome::Placed { status, .. } | MoveOutcome::Ignored { status, .. } => *status,
        }
    }

    pub fn winner(&self) -> Option<Seat> {
        self.status().winner()
    }
}

/// Largest board, in cells, a session will allocate.
pub const MAX_CELLS: usize = 1 << 16;

/// Check that a board of the given size can host a game to `win_length`.
pub fn validate_dimensions(
    height: usize,
    width: usize,
    win_length: usize,
) -> Result<(), SessionError> {
    let cells = height.checked_mul(width).unwrap_or(usize::MAX);
    if cells == 0 || cells > MAX_CELLS {
        return Err(SessionError::InvalidDimensions { height, width });
    }
    if win_length == 0 || win_length > height.max(width) {
        return Err(SessionError::InvalidWinLength {
            win_length,
            height,
            width,
        });
    }
    Ok(())
}

/// One game between two players. Terminal states are absorbing: once the
/// game is won or tied every further move is ignored. A rematch is a new
/// session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
    win_length: usize,
    moves_played: usize,
}

impl GameSession {
    /// Create a session playing to four in a row.
    pub fn new(height: usize, width: usize, p1: Player, p2: Player) -> Result<Self, SessionError> {
        Self::with_win_length(height, width, DEFAULT_WIN_LENGTH, p1, p2)
    }

    #[instrument(skip(p1, p2), fields(first = p1.color(), second = p2.color()))]
    pub fn with_win_length(
        height: usize,
        width: usize,
        win_length: usize,
        p1: Player,
        p2: Player,
    ) -> Result<Self, SessionError> {
        validate_dimensions(height, width, win_length)?;
        info!("new session");
        Ok(GameSession {
            board: Board::new(height, width),
            players: [p1, p2],
            current: Seat::First,
            status: GameStatus::InProgress,
            win_length,
            moves_played: 0,
        })
    }

    /// Create a session from the board and player sections of a config.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let p1 = Player::new(config.players.first_color.as_str())?;
        let p2 = Player::new(config.players.second_color.as_str())?;
        Self::with_win_length(
            config.board.height,
            config.board.width,
            config.board.win_length,
            p1,
            p2,
        )
    }

    /// Create a session and feed it `columns` in order. Ignored inputs are
    /// skipped exactly as [`GameSession::submit_move`] skips them.
    pub fn replay<I>(
        height: usize,
        width: usize,
        win_length: usize,
        p1: Player,
        p2: Player,
        columns: I,
    ) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut session = Self::with_win_length(height, width, win_length, p1, p2)?;
        for col in columns {
            session.submit_move(col);
        }
        Ok(session)
    }

    /// Drop the current player's piece into `col`.
    ///
    /// Order matters: a win is checked before a tie, so filling the last
    /// cell with a winning piece reports the win.
    #[instrument(level = "debug", skip(self), fields(seat = ?self.current))]
    pub fn submit_move(&mut self, col: usize) -> MoveOutcome {
        if self.status.is_terminal() {
            return self.ignore(Rejection::GameOver);
        }
        if col >= self.board.width() {
            return self.ignore(Rejection::OutOfRange {
                column: col,
                width: self.board.width(),
            });
        }
        let Some(row) = self.board.drop_column(col) else {
            return self.ignore(Rejection::ColumnFull(col));
        };

        let seat = self.current;
        self.board.place(row, col, seat);
        self.moves_played += 1;
        let mv = Move {
            seat,
            row,
            col,
            sequence: self.moves_played,
        };
        debug!(row, col, sequence = mv.sequence, "piece placed");

        if check_win((row, col), self.win_length, seat, &self.board) {
            self.status = GameStatus::Won(seat);
            info!(?seat, color = self.player(seat).color(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played, "game tied");
        } else {
            self.current = seat.other();
        }

        MoveOutcome::Placed {
            mv,
            status: self.status,
        }
    }

    fn ignore(&self, reason: Rejection) -> MoveOutcome {
        debug!(%reason, "move ignored");
        MoveOutcome::Ignored {
            reason,
            status: self.status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|seat| self.player(seat))
    }

    /// Seat whose turn it is. After a win this is still the winner.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Columns that can still accept a piece. Empty once the game is over.
    pub fn playable_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}
