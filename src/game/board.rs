use std::fmt;

use super::player::Seat;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Seat),
}

impl Cell {
    pub fn owner(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Taken(seat) => Some(seat),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `height x width` grid. Row 0 is the top, column 0 is the left.
///
/// Cells are only ever filled, never cleared, and a column fills from the
/// bottom row upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position. Out-of-range positions read as
    /// empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return Cell::Empty;
        }
        self.cells[row * self.width + col]
    }

    /// Bounds-safe read for signed coordinates, used by the line scanner
    /// whose windows routinely run off the grid.
    pub fn at(&self, row: isize, col: isize) -> Cell {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.get(row, col),
            _ => Cell::Empty,
        }
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width || self.height == 0 {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Landing row for a piece dropped into `col`: the lowest empty row, or
    /// `None` if the column is full or out of range.
    pub fn drop_column(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Occupy an empty cell. Only call with a row returned by
    /// [`Board::drop_column`] for the same column.
    pub fn place(&mut self, row: usize, col: usize, seat: Seat) {
        assert!(
            row < self.height && col < self.width,
            "place({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        let idx = row * self.width + col;
        assert!(self.cells[idx].is_empty(), "cell ({row}, {col}) already taken");
        self.cells[idx] = Cell::Taken(seat);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Taken(seat) => seat.symbol(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
