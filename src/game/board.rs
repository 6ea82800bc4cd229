use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::player::Token;
use super::state::DropError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of the run that wins the game.
const CONNECT: usize = 4;

/// Axes checked for a winning run: horizontal, vertical, and both diagonals.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Token::Red),
            Cell::Yellow => Some(Token::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Stored form: the token name, or an empty string.
    pub fn as_str(self) -> &'static str {
        self.token().map_or("", Token::as_str)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct CellVisitor;

impl Visitor<'_> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"\", \"rouge\" or \"jaune\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Cell, E> {
        match value {
            "" => Ok(Cell::Empty),
            "rouge" => Ok(Cell::Red),
            "jaune" => Ok(Cell::Yellow),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Cell, D::Error> {
        deserializer.deserialize_str(CellVisitor)
    }
}

/// 6×7 grid. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// A column is full once its top cell is taken.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }

        // Lowest empty row wins; gravity
        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull)
    }

    /// The board is full iff the top row is. Gravity guarantees every cell
    /// below an occupied one is occupied too.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn filled_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if the piece at (row, col) is part of a run of four or more.
    /// Only lines through that cell are examined.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell.is_empty() {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            let total = 1
                + self.count_direction(row, col, dr, dc, cell)
                + self.count_direction(row, col, -dr, -dc, cell);
            total >= CONNECT
        })
    }

    /// Consecutive `cell` pieces starting next to (row, col) and walking
    /// along (dr, dc).
    fn count_direction(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}
