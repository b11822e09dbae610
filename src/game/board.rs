use crate::error::MoveError;

use super::lines;
use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of same-token cells in a line needed to win.
pub const LINE_LENGTH: usize = 4;

const _: () = assert!(ROWS > 0 && COLS > 0, "board needs at least one cell");
const _: () = assert!(
    LINE_LENGTH > 0 && (LINE_LENGTH <= ROWS || LINE_LENGTH <= COLS),
    "line length must fit on the board"
);

/// The contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Token {
    /// The player owning this token, `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Token::Empty => None,
            Token::PlayerOne => Some(Player::PlayerOne),
            Token::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }
}

/// Fixed-size rack. Row 0 is the top, row `ROWS - 1` the bottom.
///
/// Tokens only ever enter through [`Board::drop_token`], which keeps every
/// column packed from the bottom up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Token; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Token::Empty; COLS]; ROWS],
        }
    }

    /// Get the token at a specific position
    pub fn get(&self, row: usize, col: usize) -> Token {
        self.cells[row][col]
    }

    /// Read-only view of the whole grid, indexed `[row][col]`.
    pub fn grid(&self) -> &[[Token; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Lowest empty row of a column, scanning bottom to top.
    /// `None` if the column is full or out of range.
    pub fn lowest_available_space(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    pub fn valid_column(&self, col: usize) -> bool {
        self.lowest_available_space(col).is_some()
    }

    /// Columns that can still take a token, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self
            .lowest_available_space(col)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = token;
        Ok(row)
    }

    /// Remove the topmost token of a column and return it.
    pub fn lift_token(&mut self, col: usize) -> Option<Token> {
        if col >= COLS {
            return None;
        }
        let row = (0..ROWS).find(|&row| !self.cells[row][col].is_empty())?;
        Some(std::mem::take(&mut self.cells[row][col]))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Scan every line on the board for a completed four-in-a-row.
    pub fn winner(&self) -> Option<Player> {
        lines::winner(self)
    }

    /// Check if the token at (row, col) is part of a winning line
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let token = self.get(row, col);
        if token.is_empty() {
            return false;
        }

        lines::DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_from(row, col, dr, dc, token)
                + self.count_from(row, col, -dr, -dc, token);
            count >= LINE_LENGTH
        })
    }

    /// Count consecutive `token` cells stepping away from (row, col), not
    /// including the starting cell.
    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, token: Token) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && self.cells[r as usize][c as usize] == token
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
