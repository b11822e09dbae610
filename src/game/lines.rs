//! Line scanner: splits every row, column and diagonal of a board into
//! maximal runs of identical tokens.

use super::board::{Board, COLS, LINE_LENGTH, ROWS};
use super::player::Player;

/// Step vectors `(d_row, d_col)` in scan order: right, down, down-right,
/// down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A maximal stretch of one player's tokens along a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub player: Player,
    pub len: usize,
    /// First cell of the run in scan direction, as `(row, col)`.
    pub start: (usize, usize),
    pub direction: (isize, isize),
}

fn on_board(row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < ROWS && (col as usize) < COLS
}

/// Every run on the board, grouped by orientation in [`DIRECTIONS`] order.
///
/// A line starts at each cell whose predecessor in the scan direction is off
/// the board, so every cell is visited exactly once per orientation.
pub fn runs(board: &Board) -> Vec<Run> {
    let mut found = Vec::new();

    for &(dr, dc) in &DIRECTIONS {
        for row in 0..ROWS {
            for col in 0..COLS {
                if on_board(row as isize - dr, col as isize - dc) {
                    continue;
                }
                scan_line(board, (row, col), (dr, dc), &mut found);
            }
        }
    }

    found
}

fn scan_line(board: &Board, start: (usize, usize), dir: (isize, isize), out: &mut Vec<Run>) {
    let (mut r, mut c) = (start.0 as isize, start.1 as isize);
    let mut current: Option<Run> = None;

    while on_board(r, c) {
        let cell = (r as usize, c as usize);
        let owner = board.get(cell.0, cell.1).player();

        match current {
            Some(ref mut run) if Some(run.player) == owner => run.len += 1,
            _ => {
                out.extend(current.take());
                current = owner.map(|player| Run {
                    player,
                    len: 1,
                    start: cell,
                    direction: dir,
                });
            }
        }

        r += dir.0;
        c += dir.1;
    }

    out.extend(current);
}

/// First run long enough to win, in scan order.
pub fn winner(board: &Board) -> Option<Player> {
    runs(board)
        .into_iter()
        .find(|run| run.len >= LINE_LENGTH)
        .map(|run| run.player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;

    #[test]
    fn test_empty_board_has_no_runs() {
        assert!(runs(&Board::new()).is_empty());
    }

    #[test]
    fn test_single_token_sits_on_four_lines() {
        let mut board = Board::new();
        board.drop_token(3, Token::PlayerOne).unwrap();

        let found = runs(&board);
        assert_eq!(found.len(), 4);
        for (run, dir) in found.iter().zip(DIRECTIONS) {
            assert_eq!(run.len, 1);
            assert_eq!(run.start, (5, 3));
            assert_eq!(run.direction, dir);
        }
    }

    #[test]
    fn test_runs_are_maximal() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, Token::PlayerTwo).unwrap();
        }
        board.drop_token(3, Token::PlayerOne).unwrap();

        let horizontal: Vec<Run> = runs(&board)
            .into_iter()
            .filter(|run| run.direction == (0, 1))
            .collect();
        assert_eq!(horizontal.len(), 2);
        assert_eq!(horizontal[0].player, Player::PlayerTwo);
        assert_eq!(horizontal[0].len, 3);
        assert_eq!(horizontal[0].start, (5, 0));
        assert_eq!(horizontal[1].player, Player::PlayerOne);
        assert_eq!(horizontal[1].len, 1);
    }

    #[test]
    fn test_anti_diagonal_through_top_row_is_scanned() {
        // (0,3) (1,2) (2,1) (3,0): the down-left diagonal starting mid top row.
        use crate::game::Token::{PlayerOne as O, PlayerTwo as T};
        let stacks: [&[Token]; 4] = [
            &[T, O, T],
            &[T, O, T, T],
            &[O, T, O, T, T],
            &[O, T, O, T, O, T],
        ];
        let mut board = Board::new();
        for (col, stack) in stacks.iter().enumerate() {
            for &token in stack.iter() {
                board.drop_token(col, token).unwrap();
            }
        }

        assert_eq!(board.get(0, 3), Token::PlayerTwo);
        assert_eq!(board.get(3, 0), Token::PlayerTwo);
        assert_eq!(winner(&board), Some(Player::PlayerTwo));
    }
}
