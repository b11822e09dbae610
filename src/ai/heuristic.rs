use crate::game::{lines, Board, Player, LINE_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Points for one run reaching `len` tokens: 1000 for a full line, and a
/// tenth of that for each token short of it.
pub fn point_value(len: usize) -> i64 {
    debug_assert!((1..=LINE_LENGTH).contains(&len));
    1000 / 10_i64.pow((LINE_LENGTH - len) as u32)
}

/// Counts runs of every length on every line, whoever owns them.
///
/// A run of `n` tokens scores `point_value(l)` once for every `l <= n`, so a
/// complete line is worth 1000 + 100 + 10 + 1. The evaluation is the same
/// for both players.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunHeuristic;

impl Heuristic for RunHeuristic {
    fn evaluate(&self, board: &Board, _player: Player) -> i64 {
        let runs = lines::runs(board);
        let mut score = 0;

        for len in (1..=LINE_LENGTH).rev() {
            let hits = runs.iter().filter(|run| run.len >= len).count() as i64;
            score += hits * point_value(len);
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;

    #[test]
    fn point_values_by_length() {
        assert_eq!(point_value(4), 1000);
        assert_eq!(point_value(3), 100);
        assert_eq!(point_value(2), 10);
        assert_eq!(point_value(1), 1);
        let total: i64 = (1..=LINE_LENGTH).map(point_value).sum();
        assert_eq!(total, 1111);
    }

    #[test]
    fn empty_board_is_zero() {
        let h = RunHeuristic;
        assert_eq!(h.evaluate(&Board::new(), Player::PlayerOne), 0);
        assert_eq!(h.evaluate(&Board::new(), Player::PlayerTwo), 0);
    }

    #[test]
    fn single_token_counts_once_per_orientation() {
        let mut board = Board::new();
        board.drop_token(3, Token::PlayerOne).unwrap();
        assert_eq!(RunHeuristic.evaluate(&board, Player::PlayerOne), 4);
    }

    #[test]
    fn adjacent_pair_scores_the_pair_and_its_singles() {
        let mut board = Board::new();
        board.drop_token(0, Token::PlayerOne).unwrap();
        board.drop_token(1, Token::PlayerOne).unwrap();
        // Row: one pair (10 + 1). Columns and both diagonals: six singles.
        assert_eq!(RunHeuristic.evaluate(&board, Player::PlayerOne), 17);
    }

    #[test]
    fn opposing_neighbours_do_not_join() {
        let mut board = Board::new();
        board.drop_token(0, Token::PlayerOne).unwrap();
        board.drop_token(1, Token::PlayerTwo).unwrap();
        assert_eq!(RunHeuristic.evaluate(&board, Player::PlayerOne), 8);
    }

    #[test]
    fn full_line_contributes_1111() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(0, Token::PlayerOne).unwrap();
        }
        // Column run: 1111. Each token also sits alone on its row and on
        // two diagonals: 12 singles.
        assert_eq!(RunHeuristic.evaluate(&board, Player::PlayerOne), 1111 + 12);
    }

    #[test]
    fn scores_ignore_run_owner() {
        let mut one = Board::new();
        let mut two = Board::new();
        for col in [2, 3, 3, 4] {
            one.drop_token(col, Token::PlayerOne).unwrap();
            two.drop_token(col, Token::PlayerTwo).unwrap();
        }
        let h = RunHeuristic;
        assert_eq!(h.evaluate(&one, Player::PlayerOne), h.evaluate(&two, Player::PlayerOne));
        assert_eq!(h.evaluate(&one, Player::PlayerOne), h.evaluate(&one, Player::PlayerTwo));
    }
}
