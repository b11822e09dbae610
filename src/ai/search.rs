//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The walk works on a single scratch board: each simulated move is dropped,
//! scored and lifted back off again, so no position is copied below the root.

use rand::Rng;
use tracing::debug;

use crate::game::{Board, Player, COLS, ROWS};

use super::heuristic::{Heuristic, RunHeuristic};

/// Plies searched below the root's children.
pub const DEFAULT_DEPTH: usize = 5;

/// Score of a win found on the very first ply.
pub const WIN: i64 = i64::MAX;
/// Score of a loss found on the very first ply.
pub const LOSS: i64 = i64::MIN;

/// Outcome of scoring every legal column from a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root score, [`LOSS`] if there was nothing to search.
    pub score: i64,
    /// Every column that reached `score`, in ascending order.
    pub best_columns: Vec<usize>,
    /// Positions scored below the root.
    pub nodes: u64,
}

/// Minimax searcher with a fixed ply bound.
#[derive(Debug, Clone)]
pub struct Minimax<H = RunHeuristic> {
    depth: usize,
    pruning: bool,
    heuristic: H,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, RunHeuristic)
    }

    /// Full-width search without cutoffs. Same results as [`Minimax::new`],
    /// only slower.
    pub fn exhaustive(depth: usize) -> Self {
        Minimax {
            depth,
            pruning: false,
            heuristic: RunHeuristic,
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl<H: Heuristic> Minimax<H> {
    pub fn with_heuristic(depth: usize, heuristic: H) -> Self {
        Minimax {
            depth,
            pruning: true,
            heuristic,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Score every legal column for `player`, who is to move on `board`.
    pub fn analyze(&self, board: &Board, player: Player) -> SearchResult {
        let mut result = SearchResult {
            score: LOSS,
            best_columns: Vec::new(),
            nodes: 0,
        };
        if board.winner().is_some() {
            return result;
        }

        let mut walk = Walk {
            search: self,
            board: *board,
            player,
            moves: Vec::with_capacity(ROWS * COLS),
            nodes: 0,
        };
        let mut alpha = LOSS;

        for col in board.legal_columns() {
            let Some(row) = walk.play(col, player) else {
                continue;
            };
            let score = walk.score((row, col), player, 0, alpha, WIN);
            walk.undo();
            debug!(column = col, score, "scored root move");

            if score > result.score || result.best_columns.is_empty() {
                result.score = score;
                result.best_columns.clear();
                result.best_columns.push(col);
            } else if score == result.score {
                result.best_columns.push(col);
            }

            // Later siblings may only cut strictly below the best so far,
            // which keeps a tying score exact.
            if self.pruning {
                alpha = alpha.max(result.score.saturating_sub(1));
            }
        }

        result.nodes = walk.nodes;
        result
    }

    /// Pick uniformly among the best-scoring columns.
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Option<usize> {
        let result = self.analyze(board, player);
        if result.best_columns.is_empty() {
            return None;
        }

        let column = result.best_columns[rng.random_range(0..result.best_columns.len())];
        debug!(
            best = ?result.best_columns,
            score = result.score,
            nodes = result.nodes,
            column,
            "search finished"
        );
        Some(column)
    }
}

/// State of one search: the scratch board and the stack of simulated drops.
struct Walk<'a, H> {
    search: &'a Minimax<H>,
    board: Board,
    /// Player the search runs for.
    player: Player,
    moves: Vec<usize>,
    nodes: u64,
}

impl<H: Heuristic> Walk<'_, H> {
    fn play(&mut self, col: usize, mover: Player) -> Option<usize> {
        let row = self.board.drop_token(col, mover.to_token()).ok()?;
        self.moves.push(col);
        Some(row)
    }

    fn undo(&mut self) {
        if let Some(col) = self.moves.pop() {
            self.board.lift_token(col);
        }
    }

    /// Score the position reached by `mover` dropping at `last`.
    fn score(
        &mut self,
        last: (usize, usize),
        mover: Player,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.nodes += 1;

        if self.board.check_win(last.0, last.1) {
            return if mover == self.player {
                WIN - depth as i64
            } else {
                LOSS + depth as i64
            };
        }
        if self.board.is_full() {
            return 0;
        }
        if depth >= self.search.depth {
            return self.search.heuristic.evaluate(&self.board, self.player);
        }

        let next = mover.other();
        let maximizing = next == self.player;
        let mut best = if maximizing { LOSS } else { WIN };

        for col in self.board.legal_columns() {
            let Some(row) = self.play(col, next) else {
                continue;
            };
            let score = self.score((row, col), next, depth + 1, alpha, beta);
            self.undo();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
                if self.search.pruning && best >= beta {
                    break;
                }
            } else {
                best = best.min(score);
                beta = beta.min(best);
                if self.search.pruning && best <= alpha {
                    break;
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replay alternating drops from an empty board, Player 1 first.
    fn position(moves: &[usize]) -> (Board, Player) {
        let mut board = Board::new();
        let mut mover = Player::PlayerOne;
        for &col in moves {
            board.drop_token(col, mover.to_token()).unwrap();
            assert_eq!(board.winner(), None, "setup must not end the game");
            mover = mover.other();
        }
        (board, mover)
    }

    fn assert_parity(moves: &[usize], depth: usize) {
        let (board, mover) = position(moves);
        let pruned = Minimax::new(depth).analyze(&board, mover);
        let full = Minimax::exhaustive(depth).analyze(&board, mover);
        assert_eq!(pruned.score, full.score, "score differs for {moves:?} at depth {depth}");
        assert_eq!(
            pruned.best_columns, full.best_columns,
            "best columns differ for {moves:?} at depth {depth}"
        );
    }

    #[test]
    fn takes_winning_move() {
        let (board, mover) = position(&[0, 0, 1, 1, 2, 6]);
        assert_eq!(mover, Player::PlayerOne);

        let result = Minimax::default().analyze(&board, mover);
        assert_eq!(result.best_columns, vec![3]);
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn blocks_opponent_win() {
        // Player 2 holds the bottom of columns 0..3; column 3 is the only save.
        let (board, mover) = position(&[6, 0, 6, 1, 5, 2]);
        let result = Minimax::default().analyze(&board, mover);
        assert_eq!(result.best_columns, vec![3]);
    }

    #[test]
    fn prefers_win_over_block() {
        // Both sides have three along the bottom two rows; Player 1 moves first.
        let (board, mover) = position(&[0, 0, 1, 1, 2, 2]);
        let result = Minimax::default().analyze(&board, mover);
        assert_eq!(result.best_columns, vec![3]);
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn unstoppable_double_threat_scores_as_next_ply_loss() {
        // Player 2 owns the bottom of columns 1..4 with both ends open.
        let (board, mover) = position(&[6, 1, 6, 2, 5, 3]);
        let result = Minimax::default().analyze(&board, mover);
        assert_eq!(result.score, LOSS + 1);
        assert_eq!(result.best_columns, (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn depth_zero_scores_children_by_heuristic() {
        let result = Minimax::new(0).analyze(&Board::new(), Player::PlayerOne);
        // A lone token sits on four single-token lines.
        assert_eq!(result.score, 4);
        assert_eq!(result.best_columns, (0..COLS).collect::<Vec<_>>());
        assert_eq!(result.nodes, COLS as u64);
    }

    #[test]
    fn finished_game_has_no_moves() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(2, Token::PlayerTwo).unwrap();
        }
        let search = Minimax::default();
        let result = search.analyze(&board, Player::PlayerOne);
        assert!(result.best_columns.is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(search.best_move(&board, Player::PlayerOne, &mut rng), None);
    }

    #[test]
    fn pruning_matches_exhaustive_search() {
        assert_parity(&[], 3);
        assert_parity(&[3, 3, 2, 4, 4, 2], 4);
        assert_parity(&[6, 0, 6, 1, 5, 2], 4);
        assert_parity(&[0, 0, 1, 1, 2, 6], 3);
        assert_parity(&[3, 3, 2, 4, 4, 2], DEFAULT_DEPTH);
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let board = Board::new();
        let pruned = Minimax::new(3).analyze(&board, Player::PlayerOne);
        let full = Minimax::exhaustive(3).analyze(&board, Player::PlayerOne);
        assert!(
            pruned.nodes < full.nodes,
            "pruned {} vs full {}",
            pruned.nodes,
            full.nodes
        );
    }

    #[test]
    fn ties_are_broken_among_best_columns() {
        let search = Minimax::new(0);
        let board = Board::new();
        let mut seen = [false; COLS];
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let col = search.best_move(&board, Player::PlayerOne, &mut rng).unwrap();
            seen[col] = true;
        }
        assert!(seen.iter().filter(|&&s| s).count() > 1);
    }
}
