use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::ai::{Difficulty, Minimax};
use crate::config::EngineConfig;

use super::{Board, Player, Token, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress: the board, whose turn it is, and how the computer
/// plays. Cloning copies everything, including the random source.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    difficulty: Difficulty,
    search: Minimax,
    rng: StdRng,
}

impl GameState {
    /// Start a game. Without a starting player one is picked at random.
    pub fn new(starting: Option<Player>) -> Self {
        Self::with_rng(starting, StdRng::from_os_rng())
    }

    /// Start a game whose random choices are reproducible.
    pub fn seeded(starting: Option<Player>, seed: u64) -> Self {
        Self::with_rng(starting, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(starting: Option<Player>, mut rng: StdRng) -> Self {
        let current_player = starting.unwrap_or_else(|| Player::random(&mut rng));
        GameState {
            board: Board::new(),
            current_player,
            difficulty: Difficulty::default(),
            search: Minimax::default(),
            rng,
        }
    }

    /// Start a game with the difficulty, search depth and seed from config.
    pub fn from_config(config: &EngineConfig, starting: Option<Player>) -> Self {
        let mut state = match config.seed {
            Some(seed) => Self::seeded(starting, seed),
            None => Self::new(starting),
        };
        state.difficulty = config.difficulty;
        state.search.set_depth(config.search_depth);
        state
    }

    /// Get current player. Once the game is over this is the player who
    /// made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &[[Token; COLS]; ROWS] {
        self.board.grid()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn search_depth(&self) -> usize {
        self.search.depth()
    }

    pub fn set_search_depth(&mut self, depth: usize) {
        self.search.set_depth(depth);
    }

    pub fn valid_column(&self, column: usize) -> bool {
        self.board.valid_column(column)
    }

    pub fn lowest_available_space(&self, column: usize) -> Option<usize> {
        self.board.lowest_available_space(column)
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Winner(player)),
            None if self.board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Drop the current player's token into `column` and pass the turn.
    ///
    /// Does nothing if the game is over or the column cannot take a token.
    /// The turn does not pass on the move that ends the game. Returns the
    /// row the token landed in.
    pub fn drop(&mut self, column: usize) -> Option<usize> {
        if self.is_over() {
            return None;
        }

        let row = self
            .board
            .drop_token(column, self.current_player.to_token())
            .ok()?;

        if !self.is_over() {
            self.current_player = self.current_player.other();
        }

        Some(row)
    }

    /// Pick a column for the current player according to the difficulty,
    /// play it, and return it.
    pub fn computer_turn(&mut self) -> Option<usize> {
        let column = self.difficulty.select_column(
            &self.board,
            self.current_player,
            &self.search,
            &mut self.rng,
        )?;
        debug!(
            player = self.current_player.name(),
            difficulty = %self.difficulty,
            column,
            "computer move"
        );
        self.drop(column)?;
        Some(column)
    }
}
