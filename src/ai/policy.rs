use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::error::ParseDifficultyError;
use crate::game::{Board, Player};

use super::heuristic::Heuristic;
use super::random::random_column;
use super::search::Minimax;

/// How much of the computer's move is left to chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Any legal column.
    Easy,
    /// A coin flip between an easy move and a hard one.
    Medium,
    /// Always the searched move.
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Choose a column for `player` on `board`. `None` once no column is
    /// playable or the game is already won.
    pub fn select_column<H, R>(
        self,
        board: &Board,
        player: Player,
        search: &Minimax<H>,
        rng: &mut R,
    ) -> Option<usize>
    where
        H: Heuristic,
        R: Rng + ?Sized,
    {
        if board.winner().is_some() {
            return None;
        }

        let searched = match self {
            Difficulty::Easy => false,
            Difficulty::Medium => rng.random_bool(0.5),
            Difficulty::Hard => true,
        };
        debug!(difficulty = self.name(), searched, "selecting column");

        if searched {
            search.best_move(board, player, rng)
        } else {
            random_column(board, rng)
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
