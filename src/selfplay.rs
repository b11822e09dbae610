//! Computer-vs-computer matches between two difficulty tiers.

use tracing::info;

use crate::ai::Difficulty;
use crate::config::{AppConfig, EngineConfig};
use crate::game::{GameOutcome, GameState, Player};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub starting: Player,
    /// Columns in the order they were played.
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

/// Tally of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Winner(Player::PlayerOne) => self.player_one_wins += 1,
            GameOutcome::Winner(Player::PlayerTwo) => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Share of games won by `player`, 0.0 before any game is played.
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::PlayerOne => self.player_one_wins,
            Player::PlayerTwo => self.player_two_wins,
        };
        wins as f64 / self.games as f64
    }
}

/// Play one game to the end, each side moving at its own difficulty.
pub fn play_game(
    engine: &EngineConfig,
    player_one: Difficulty,
    player_two: Difficulty,
    starting: Player,
    seed: Option<u64>,
) -> GameRecord {
    let config = EngineConfig {
        seed: seed.or(engine.seed),
        ..engine.clone()
    };
    let mut state = GameState::from_config(&config, Some(starting));
    let mut moves = Vec::new();

    loop {
        let tier = match state.current_player() {
            Player::PlayerOne => player_one,
            Player::PlayerTwo => player_two,
        };
        state.set_difficulty(tier);
        match state.computer_turn() {
            Some(col) => moves.push(col),
            None => break,
        }
    }

    GameRecord {
        starting,
        moves,
        // computer_turn only declines once the game is over
        outcome: state.outcome().unwrap_or(GameOutcome::Draw),
    }
}

/// Play `selfplay.games` games, alternating who starts.
pub fn run_match(config: &AppConfig) -> MatchSummary {
    let settings = &config.selfplay;
    let mut summary = MatchSummary::default();

    for index in 0..settings.games {
        let starting = if index % 2 == 0 {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        };
        let seed = settings.seed.map(|base| game_seed(base, index));
        let record = play_game(
            &config.engine,
            settings.player_one,
            settings.player_two,
            starting,
            seed,
        );

        info!(
            game = index + 1,
            starting = starting.name(),
            moves = record.moves.len(),
            outcome = ?record.outcome,
            "game finished"
        );
        summary.record(record.outcome);
    }

    summary
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
