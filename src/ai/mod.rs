//! Computer opponent: the run-counting heuristic, minimax search with
//! alpha-beta pruning, random play, and the difficulty policy that mixes them.

mod heuristic;
mod policy;
mod random;
pub mod search;

pub use heuristic::{point_value, Heuristic, RunHeuristic};
pub use policy::Difficulty;
pub use random::random_column;
pub use search::{Minimax, SearchResult, DEFAULT_DEPTH};
