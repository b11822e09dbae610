use rand::Rng;

use crate::game::Board;

/// Select uniformly at random from the legal columns.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let columns = board.legal_columns();
    if columns.is_empty() {
        return None;
    }
    Some(columns[rng.random_range(0..columns.len())])
}
