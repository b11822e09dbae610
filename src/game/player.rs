use rand::Rng;

use super::board::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Convert player to the token it drops
    pub fn to_token(self) -> Token {
        match self {
            Player::PlayerOne => Token::PlayerOne,
            Player::PlayerTwo => Token::PlayerTwo,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::PlayerOne => "Player 1",
            Player::PlayerTwo => "Player 2",
        }
    }

    /// Pick either player with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Player {
        if rng.random_bool(0.5) {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        }
    }
}
