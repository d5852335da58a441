//! Game outcome type.

use core::fmt;

/// Outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWin,
    /// Push (tie).
    Draw,
    /// The game has not concluded.
    NoResult,
}

impl GameResult {
    /// Returns whether the game has a winner or a push.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::NoResult)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::PlayerWin => "player_win",
            Self::DealerWin => "dealer_win",
            Self::Draw => "draw",
            Self::NoResult => "no_result",
        };
        f.write_str(tag)
    }
}
