use tracing::{debug, trace};

use crate::error::DealerError;
use crate::hand::BLACKJACK;
use crate::options::DEALER_STANDS_ON;
use crate::result::GameResult;

use super::{GameState, Turn};

impl GameState {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until their score reaches 17 or higher. Returns the
    /// resulting state; if the dealer already stands, it is an unchanged copy.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&self) -> Result<Self, DealerError> {
        self.dealer_play_to(DEALER_STANDS_ON)
    }

    pub(super) fn dealer_play_to(&self, dealer_stands_on: u8) -> Result<Self, DealerError> {
        if self.turn != Turn::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut next = self.clone();
        while next.dealer_hand.score() < u16::from(dealer_stands_on) {
            let card = next.deck.pop()?;
            next.dealer_hand.add_card(card);
            debug!(card = %card, score = next.dealer_hand.score(), "dealer draws");
        }

        Ok(next)
    }

    /// Compares both hands and declares an outcome.
    ///
    /// Looks only at the hands; the deck and the turn are ignored.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let dealer_score = self.dealer_hand.score();
        let player_score = self.player_hand.score();

        let result = if dealer_score > BLACKJACK {
            GameResult::PlayerWin
        } else if player_score > BLACKJACK {
            GameResult::DealerWin
        } else if player_score > dealer_score {
            GameResult::PlayerWin
        } else if dealer_score > player_score {
            GameResult::DealerWin
        } else if self.dealer_hand.is_blackjack() && self.player_hand.is_blackjack() {
            GameResult::Draw
        } else if player_score == BLACKJACK {
            // Equal 21s without a double blackjack go to the player.
            GameResult::PlayerWin
        } else {
            GameResult::Draw
        };

        trace!(player = player_score, dealer = dealer_score, result = %result, "hands compared");
        result
    }
}

/// Plays out the dealer's hand until it reaches 17 or more.
///
/// # Errors
///
/// See [`GameState::dealer_play`].
pub fn dealer_play(state: &GameState) -> Result<GameState, DealerError> {
    state.dealer_play()
}

/// Compares the player's and dealer's hands and declares an outcome.
#[must_use]
pub fn determine_result(state: &GameState) -> GameResult {
    state.result()
}
