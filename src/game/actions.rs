use tracing::debug;

use crate::error::ActionError;
use crate::options::DEALER_STANDS_ON;

use super::{GameState, Turn};

impl GameState {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.turn {
            Turn::PlayerTurn => Ok(()),
            Turn::DealerTurn => Err(ActionError::InvalidState),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the next state with one more card in the player's hand. A bust
    /// does not end the turn; adjudication is left to
    /// [`determine_result`](super::determine_result).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        let card = next.deck.pop()?;
        next.player_hand.add_card(card);

        debug!(card = %card, score = next.player_hand.score(), "player hits");
        Ok(next)
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// The dealer draws a single card if their score is below 17, then the
    /// turn passes to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the dealer must
    /// draw and the deck is empty.
    pub fn stand(&self) -> Result<Self, ActionError> {
        self.stand_on(DEALER_STANDS_ON)
    }

    pub(super) fn stand_on(&self, dealer_stands_on: u8) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        if next.dealer_hand.score() < u16::from(dealer_stands_on) {
            let card = next.deck.pop()?;
            next.dealer_hand.add_card(card);
            debug!(card = %card, score = next.dealer_hand.score(), "dealer draws on stand");
        }
        next.turn = Turn::DealerTurn;

        debug!(
            player = next.player_hand.score(),
            dealer = next.dealer_hand.score(),
            "player stands"
        );
        Ok(next)
    }
}

/// Draws one card for the player.
///
/// # Errors
///
/// See [`GameState::hit`].
pub fn player_hits(state: &GameState) -> Result<GameState, ActionError> {
    state.hit()
}

/// Ends the player's turn, giving the dealer at most one card.
///
/// # Errors
///
/// See [`GameState::stand`].
pub fn player_stands(state: &GameState) -> Result<GameState, ActionError> {
    state.stand()
}
