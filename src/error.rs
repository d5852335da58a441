//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the opening hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl From<DrawError> for DealError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NoCards,
        }
    }
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// It is not the dealer's turn.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DrawError> for DealerError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NoCards,
        }
    }
}

impl From<DealerError> for ActionError {
    fn from(err: DealerError) -> Self {
        match err {
            DealerError::InvalidState => Self::InvalidState,
            DealerError::NoCards => Self::NoCards,
        }
    }
}
