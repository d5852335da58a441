//! Game state types.

use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{self, Hand};
use crate::result::GameResult;

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Turn {
    /// Waiting for player actions.
    #[default]
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerTurn => f.write_str("player_turn"),
            Self::DealerTurn => f.write_str("dealer_turn"),
        }
    }
}

/// A snapshot of one game: both hands, the remaining deck and the turn.
///
/// Actions never mutate a state in place. Each one returns a new snapshot,
/// so earlier states stay valid for replay or re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) player_hand: Hand,
    pub(crate) dealer_hand: Hand,
    pub(crate) deck: Deck,
    pub(crate) turn: Turn,
}

impl GameState {
    /// Deals the opening hands from `deck` without shuffling it.
    ///
    /// The player takes the top two cards and the dealer the two below them.
    /// Each hand keeps the cards in deck order, so a deck ending in
    /// `[.., d1, d2, p1, p2]` gives the player `[p1, p2]` and the dealer
    /// `[d1, d2]`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than
    /// four cards.
    pub fn deal(deck: Deck) -> Result<Self, DealError> {
        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut deck = deck;
        let player_hand = Hand::from_cards(deck.take_top(2)?);
        let dealer_hand = Hand::from_cards(deck.take_top(2)?);

        debug!(
            player = player_hand.score(),
            remaining = deck.len(),
            "opening hands dealt"
        );

        Ok(Self {
            player_hand,
            dealer_hand,
            deck,
            turn: Turn::PlayerTurn,
        })
    }

    /// Assembles a state from its parts.
    ///
    /// No invariant is checked; use this to restore a known position.
    #[must_use]
    pub const fn from_parts(player_hand: Hand, dealer_hand: Hand, deck: Deck, turn: Turn) -> Self {
        Self {
            player_hand,
            dealer_hand,
            deck,
            turn,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the dealer cards that are face up.
    ///
    /// During the player's turn the dealer's first card is the hole card and
    /// stays hidden.
    #[must_use]
    pub fn dealer_up_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        match self.turn {
            Turn::PlayerTurn => cards.get(1..).unwrap_or_default(),
            Turn::DealerTurn => cards,
        }
    }

    /// Calculates the value of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_visible_score(&self) -> u16 {
        hand::score(self.dealer_up_cards())
    }

    /// Returns the outcome once the dealer's turn has begun.
    ///
    /// Returns `None` while the player is still acting.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        match self.turn {
            Turn::PlayerTurn => None,
            Turn::DealerTurn => Some(super::determine_result(self)),
        }
    }
}
