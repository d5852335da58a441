//! Deck construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered pile of cards.
///
/// The last card is the top of the deck; cards only ever leave from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a fresh, unshuffled 52-card deck.
    ///
    /// Cards are laid out suit by suit, each suit from Two to Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck from cards in bottom-to-top order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Handy for fixing the outcome of a deal: the first element is drawn
    /// first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Returns the cards in bottom-to-top order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a shuffled copy of this deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the top card, returning it alongside the shortened deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if there is nothing left to draw.
    pub fn draw(&self) -> Result<(Card, Self), DrawError> {
        let mut rest = self.clone();
        let card = rest.pop()?;
        Ok((card, rest))
    }

    /// Removes the top card in place.
    pub(crate) fn pop(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop().ok_or(DrawError::EmptyDeck)?;
        trace!(card = %card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Removes the top `count` cards in place, keeping their deck order.
    pub(crate) fn take_top(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if self.cards.len() < count {
            return Err(DrawError::EmptyDeck);
        }
        let at = self.cards.len() - count;
        Ok(self.cards.split_off(at))
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Builds a fresh, unshuffled 52-card deck.
#[must_use]
pub fn build_deck() -> Deck {
    Deck::new()
}

/// Returns a uniformly shuffled permutation of `deck`.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    deck.shuffled(rng)
}

/// Draws the top card of `deck`.
///
/// # Errors
///
/// Returns [`DrawError::EmptyDeck`] if the deck is empty.
pub fn draw(deck: &Deck) -> Result<(Card, Deck), DrawError> {
    deck.draw()
}
