//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Score at which a hand busts when exceeded.
pub const BLACKJACK: u16 = 21;

/// Highest running total at which an ace can still be promoted to 11.
const ACE_PROMOTION_LIMIT: u16 = BLACKJACK - 10;

fn base_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.rank.value())).sum()
}

fn evaluate_cards(cards: &[Card]) -> u16 {
    let mut total = base_total(cards);

    for _ in cards.iter().filter(|card| card.is_ace()) {
        if total >= BLACKJACK {
            break;
        }
        if total <= ACE_PROMOTION_LIMIT {
            total += 10;
        }
    }

    total
}

/// Scores a slice of cards.
///
/// Every card counts at its face value with aces as 1. Aces are then promoted
/// to 11 one at a time while the running total is at most 11, and promotion
/// stops as soon as the total reaches 21. The result may exceed 21.
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    evaluate_cards(cards)
}

/// Returns whether the cards form a blackjack.
///
/// Only a two-card hand holding a King and an Ace qualifies. A Queen, Jack
/// or Ten paired with an Ace scores 21 but is not a blackjack.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2
        && cards.iter().any(|c| c.rank == Rank::King)
        && cards.iter().any(|c| c.rank == Rank::Ace)
}

/// The cards held by one side of the table.
///
/// A hand only grows: cards are appended as they are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a copy of this hand with `card` appended.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut hand = self.clone();
        hand.add_card(card);
        hand
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u16 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is a King and an Ace.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != base_total(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .zip(Suit::ALL.iter().cycle())
            .map(|(&rank, &suit)| Card::new(suit, rank))
            .collect()
    }

    #[test]
    fn ace_king_is_blackjack() {
        let h = hand(&[Rank::Ace, Rank::King]);
        assert_eq!(h.score(), 21);
        assert!(h.is_blackjack());
        assert!(h.is_soft());

        let reversed = hand(&[Rank::King, Rank::Ace]);
        assert!(reversed.is_blackjack());
    }

    #[test]
    fn other_tens_with_ace_are_not_blackjack() {
        for ten in [Rank::Queen, Rank::Jack, Rank::Ten] {
            let h = hand(&[Rank::Ace, ten]);
            assert_eq!(h.score(), 21);
            assert!(!h.is_blackjack(), "{ten}");
        }
    }

    #[test]
    fn three_cards_are_never_blackjack() {
        assert!(!hand(&[Rank::King, Rank::Ace, Rank::Two]).is_blackjack());
        assert!(!hand(&[Rank::King, Rank::King]).is_blackjack());
    }

    #[test]
    fn pair_of_aces_promotes_once() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).score(), 12);
    }

    #[test]
    fn ace_stays_low_when_promotion_would_bust() {
        assert_eq!(hand(&[Rank::Ten, Rank::Nine, Rank::Ace]).score(), 20);
        assert!(!hand(&[Rank::Ten, Rank::Nine, Rank::Ace]).is_soft());
    }

    #[test]
    fn four_aces() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(h.score(), 14);

        let with_seven = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Seven]);
        assert_eq!(with_seven.score(), 21);
    }

    #[test]
    fn ace_position_does_not_matter() {
        let front = hand(&[Rank::Ace, Rank::Five, Rank::Four]);
        let back = hand(&[Rank::Five, Rank::Four, Rank::Ace]);
        assert_eq!(front.score(), 20);
        assert_eq!(back.score(), 20);
    }

    #[test]
    fn score_can_exceed_21() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(h.score(), 25);
        assert!(h.is_bust());
    }

    #[test]
    fn whole_deck_in_one_hand() {
        let h: Hand = crate::deck::build_deck().cards().iter().copied().collect();
        // four suits of 2..=10, three faces and an ace
        assert_eq!(h.score(), 4 * (54 + 30 + 1));
        assert!(!h.is_soft());
        assert!(h.is_bust());
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(Hand::new().score(), 0);
        assert!(!Hand::new().is_soft());
    }

    #[test]
    fn with_card_leaves_original_untouched() {
        let h = hand(&[Rank::Two]);
        let grown = h.with_card(Card::new(Suit::Clubs, Rank::Three));
        assert_eq!(h.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.score(), 5);
    }
}
