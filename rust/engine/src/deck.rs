use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

pub const DECK_SIZE: usize = 52;

/// Ordered pile of cards; the front is the next card to play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Full 52-card deck shuffled with the thread-local random source.
    pub fn shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// Same seed produces the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Uniform permutation of [`full_deck`] (Fisher-Yates, back to front).
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self::from(cards)
    }

    /// Splits at the midpoint, preserving order within each half.
    /// An odd card goes to the second half.
    pub fn split_in_half(self) -> (Deck, Deck) {
        let mut first = Vec::from(self.cards);
        let second = first.split_off(first.len() / 2);
        (Deck::from(first), Deck::from(second))
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Builds a freshly shuffled 52-card deck.
pub fn build_shuffled_deck() -> Deck {
    Deck::shuffled()
}

/// Splits a deck into the two players' halves.
pub fn partition(deck: Deck) -> (Deck, Deck) {
    deck.split_in_half()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn draw_takes_from_the_front() {
        let mut deck = Deck::from(vec![
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        assert_eq!(deck.draw(), Some(Card::new(Rank::Two, Suit::Hearts)));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.draw(), Some(Card::new(Rank::Three, Suit::Hearts)));
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn odd_split_gives_extra_card_to_second_half() {
        let deck: Deck = full_deck().into_iter().take(5).collect();
        let (a, b) = deck.split_in_half();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }
}
