use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};
use tracing::trace;

use super::cards::Card;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("Cannot draw from an empty deck")]
    EmptySupply,
}

/// The supply of cards not yet dealt. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full, unshuffled 52-card deck.
    pub fn new() -> Self {
        Self::from_cards(Card::all_cards())
    }

    /// A deck holding exactly `cards`, top card first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Permutes the cards still in the deck. Already drawn cards are unaffected.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        trace!(remaining = self.cards.len(), "Shuffled deck");
    }

    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptySupply)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{Rank, Suit};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn sorted(cards: impl Iterator<Item = Card>) -> Vec<Card> {
        let mut cards: Vec<Card> = cards.collect();
        cards.sort();
        cards
    }

    #[test]
    fn test_new_deck_has_every_card_once() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_new_deck_draws_in_canonical_order() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.draw(), Ok(Card::new(Rank::Two, Suit::Spades)));
        assert_eq!(deck.len(), DECK_SIZE - 2);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(
            sorted(deck.iter().copied()),
            sorted(Card::all_cards().into_iter())
        );
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::shuffled(&mut rng);

        // 1 in 52! chance of a false failure
        assert_ne!(deck, Deck::new());
    }

    #[test]
    fn test_shuffle_after_draw_only_touches_remaining_cards() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new();
        let first = deck.draw().unwrap();
        let second = deck.draw().unwrap();

        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE - 2);
        assert!(!deck.iter().any(|card| *card == first || *card == second));

        let expected: Vec<Card> = Card::all_cards().into_iter().skip(2).collect();
        assert_eq!(sorted(deck.iter().copied()), sorted(expected.into_iter()));
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut deck = Deck::from_cards(vec![Card::new(Rank::Seven, Suit::Diamonds)]);

        assert_eq!(deck.draw(), Ok(Card::new(Rank::Seven, Suit::Diamonds)));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::EmptySupply));
        // Still empty, still an error
        assert_eq!(deck.draw(), Err(DeckError::EmptySupply));
    }

    #[test]
    fn test_exhausting_full_deck() {
        let mut deck = Deck::new();
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_ok());
        }
        assert_eq!(deck.draw(), Err(DeckError::EmptySupply));
    }
}
