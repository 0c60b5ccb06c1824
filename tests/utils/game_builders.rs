//! Builders for decks and tables with known contents
#![allow(dead_code)] // Test utilities may not all be used in every test

use ginrummy::{Card, Deck, Table, TableConfig};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(ginrummy::Card::new(ginrummy::Rank::$rank, ginrummy::Suit::$suit)),*]
    };
}

// ============================================================================
// Deck Setup Utilities
// ============================================================================

/// Stacks a deck: the given cards on top, in order, optionally followed by the
/// rest of a standard deck.
pub struct DeckBuilder {
    top: Vec<Card>,
    fill: bool,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self {
            top: vec![],
            fill: false,
        }
    }

    pub fn with_top(mut self, cards: Vec<Card>) -> Self {
        self.top.extend(cards);
        self
    }

    /// Append every standard card not already on top
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn build(self) -> Deck {
        let mut cards = self.top;
        if self.fill {
            let rest: Vec<Card> = Card::all_cards()
                .into_iter()
                .filter(|card| !cards.contains(card))
                .collect();
            cards.extend(rest);
        }
        Deck::from_cards(cards)
    }
}

pub fn seeded_table(seed: u64) -> Table {
    Table::new(&TableConfig::default().with_seed(seed)).expect("a full deck always deals")
}
