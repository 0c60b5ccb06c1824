//! Assertion helpers for dealt sessions
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::collections::HashSet;

use ginrummy::{Card, GameSession, DECK_SIZE, HAND_SIZE};

pub struct SessionAssertion<'a> {
    session: &'a GameSession,
}

impl<'a> SessionAssertion<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    /// Both hands are full and the stock holds the rest
    pub fn is_fully_dealt(self) -> Self {
        assert_eq!(self.session.player_hand().len(), HAND_SIZE, "player hand size");
        assert_eq!(self.session.opponent_hand().len(), HAND_SIZE, "opponent hand size");
        assert_eq!(
            self.session.deck().len(),
            DECK_SIZE - 2 * HAND_SIZE,
            "stock size"
        );
        self
    }

    /// Hands and stock together hold every standard card exactly once
    pub fn accounts_for_every_card(self) -> Self {
        let all: Vec<&Card> = self
            .session
            .player_hand()
            .iter()
            .chain(self.session.opponent_hand().iter())
            .chain(self.session.deck().iter())
            .collect();
        let unique: HashSet<&Card> = all.iter().copied().collect();

        assert_eq!(all.len(), DECK_SIZE, "card count");
        assert_eq!(unique.len(), DECK_SIZE, "duplicate cards dealt");
        for card in Card::all_cards() {
            assert!(unique.contains(&card), "{card} missing from session");
        }
        self
    }

    pub fn hands_are_disjoint(self) -> Self {
        for card in self.session.player_hand() {
            assert!(
                !self.session.opponent_hand().contains(card),
                "{card} is in both hands"
            );
        }
        self
    }
}
