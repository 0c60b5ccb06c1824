// A session is one dealt game: a shuffled deck, the player's hand and the opponent's hand.
// Nothing is played yet, so after the deal a session is read-only.
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::game::cards::Hand;
use crate::game::deck::{Deck, DeckError};
use crate::game::difficulty::Difficulty;

/// Cards dealt to each participant.
pub const HAND_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Deal failed: {0}")]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    difficulty: Difficulty,
    created_at: DateTime<Utc>,
    deck: Deck, // Stock left after the deal
    player_hand: Hand,
    opponent_hand: Hand,
}

impl GameSession {
    /// Deals a new session from a freshly shuffled deck.
    pub fn new(difficulty: Difficulty) -> Result<Self, GameError> {
        Self::with_rng(difficulty, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::deal_from(Deck::shuffled(rng), difficulty)
    }

    /// Deals from `deck` as given, without shuffling. Cards alternate between the
    /// player and the opponent, player first, until both hold `HAND_SIZE` cards.
    #[instrument(skip(deck), fields(deck_size = deck.len()))]
    pub fn deal_from(mut deck: Deck, difficulty: Difficulty) -> Result<Self, GameError> {
        let mut player_hand = Hand::new();
        let mut opponent_hand = Hand::new();

        for _ in 0..HAND_SIZE {
            player_hand.push(deck.draw()?);
            opponent_hand.push(deck.draw()?);
        }

        let session = Self {
            id: Uuid::new_v4(),
            difficulty,
            created_at: Utc::now(),
            deck,
            player_hand,
            opponent_hand,
        };

        debug!(
            session_id = %session.id,
            difficulty = %difficulty,
            stock_remaining = session.deck.len(),
            "Dealt new session"
        );

        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
