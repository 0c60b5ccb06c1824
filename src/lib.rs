// Library crate for the Gin Rummy table
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod table;

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, TableConfig};
pub use game::{
    Card, Deck, DeckError, Difficulty, GameError, GameSession, Hand, Rank, Suit, DECK_SIZE,
    HAND_SIZE,
};
pub use table::{Table, TableSnapshot};
