// Public API
pub use cards::{Card, CardParseError, Hand, Rank, Suit};
pub use deck::{Deck, DeckError, DECK_SIZE};
pub use difficulty::{Difficulty, DifficultyParseError};
pub use session::{GameError, GameSession, HAND_SIZE};

// Internal modules
mod cards;
mod deck;
mod difficulty;
mod session;
