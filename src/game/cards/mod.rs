pub mod basic;
pub mod hand;


pub use basic::{Card, CardParseError, Rank, Suit};
pub use hand::Hand;
