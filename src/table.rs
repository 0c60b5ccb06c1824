use std::fmt;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::TableConfig;
use crate::game::{Card, Difficulty, GameError, GameSession};

/// Glyph shown in place of a face-down card.
pub const CARD_BACK: &str = "🂠";

/// Holds the one session currently on the table. Selecting a difficulty deals a
/// replacement session and discards the old one.
pub struct Table {
    rng: StdRng,
    current: GameSession,
}

impl Table {
    pub fn new(config: &TableConfig) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let current = GameSession::with_rng(config.default_difficulty, &mut rng)?;

        info!(
            session_id = %current.id(),
            difficulty = %current.difficulty(),
            seeded = config.seed.is_some(),
            "Opened table"
        );

        Ok(Self { rng, current })
    }

    /// Deals a new session at `difficulty` and makes it current. The previous
    /// session stays current if the deal fails.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<&GameSession, GameError> {
        let replacement = GameSession::with_rng(difficulty, &mut self.rng)?;
        let previous = std::mem::replace(&mut self.current, replacement);

        info!(
            previous_session = %previous.id(),
            session_id = %self.current.id(),
            "Replaced current session"
        );

        Ok(&self.current)
    }

    pub fn select_position(&mut self, position: usize) -> Result<&GameSession, GameError> {
        self.select_difficulty(Difficulty::from_position(position))
    }

    pub fn current(&self) -> &GameSession {
        &self.current
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::from(&self.current)
    }
}

/// What the host may show: the player's cards face up and only the number of
/// opponent cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub session_id: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub player: Vec<Card>,
    pub opponent_card_count: usize,
    pub stock_remaining: usize,
}

impl From<&GameSession> for TableSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            difficulty: session.difficulty(),
            created_at: session.created_at(),
            player: session.player_hand().cards().to_vec(),
            opponent_card_count: session.opponent_hand().len(),
            stock_remaining: session.deck().len(),
        }
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backs = vec![CARD_BACK; self.opponent_card_count];
        let player: Vec<String> = self.player.iter().map(Card::to_string).collect();

        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(
            f,
            "Dealt:      {}",
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Opponent:   {}", backs.join(" "))?;
        writeln!(f, "Stock:      {} cards", self.stock_remaining)?;
        write!(f, "Player:     {}", player.join(" "))
    }
}
