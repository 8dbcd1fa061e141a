use crate::model::{CourseSetup, FormatSetup, MatchSetup, Player, PlayerId, RoundScores};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Read-only snapshot of one round's configuration, assembled by the
/// round-setup collaborators and handed to the engine as-is.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundSetup {
    pub round_id: i64,
    pub course: CourseSetup,
    pub players: Vec<Player>,
    pub match_setup: Option<MatchSetup>,
    pub formats: Vec<FormatSetup>,
}

#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoreError {}

impl From<String> for StoreError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StoreError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The external score store the scoring devices write into. The engine only
/// ever reads whole snapshots and recomputes; concurrent writers to the same
/// (round, player, hole) cell are last-write-wins upstream.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn get_round_setup(&self, round_id: i64) -> Result<RoundSetup, StoreError>;
    async fn get_round_scores(&self, round_id: i64) -> Result<RoundScores, StoreError>;
    async fn store_score(
        &self,
        round_id: i64,
        player_id: PlayerId,
        hole: u8,
        gross: Option<u8>,
    ) -> Result<(), StoreError>;
    async fn get_trip_rounds(&self, trip_id: i64) -> Result<Vec<i64>, StoreError>;
}
