use crate::error::EngineError;
use crate::model::player::PlayerId;
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const MIN_GROSS: u8 = 1;
pub const MAX_GROSS: u8 = 20;

/// Raw gross strokes for one round, keyed player -> hole number. A missing
/// entry means the hole has not been scored yet. Entries are overwritten
/// freely by re-scoring; the engine keeps no history.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundScores {
    pub gross: HashMap<PlayerId, BTreeMap<u8, u8>, RandomState>,
}

impl RoundScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one score cell. `None` erases the cell (hole back to
    /// "not yet scored"). Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` when gross is outside 1-20.
    pub fn set_gross(
        &mut self,
        player_id: PlayerId,
        hole: u8,
        gross: Option<u8>,
    ) -> Result<(), EngineError> {
        match gross {
            Some(strokes) => {
                if !(MIN_GROSS..=MAX_GROSS).contains(&strokes) {
                    return Err(EngineError::InvalidConfig(format!(
                        "gross {strokes} on hole {hole} is outside {MIN_GROSS}-{MAX_GROSS}"
                    )));
                }
                self.gross.entry(player_id).or_default().insert(hole, strokes);
            }
            None => {
                if let Some(holes) = self.gross.get_mut(&player_id) {
                    holes.remove(&hole);
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn gross(&self, player_id: PlayerId, hole: u8) -> Option<u8> {
        self.gross.get(&player_id).and_then(|holes| holes.get(&hole)).copied()
    }

    /// True once every listed player has a gross score for the hole.
    #[must_use]
    pub fn hole_complete(&self, hole: u8, player_ids: &[PlayerId]) -> bool {
        !player_ids.is_empty() && player_ids.iter().all(|p| self.gross(*p, hole).is_some())
    }

    /// Number of holes the player has scored so far.
    #[must_use]
    pub fn holes_scored(&self, player_id: PlayerId) -> u8 {
        self.gross.get(&player_id).map_or(0, |holes| holes.len() as u8)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::QuadrupleBogey,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_to_par(value)
    }
}

/// Per-player totals handed to the leaderboard builder. `par_completed` is
/// the par of only the holes the player has actually scored, so to-par stays
/// honest mid-round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerTotal {
    pub player_id: PlayerId,
    pub name: String,
    pub gross_total: i32,
    pub net_total: i32,
    pub par_completed: i32,
    pub thru: u8,
    pub playing_handicap: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Gross,
    Net,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub gross_total: i32,
    pub net_total: i32,
    pub to_par: i32,
    pub thru: u8,
    pub playing_handicap: f32,
    pub rank: u32,
    pub position_label: String,
}
