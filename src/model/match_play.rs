use crate::error::EngineError;
use crate::model::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Singles,
    BestBallNet,
}

impl MatchType {
    #[must_use]
    pub fn players_per_side(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::BestBallNet => 2,
        }
    }
}

/// A side wager nested inside a match: an independent match over holes
/// >= `starting_hole`, with its own stake.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PressSetup {
    pub starting_hole: u8,
    pub stake_per_man_cents: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchSetup {
    pub match_id: i64,
    pub side_one: Vec<PlayerId>,
    pub side_two: Vec<PlayerId>,
    pub match_type: MatchType,
    pub stake_per_man_cents: i64,
    pub presses: Vec<PressSetup>,
}

impl MatchSetup {
    /// Round-setup boundary check: side sizes must match the match type,
    /// no player may appear on both sides, and stakes must be positive.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` describing the first violation.
    pub fn validate(&self, total_holes: u8) -> Result<(), EngineError> {
        let per_side = self.match_type.players_per_side();
        if self.side_one.len() != per_side || self.side_two.len() != per_side {
            return Err(EngineError::InvalidConfig(format!(
                "match {} needs {per_side} player(s) per side, got {} vs {}",
                self.match_id,
                self.side_one.len(),
                self.side_two.len()
            )));
        }
        if self.side_one.iter().any(|p| self.side_two.contains(p)) {
            return Err(EngineError::InvalidConfig(format!(
                "match {} has a player on both sides",
                self.match_id
            )));
        }
        if self.stake_per_man_cents <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "match {} stake must be positive",
                self.match_id
            )));
        }
        for press in &self.presses {
            if press.starting_hole < 1 || press.starting_hole > total_holes {
                return Err(EngineError::InvalidConfig(format!(
                    "press starting hole {} is outside 1-{total_holes}",
                    press.starting_hole
                )));
            }
            if press.stake_per_man_cents <= 0 {
                return Err(EngineError::InvalidConfig(
                    "press stake must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Add a press mid-match. Allowed at any hole up to one past the holes
    /// already played, and only while the parent match is still open.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` when the parent match is already
    /// completed or the starting hole is out of range.
    pub fn add_press(
        &mut self,
        press: PressSetup,
        current_state: &MatchState,
        total_holes: u8,
    ) -> Result<(), EngineError> {
        if current_state.status == MatchStatus::Completed {
            return Err(EngineError::InvalidConfig(format!(
                "match {} is completed, no new presses",
                self.match_id
            )));
        }
        if press.starting_hole < 1
            || press.starting_hole > total_holes
            || press.starting_hole > current_state.thru + 1
        {
            return Err(EngineError::InvalidConfig(format!(
                "press cannot start at hole {} (thru {})",
                press.starting_hole, current_state.thru
            )));
        }
        if press.stake_per_man_cents <= 0 {
            return Err(EngineError::InvalidConfig(
                "press stake must be positive".to_string(),
            ));
        }
        self.presses.push(press);
        Ok(())
    }

    /// Re-price the main stake mid-match. Already-closed presses keep the
    /// stake they were created with.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` once the match is completed.
    pub fn set_stake(
        &mut self,
        stake_per_man_cents: i64,
        current_state: &MatchState,
    ) -> Result<(), EngineError> {
        if current_state.status == MatchStatus::Completed {
            return Err(EngineError::InvalidConfig(format!(
                "match {} is completed, stake is locked",
                self.match_id
            )));
        }
        if stake_per_man_cents <= 0 {
            return Err(EngineError::InvalidConfig(
                "stake must be positive".to_string(),
            ));
        }
        self.stake_per_man_cents = stake_per_man_cents;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::NotStarted => "not started",
            MatchStatus::InProgress => "in progress",
            MatchStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// Derived state of one press, recomputed from scratch on every query.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PressState {
    pub starting_hole: u8,
    pub stake_per_man_cents: i64,
    pub lead: i32,
    pub thru: u8,
    pub holes_remaining: u8,
    pub dormie: bool,
    pub status: MatchStatus,
    pub result: Option<String>,
}

/// Derived state of a match. `lead` is signed, positive favoring side one.
/// Money fields are from side one's perspective.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchState {
    pub match_id: i64,
    pub status: MatchStatus,
    pub lead: i32,
    pub thru: u8,
    pub holes_remaining: u8,
    pub dormie: bool,
    pub result: Option<String>,
    pub presses: Vec<PressState>,
    pub total_exposure_cents: i64,
    pub current_position_cents: i64,
}
