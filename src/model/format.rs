use crate::error::EngineError;
use crate::model::match_play::MatchStatus;
use crate::model::player::{Player, PlayerId, TeamSide, team_members};
use serde::{Deserialize, Serialize};

/// Closed set of side-game formats. Adding a format means adding a variant
/// here and a reducer arm in `scoring::formats`, nothing else.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    LowHigh,
    TeamPoints,
    Skins,
    Nassau,
}

/// Per-round side-game configuration. `stake_cents` is the per-skin value
/// for skins and the per-segment stake for nassau; the points formats
/// carry no money of their own.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FormatSetup {
    pub format_id: i64,
    pub kind: FormatKind,
    pub stake_cents: i64,
}

impl FormatSetup {
    /// Round-setup boundary check: team formats need both teams populated,
    /// the points formats need the observed 2-per-team shape, skins needs
    /// at least two players.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` describing the first violation.
    pub fn validate(&self, players: &[Player]) -> Result<(), EngineError> {
        match self.kind {
            FormatKind::LowHigh | FormatKind::TeamPoints => {
                let team_one = team_members(players, TeamSide::One);
                let team_two = team_members(players, TeamSide::Two);
                if team_one.len() != 2 || team_two.len() != 2 {
                    return Err(EngineError::InvalidConfig(format!(
                        "{:?} needs exactly 4 players, 2 per team, got {} vs {}",
                        self.kind,
                        team_one.len(),
                        team_two.len()
                    )));
                }
            }
            FormatKind::Skins => {
                if players.len() < 2 {
                    return Err(EngineError::InvalidConfig(
                        "skins needs at least 2 players".to_string(),
                    ));
                }
                if self.stake_cents <= 0 {
                    return Err(EngineError::InvalidConfig(
                        "skin value must be positive".to_string(),
                    ));
                }
            }
            FormatKind::Nassau => {
                let team_one = team_members(players, TeamSide::One);
                let team_two = team_members(players, TeamSide::Two);
                if team_one.is_empty()
                    || team_two.is_empty()
                    || team_one.len() > 2
                    || team_two.len() > 2
                {
                    return Err(EngineError::InvalidConfig(format!(
                        "nassau needs 1 or 2 players per team, got {} vs {}",
                        team_one.len(),
                        team_two.len()
                    )));
                }
                if self.stake_cents <= 0 {
                    return Err(EngineError::InvalidConfig(
                        "nassau stake must be positive".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LowHighAwardKind {
    Low,
    High,
}

/// One player's share of a hole's low or high point, kept for UI narration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LowHighAward {
    pub hole: u8,
    pub player_id: PlayerId,
    pub kind: LowHighAwardKind,
    pub points: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LowHighStandings {
    pub team_one_points: f32,
    pub team_two_points: f32,
    pub holes_scored: u8,
    pub awards: Vec<LowHighAward>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamPointsHole {
    pub hole: u8,
    pub team_one: i32,
    pub team_two: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamPointsStandings {
    pub team_one_points: i32,
    pub team_two_points: i32,
    pub holes_scored: u8,
    pub holes: Vec<TeamPointsHole>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinAward {
    pub hole: u8,
    pub player_id: PlayerId,
    pub skins: u8,
    pub value_cents: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinsStandings {
    pub awards: Vec<SkinAward>,
    pub holes_scored: u8,
    /// Skins still riding on the next hole at the point of computation.
    pub carried: u8,
}

/// One nassau segment (front nine, back nine, or overall), run through the
/// same lead/dormie/closure logic as a match.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NassauLeg {
    pub label: String,
    pub first_hole: u8,
    pub last_hole: u8,
    pub stake_cents: i64,
    pub lead: i32,
    pub thru: u8,
    pub holes_remaining: u8,
    pub dormie: bool,
    pub status: MatchStatus,
    pub result: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NassauStandings {
    pub front: NassauLeg,
    pub back: NassauLeg,
    pub overall: NassauLeg,
}

/// Tagged per-format standings, dispatched by `FormatKind`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "format")]
pub enum FormatStandings {
    LowHigh(LowHighStandings),
    TeamPoints(TeamPointsStandings),
    Skins(SkinsStandings),
    Nassau(NassauStandings),
}
