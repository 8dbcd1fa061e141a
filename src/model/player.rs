use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type PlayerId = i64;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    One,
    Two,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamSide::One => "team 1",
            TeamSide::Two => "team 2",
        };
        write!(f, "{s}")
    }
}

/// A trip player as the engine sees them. `playing_handicap` is signed;
/// negative means a plus player who gives strokes back.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub playing_handicap: f32,
    pub team: Option<TeamSide>,
}

impl Player {
    #[must_use]
    pub fn short_name(&self) -> String {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        if parts.len() >= 2 {
            let first_initial = parts[0].chars().next().unwrap_or(' ');
            let last_name = parts[parts.len() - 1];
            format!("{first_initial}. {last_name}")
        } else {
            self.name.clone()
        }
    }
}

#[must_use]
pub fn player_index(players: &[Player]) -> HashMap<PlayerId, &Player, RandomState> {
    players.iter().map(|p| (p.player_id, p)).collect()
}

#[must_use]
pub fn team_members<'a>(players: &'a [Player], side: TeamSide) -> Vec<&'a Player> {
    players.iter().filter(|p| p.team == Some(side)).collect()
}
