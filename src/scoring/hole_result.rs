use crate::model::{HoleSpec, Player, RoundScores, ScoreDisplay};
use crate::scoring::handicap::strokes_for_hole;
use serde::{Deserialize, Serialize};

/// One player's computed result on one hole. Only exists once the player has
/// a gross score there.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerHoleResult {
    pub player_id: i64,
    pub gross: u8,
    pub strokes: i32,
    pub net: i32,
    pub to_par: i32,
    pub display: ScoreDisplay,
}

#[must_use]
pub fn player_hole_result(
    player: &Player,
    hole: &HoleSpec,
    scores: &RoundScores,
    holes_in_round: u8,
) -> Option<PlayerHoleResult> {
    let gross = scores.gross(player.player_id, hole.number)?;
    let strokes = strokes_for_hole(player.playing_handicap, hole.stroke_index, holes_in_round);
    let net = i32::from(gross) - strokes;
    let to_par = net - i32::from(hole.par);
    Some(PlayerHoleResult {
        player_id: player.player_id,
        gross,
        strokes,
        net,
        to_par,
        display: ScoreDisplay::from_to_par(to_par),
    })
}

/// Best (lowest) net on the hole across a side's players. `None` until every
/// player on the side has a gross score there.
#[must_use]
pub fn side_best_net(
    side: &[&Player],
    hole: &HoleSpec,
    scores: &RoundScores,
    holes_in_round: u8,
) -> Option<i32> {
    if side.is_empty() {
        return None;
    }
    let mut best: Option<i32> = None;
    for player in side {
        let result = player_hole_result(player, hole, scores, holes_in_round)?;
        best = Some(best.map_or(result.net, |b| b.min(result.net)));
    }
    best
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoleVerdict {
    SideOne,
    SideTwo,
    Halved,
}

impl HoleVerdict {
    /// Contribution to a signed lead, positive favoring side one.
    #[must_use]
    pub fn lead_delta(self) -> i32 {
        match self {
            HoleVerdict::SideOne => 1,
            HoleVerdict::SideTwo => -1,
            HoleVerdict::Halved => 0,
        }
    }
}

/// Head-to-head verdict for one hole, best-ball per side. `None` while any
/// required player is still unscored; incomplete holes are not an error.
#[must_use]
pub fn hole_verdict(
    side_one: &[&Player],
    side_two: &[&Player],
    hole: &HoleSpec,
    scores: &RoundScores,
    holes_in_round: u8,
) -> Option<HoleVerdict> {
    let one = side_best_net(side_one, hole, scores, holes_in_round)?;
    let two = side_best_net(side_two, hole, scores, holes_in_round)?;
    Some(match one.cmp(&two) {
        std::cmp::Ordering::Less => HoleVerdict::SideOne,
        std::cmp::Ordering::Greater => HoleVerdict::SideTwo,
        std::cmp::Ordering::Equal => HoleVerdict::Halved,
    })
}
