use crate::model::{CourseSetup, FormatSetup, Player, RoundScores, SkinAward, SkinsStandings};
use crate::scoring::hole_result::player_hole_result;

/// Carryover skins: each hole is worth one skin plus whatever carried in;
/// an outright lowest net takes the pot, any tie pushes it to the next hole.
/// Holes resolve strictly in order, so replay stops at the first hole not
/// yet scored by everyone.
#[must_use]
pub fn compute(
    setup: &FormatSetup,
    course: &CourseSetup,
    players: &[Player],
    scores: &RoundScores,
) -> SkinsStandings {
    let holes_in_round = course.total_holes();
    let mut awards: Vec<SkinAward> = Vec::new();
    let mut holes_scored = 0u8;
    let mut carried = 0u8;

    for hole in &course.holes {
        let mut nets: Vec<(i64, i32)> = Vec::with_capacity(players.len());
        let mut complete = true;
        for player in players {
            match player_hole_result(player, hole, scores, holes_in_round) {
                Some(result) => nets.push((player.player_id, result.net)),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            break;
        }
        holes_scored += 1;

        let pot = carried + 1;
        let low = nets.iter().map(|(_, net)| *net).min().unwrap_or(0);
        let mut winners = nets.iter().filter(|(_, net)| *net == low);
        let first = winners.next();
        if let (Some((player_id, _)), None) = (first, winners.next()) {
            awards.push(SkinAward {
                hole: hole.number,
                player_id: *player_id,
                skins: pot,
                value_cents: i64::from(pot) * setup.stake_cents,
            });
            carried = 0;
        } else {
            carried = pot;
        }
    }

    SkinsStandings {
        awards,
        holes_scored,
        carried,
    }
}
