use crate::model::{
    CourseSetup, LowHighAward, LowHighAwardKind, LowHighStandings, Player, RoundScores, TeamSide,
};
use crate::scoring::hole_result::player_hole_result;

/// Points-split team game: every complete hole carries a 2-point pool, one
/// point to the single lowest net and one to the single highest net across
/// both teams, each split evenly on ties. Team totals are the sum of member
/// awards.
#[must_use]
pub fn compute(course: &CourseSetup, players: &[Player], scores: &RoundScores) -> LowHighStandings {
    let holes_in_round = course.total_holes();
    let mut team_one_points = 0f32;
    let mut team_two_points = 0f32;
    let mut holes_scored = 0u8;
    let mut awards: Vec<LowHighAward> = Vec::new();

    for hole in &course.holes {
        let mut nets: Vec<(i64, TeamSide, i32)> = Vec::with_capacity(players.len());
        let mut complete = true;
        for player in players {
            let Some(team) = player.team else {
                continue;
            };
            match player_hole_result(player, hole, scores, holes_in_round) {
                Some(result) => nets.push((player.player_id, team, result.net)),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete || nets.is_empty() {
            continue;
        }
        holes_scored += 1;

        let low = nets.iter().map(|(_, _, net)| *net).min().unwrap_or(0);
        let high = nets.iter().map(|(_, _, net)| *net).max().unwrap_or(0);
        let low_count = nets.iter().filter(|(_, _, net)| *net == low).count();
        let high_count = nets.iter().filter(|(_, _, net)| *net == high).count();

        for (player_id, team, net) in &nets {
            let mut credit = |kind: LowHighAwardKind, share: f32| {
                match team {
                    TeamSide::One => team_one_points += share,
                    TeamSide::Two => team_two_points += share,
                }
                awards.push(LowHighAward {
                    hole: hole.number,
                    player_id: *player_id,
                    kind,
                    points: share,
                });
            };
            if *net == low {
                credit(LowHighAwardKind::Low, 1.0 / low_count as f32);
            }
            if *net == high {
                credit(LowHighAwardKind::High, 1.0 / high_count as f32);
            }
        }
    }

    LowHighStandings {
        team_one_points,
        team_two_points,
        holes_scored,
        awards,
    }
}
