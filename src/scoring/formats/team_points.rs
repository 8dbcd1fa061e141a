use crate::model::{CourseSetup, Player, RoundScores, TeamPointsHole, TeamPointsStandings, TeamSide};
use crate::scoring::hole_result::player_hole_result;

/// Net-to-par points scale used by this game. Non-standard relative to
/// common Stableford scales, preserved exactly as the trip plays it.
#[must_use]
pub fn points_for_to_par(to_par: i32) -> i32 {
    match to_par {
        i32::MIN..=-2 => 5,
        -1 => 3,
        0 => 1,
        _ => 0,
    }
}

/// Stroke-differential team game: each player's net-to-par converts to
/// points, and a team's hole score is its best member's points (best-ball).
#[must_use]
pub fn compute(course: &CourseSetup, players: &[Player], scores: &RoundScores) -> TeamPointsStandings {
    let holes_in_round = course.total_holes();
    let mut team_one_points = 0i32;
    let mut team_two_points = 0i32;
    let mut holes_scored = 0u8;
    let mut holes: Vec<TeamPointsHole> = Vec::new();

    for hole in &course.holes {
        let mut team_one_best: Option<i32> = None;
        let mut team_two_best: Option<i32> = None;
        let mut complete = true;

        for player in players {
            let Some(team) = player.team else {
                continue;
            };
            let Some(result) = player_hole_result(player, hole, scores, holes_in_round) else {
                complete = false;
                break;
            };
            let points = points_for_to_par(result.to_par);
            let best = match team {
                TeamSide::One => &mut team_one_best,
                TeamSide::Two => &mut team_two_best,
            };
            *best = Some(best.map_or(points, |b: i32| b.max(points)));
        }

        if !complete {
            continue;
        }
        let (Some(one), Some(two)) = (team_one_best, team_two_best) else {
            continue;
        };

        holes_scored += 1;
        team_one_points += one;
        team_two_points += two;
        holes.push(TeamPointsHole {
            hole: hole.number,
            team_one: one,
            team_two: two,
        });
    }

    TeamPointsStandings {
        team_one_points,
        team_two_points,
        holes_scored,
        holes,
    }
}
