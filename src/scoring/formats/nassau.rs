use crate::model::{
    CourseSetup, FormatSetup, NassauLeg, NassauStandings, Player, RoundScores, TeamSide,
    team_members,
};
use crate::scoring::match_engine::replay_window;

fn leg(
    label: &str,
    first_hole: u8,
    last_hole: u8,
    stake_cents: i64,
    course: &CourseSetup,
    scores: &RoundScores,
    side_one: &[&Player],
    side_two: &[&Player],
) -> NassauLeg {
    let outcome = replay_window(course, scores, side_one, side_two, first_hole, last_hole);
    NassauLeg {
        label: label.to_string(),
        first_hole,
        last_hole,
        stake_cents,
        lead: outcome.lead,
        thru: outcome.thru,
        holes_remaining: outcome.holes_remaining,
        dormie: outcome.dormie,
        status: outcome.status,
        result: outcome.result,
    }
}

/// Nassau: three sub-matches over the same score stream — front nine, back
/// nine, and the overall round — each with its own stake and each run
/// through the same lead/dormie/closure machine as a match.
#[must_use]
pub fn compute(
    setup: &FormatSetup,
    course: &CourseSetup,
    players: &[Player],
    scores: &RoundScores,
) -> NassauStandings {
    let side_one = team_members(players, TeamSide::One);
    let side_two = team_members(players, TeamSide::Two);
    let total = course.total_holes();
    let turn = total / 2;

    NassauStandings {
        front: leg(
            "front",
            1,
            turn,
            setup.stake_cents,
            course,
            scores,
            &side_one,
            &side_two,
        ),
        back: leg(
            "back",
            turn + 1,
            total,
            setup.stake_cents,
            course,
            scores,
            &side_one,
            &side_two,
        ),
        overall: leg(
            "overall",
            1,
            total,
            setup.stake_cents,
            course,
            scores,
            &side_one,
            &side_two,
        ),
    }
}
