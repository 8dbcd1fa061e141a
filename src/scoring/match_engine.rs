use crate::error::EngineError;
use crate::model::{
    CourseSetup, MatchSetup, MatchState, MatchStatus, Player, PlayerBalance, PlayerId, PressState,
    RoundScores,
};
use crate::scoring::hole_result::hole_verdict;
use ahash::RandomState;
use std::collections::HashMap;

/// Outcome of replaying one hole window for two sides: the shared core of
/// the main match, every press, and each nassau leg.
#[derive(Clone, Debug)]
pub struct LegOutcome {
    pub lead: i32,
    pub thru: u8,
    pub holes_remaining: u8,
    pub dormie: bool,
    pub status: MatchStatus,
    pub result: Option<String>,
}

/// Replay holes `first_hole..=last_hole` in order, accumulating a signed
/// lead (positive favors side one). Replay stops at the first hole missing a
/// required score, and stops consuming holes once the window is
/// mathematically decided, so a decided result never regresses.
#[must_use]
pub fn replay_window(
    course: &CourseSetup,
    scores: &RoundScores,
    side_one: &[&Player],
    side_two: &[&Player],
    first_hole: u8,
    last_hole: u8,
) -> LegOutcome {
    let window_len = last_hole.saturating_sub(first_hole) + 1;
    let holes_in_round = course.total_holes();

    let mut lead = 0i32;
    let mut thru = 0u8;
    let mut completed = false;
    let mut result: Option<String> = None;

    for hole_number in first_hole..=last_hole {
        let Some(hole) = course.hole(hole_number) else {
            break;
        };
        let Some(verdict) = hole_verdict(side_one, side_two, hole, scores, holes_in_round) else {
            break;
        };

        lead += verdict.lead_delta();
        thru += 1;
        let remaining = window_len - thru;

        if lead.unsigned_abs() > u32::from(remaining) {
            completed = true;
            result = Some(if remaining > 0 {
                format!("{}&{}", lead.abs(), remaining)
            } else {
                format!("{} up", lead.abs())
            });
            break;
        }
        if remaining == 0 {
            // All holes played and nobody clear of the other side.
            completed = true;
            result = Some("AS".to_string());
            break;
        }
    }

    let holes_remaining = window_len - thru;
    let status = if completed {
        MatchStatus::Completed
    } else if thru == 0 {
        MatchStatus::NotStarted
    } else {
        MatchStatus::InProgress
    };
    let dormie =
        status == MatchStatus::InProgress && lead != 0 && lead.unsigned_abs() == u32::from(holes_remaining);

    LegOutcome {
        lead,
        thru,
        holes_remaining,
        dormie,
        status,
        result,
    }
}

fn resolve_side<'a>(
    side: &[PlayerId],
    index: &HashMap<PlayerId, &'a Player, RandomState>,
    match_id: i64,
) -> Result<Vec<&'a Player>, EngineError> {
    side.iter()
        .map(|id| {
            index.get(id).copied().ok_or_else(|| {
                EngineError::InvalidConfig(format!("match {match_id} references unknown player {id}"))
            })
        })
        .collect()
}

/// Full replay of a match and all of its presses from the current score set.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when the match references players
/// missing from the roster.
pub fn compute_match_state(
    setup: &MatchSetup,
    course: &CourseSetup,
    players: &[Player],
    scores: &RoundScores,
) -> Result<MatchState, EngineError> {
    let index = crate::model::player_index(players);
    let side_one = resolve_side(&setup.side_one, &index, setup.match_id)?;
    let side_two = resolve_side(&setup.side_two, &index, setup.match_id)?;
    let total_holes = course.total_holes();

    let main = replay_window(course, scores, &side_one, &side_two, 1, total_holes);

    let mut presses = Vec::with_capacity(setup.presses.len());
    for press in &setup.presses {
        let leg = replay_window(
            course,
            scores,
            &side_one,
            &side_two,
            press.starting_hole,
            total_holes,
        );
        presses.push(PressState {
            starting_hole: press.starting_hole,
            stake_per_man_cents: press.stake_per_man_cents,
            lead: leg.lead,
            thru: leg.thru,
            holes_remaining: leg.holes_remaining,
            dormie: leg.dormie,
            status: leg.status,
            result: leg.result,
        });
    }

    let per_side = setup.match_type.players_per_side() as i64;
    let mut total_exposure_cents = setup.stake_per_man_cents * per_side;
    let mut current_position_cents = i64::from(main.lead) * setup.stake_per_man_cents * per_side;
    for press in &presses {
        if press.status != MatchStatus::Completed {
            total_exposure_cents += press.stake_per_man_cents * per_side;
            current_position_cents += i64::from(press.lead) * press.stake_per_man_cents * per_side;
        }
    }

    Ok(MatchState {
        match_id: setup.match_id,
        status: main.status,
        lead: main.lead,
        thru: main.thru,
        holes_remaining: main.holes_remaining,
        dormie: main.dormie,
        result: main.result,
        presses,
        total_exposure_cents,
        current_position_cents,
    })
}

/// Signed per-player money from a match's closed wagers: each man on the
/// losing side of the main match or a completed press pays its stake, each
/// man on the winning side collects it. Halved wagers move nothing. Players
/// with no closed money yet still appear, at zero.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when the match references players
/// missing from the roster.
pub fn completed_match_balances(
    setup: &MatchSetup,
    course: &CourseSetup,
    players: &[Player],
    scores: &RoundScores,
) -> Result<Vec<PlayerBalance>, EngineError> {
    let state = compute_match_state(setup, course, players, scores)?;
    let index = crate::model::player_index(players);

    let mut totals: Vec<PlayerBalance> = setup
        .side_one
        .iter()
        .chain(setup.side_two.iter())
        .map(|id| PlayerBalance {
            player_id: *id,
            name: index.get(id).map(|p| p.name.clone()).unwrap_or_default(),
            net_cents: 0,
        })
        .collect();

    let mut settle = |lead: i32, stake_per_man_cents: i64| {
        if lead == 0 {
            return;
        }
        for balance in &mut totals {
            let on_side_one = setup.side_one.contains(&balance.player_id);
            let wins = (lead > 0) == on_side_one;
            balance.net_cents += if wins {
                stake_per_man_cents
            } else {
                -stake_per_man_cents
            };
        }
    };

    if state.status == MatchStatus::Completed {
        settle(state.lead, setup.stake_per_man_cents);
    }
    for press in &state.presses {
        if press.status == MatchStatus::Completed {
            settle(press.lead, press.stake_per_man_cents);
        }
    }

    Ok(totals)
}
