use crate::error::EngineError;
use crate::model::{
    FormatStandings, LeaderboardEntry, MatchState, PlayerBalance, RoundScores, ScoringMode,
    SettlementTransaction,
};
use crate::scoring::formats::compute_format_standings;
use crate::scoring::leaderboard::{build_leaderboard, merge_totals, player_totals};
use crate::scoring::match_engine::{completed_match_balances, compute_match_state};
use crate::scoring::settlement::{merge_balances, net_settlements};
use crate::storage::{RoundSetup, ScoreStore};
use serde::{Deserialize, Serialize};

/// Everything the live and spectator screens need for one round, derived in
/// one full replay of the current score set.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundView {
    pub round_id: i64,
    pub match_state: Option<MatchState>,
    pub formats: Vec<FormatStandings>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TripView {
    pub trip_id: i64,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub balances: Vec<PlayerBalance>,
    pub settlement: Vec<SettlementTransaction>,
}

/// Derive a round view from an immutable snapshot. Pure: identical inputs
/// always produce an identical view, so callers may recompute as often as
/// they like.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when the round setup violates its
/// invariants.
pub fn round_view_from_snapshot(
    setup: &RoundSetup,
    scores: &RoundScores,
    mode: ScoringMode,
) -> Result<RoundView, EngineError> {
    setup.course.validate()?;

    let match_state = match &setup.match_setup {
        Some(match_setup) => {
            match_setup.validate(setup.course.total_holes())?;
            Some(compute_match_state(
                match_setup,
                &setup.course,
                &setup.players,
                scores,
            )?)
        }
        None => None,
    };

    let mut formats = Vec::with_capacity(setup.formats.len());
    for format in &setup.formats {
        formats.push(compute_format_standings(
            format,
            &setup.course,
            &setup.players,
            scores,
        )?);
    }

    let totals = player_totals(&setup.course, &setup.players, scores);
    let leaderboard = build_leaderboard(&totals, mode);

    Ok(RoundView {
        round_id: setup.round_id,
        match_state,
        formats,
        leaderboard,
    })
}

/// Derive the trip-wide leaderboard and the money plan from every round's
/// snapshot. Only completed matches and presses move money.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when any round setup violates its
/// invariants.
pub fn trip_view_from_snapshots(
    trip_id: i64,
    rounds: &[(RoundSetup, RoundScores)],
    mode: ScoringMode,
) -> Result<TripView, EngineError> {
    let mut per_round_totals = Vec::with_capacity(rounds.len());
    let mut per_match_balances = Vec::new();

    for (setup, scores) in rounds {
        setup.course.validate()?;
        per_round_totals.push(player_totals(&setup.course, &setup.players, scores));
        if let Some(match_setup) = &setup.match_setup {
            match_setup.validate(setup.course.total_holes())?;
            per_match_balances.push(completed_match_balances(
                match_setup,
                &setup.course,
                &setup.players,
                scores,
            )?);
        }
    }

    let totals = merge_totals(&per_round_totals);
    let leaderboard = build_leaderboard(&totals, mode);
    let balances = merge_balances(&per_match_balances);
    let settlement = net_settlements(&balances)?;

    Ok(TripView {
        trip_id,
        leaderboard,
        balances,
        settlement,
    })
}

/// Pull one round from the store and derive its view.
///
/// # Errors
///
/// Returns an error if the store fails or the setup is invalid.
pub async fn load_round_view(
    store: &dyn ScoreStore,
    round_id: i64,
    mode: ScoringMode,
) -> Result<RoundView, EngineError> {
    let setup = store.get_round_setup(round_id).await?;
    let scores = store.get_round_scores(round_id).await?;
    round_view_from_snapshot(&setup, &scores, mode)
}

/// Pull one round from the store and derive just its match state.
///
/// # Errors
///
/// Returns `EngineError::NotConfigured` when the round has no match set up;
/// that is a setup prompt for the caller, not a computation failure.
pub async fn load_match_state(
    store: &dyn ScoreStore,
    round_id: i64,
) -> Result<MatchState, EngineError> {
    let setup = store.get_round_setup(round_id).await?;
    let Some(match_setup) = &setup.match_setup else {
        return Err(EngineError::NotConfigured(format!(
            "round {round_id} has no match"
        )));
    };
    match_setup.validate(setup.course.total_holes())?;
    let scores = store.get_round_scores(round_id).await?;
    compute_match_state(match_setup, &setup.course, &setup.players, &scores)
}

/// Pull every round of a trip and derive the trip view.
///
/// # Errors
///
/// Returns an error if the store fails or any round setup is invalid.
pub async fn load_trip_view(
    store: &dyn ScoreStore,
    trip_id: i64,
    mode: ScoringMode,
) -> Result<TripView, EngineError> {
    let round_ids = store.get_trip_rounds(trip_id).await?;
    let mut rounds = Vec::with_capacity(round_ids.len());
    for round_id in round_ids {
        let setup = store.get_round_setup(round_id).await?;
        let scores = store.get_round_scores(round_id).await?;
        rounds.push((setup, scores));
    }
    trip_view_from_snapshots(trip_id, &rounds, mode)
}
