use crate::model::{
    CourseSetup, LeaderboardEntry, Player, PlayerTotal, RoundScores, ScoringMode,
};
use crate::scoring::hole_result::player_hole_result;

/// Per-player gross/net totals over the holes each player has scored.
/// Output order follows the roster; sorting is the builder's job.
#[must_use]
pub fn player_totals(course: &CourseSetup, players: &[Player], scores: &RoundScores) -> Vec<PlayerTotal> {
    let holes_in_round = course.total_holes();
    players
        .iter()
        .map(|player| {
            let mut gross_total = 0i32;
            let mut net_total = 0i32;
            let mut par_completed = 0i32;
            let mut thru = 0u8;
            for hole in &course.holes {
                if let Some(result) = player_hole_result(player, hole, scores, holes_in_round) {
                    gross_total += i32::from(result.gross);
                    net_total += result.net;
                    par_completed += i32::from(hole.par);
                    thru += 1;
                }
            }
            PlayerTotal {
                player_id: player.player_id,
                name: player.name.clone(),
                gross_total,
                net_total,
                par_completed,
                thru,
                playing_handicap: player.playing_handicap,
            }
        })
        .collect()
}

/// Merge one player's totals across several rounds into trip totals.
#[must_use]
pub fn merge_totals(rounds: &[Vec<PlayerTotal>]) -> Vec<PlayerTotal> {
    let mut merged: Vec<PlayerTotal> = Vec::new();
    for round in rounds {
        for total in round {
            match merged.iter_mut().find(|t| t.player_id == total.player_id) {
                Some(existing) => {
                    existing.gross_total += total.gross_total;
                    existing.net_total += total.net_total;
                    existing.par_completed += total.par_completed;
                    existing.thru += total.thru;
                }
                None => merged.push(total.clone()),
            }
        }
    }
    merged
}

/// Rank totals with skip-style competition ranking: tied scores share a
/// rank and the next distinct score takes its 1-based index, so a three-way
/// tie for second is followed by fifth. Ties are never broken here; any
/// secondary ordering is the caller's business before totals arrive.
#[must_use]
pub fn build_leaderboard(totals: &[PlayerTotal], mode: ScoringMode) -> Vec<LeaderboardEntry> {
    let key = |t: &PlayerTotal| match mode {
        ScoringMode::Gross => t.gross_total,
        ScoringMode::Net => t.net_total,
    };

    let mut sorted: Vec<&PlayerTotal> = totals.iter().collect();
    sorted.sort_by_key(|t| key(t));

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(sorted.len());
    let mut rank = 1u32;
    let mut prev_score: Option<i32> = None;
    for (idx, total) in sorted.iter().enumerate() {
        let score = key(total);
        if prev_score.is_some_and(|prev| score > prev) {
            rank = idx as u32 + 1;
        }
        prev_score = Some(score);
        entries.push(LeaderboardEntry {
            player_id: total.player_id,
            name: total.name.clone(),
            gross_total: total.gross_total,
            net_total: total.net_total,
            to_par: score - total.par_completed,
            thru: total.thru,
            playing_handicap: total.playing_handicap,
            rank,
            position_label: String::new(),
        });
    }

    for idx in 0..entries.len() {
        let rank = entries[idx].rank;
        let tied = entries.iter().filter(|e| e.rank == rank).count() > 1;
        entries[idx].position_label = if tied {
            format!("T{rank}")
        } else {
            rank.to_string()
        };
    }

    entries
}
