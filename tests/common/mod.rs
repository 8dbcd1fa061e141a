#![allow(dead_code)]

use async_trait::async_trait;
use golf_trip_engine::model::{
    CourseSetup, FormatSetup, HoleSpec, MatchSetup, MatchType, Player, PlayerId, RoundScores,
    TeamSide,
};
use golf_trip_engine::storage::{RoundSetup, ScoreStore, StoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// 18 holes, par 72, stroke indexes in natural order so allocation tests
/// can reason about which holes take strokes.
pub fn standard_course() -> CourseSetup {
    let pars: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5];
    CourseSetup {
        course_name: "Whistling Pines".to_string(),
        tee_name: "blue".to_string(),
        holes: pars
            .iter()
            .enumerate()
            .map(|(idx, par)| HoleSpec {
                number: (idx + 1) as u8,
                par: *par,
                stroke_index: (idx + 1) as u8,
                yardage: Some(150 + 25 * (idx as u16 % 10)),
            })
            .collect(),
    }
}

pub fn player(player_id: PlayerId, name: &str, handicap: f32, team: Option<TeamSide>) -> Player {
    Player {
        player_id,
        name: name.to_string(),
        playing_handicap: handicap,
        team,
    }
}

/// Four scratch players split two per team, so gross == net and tests can
/// script hole outcomes directly.
pub fn scratch_foursome() -> Vec<Player> {
    vec![
        player(1, "Al Woods", 0.0, Some(TeamSide::One)),
        player(2, "Ben Hogan Jr", 0.0, Some(TeamSide::One)),
        player(3, "Cy Porter", 0.0, Some(TeamSide::Two)),
        player(4, "Del Monte", 0.0, Some(TeamSide::Two)),
    ]
}

pub fn singles_match(stake_cents: i64) -> MatchSetup {
    MatchSetup {
        match_id: 100,
        side_one: vec![1],
        side_two: vec![3],
        match_type: MatchType::Singles,
        stake_per_man_cents: stake_cents,
        presses: Vec::new(),
    }
}

pub fn best_ball_match(stake_cents: i64) -> MatchSetup {
    MatchSetup {
        match_id: 200,
        side_one: vec![1, 2],
        side_two: vec![3, 4],
        match_type: MatchType::BestBallNet,
        stake_per_man_cents: stake_cents,
        presses: Vec::new(),
    }
}

/// Record gross scores for consecutive holes starting at hole 1.
pub fn score_holes(scores: &mut RoundScores, player_id: PlayerId, gross: &[u8]) {
    for (idx, strokes) in gross.iter().enumerate() {
        scores
            .set_gross(player_id, (idx + 1) as u8, Some(*strokes))
            .expect("test gross in range");
    }
}

/// Script a singles match hole by hole: per hole, side one's player takes
/// `par + a` and side two's takes `par + b`, so `a < b` wins the hole for
/// side one.
pub fn script_singles(
    scores: &mut RoundScores,
    course: &CourseSetup,
    one: PlayerId,
    two: PlayerId,
    outcomes: &[(i8, i8)],
) {
    for (idx, (a, b)) in outcomes.iter().enumerate() {
        let hole = &course.holes[idx];
        scores
            .set_gross(one, hole.number, Some((i16::from(hole.par) + i16::from(*a)) as u8))
            .expect("test gross in range");
        scores
            .set_gross(two, hole.number, Some((i16::from(hole.par) + i16::from(*b)) as u8))
            .expect("test gross in range");
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub setups: HashMap<i64, RoundSetup>,
    pub scores: RwLock<HashMap<i64, RoundScores>>,
    pub trips: HashMap<i64, Vec<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round(mut self, setup: RoundSetup, scores: RoundScores) -> Self {
        let round_id = setup.round_id;
        self.setups.insert(round_id, setup);
        self.scores.get_mut().insert(round_id, scores);
        self
    }

    pub fn with_trip(mut self, trip_id: i64, round_ids: Vec<i64>) -> Self {
        self.trips.insert(trip_id, round_ids);
        self
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn get_round_setup(&self, round_id: i64) -> Result<RoundSetup, StoreError> {
        self.setups
            .get(&round_id)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("round {round_id} not found")))
    }

    async fn get_round_scores(&self, round_id: i64) -> Result<RoundScores, StoreError> {
        let map = self.scores.read().await;
        map.get(&round_id)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("round {round_id} not found")))
    }

    async fn store_score(
        &self,
        round_id: i64,
        player_id: PlayerId,
        hole: u8,
        gross: Option<u8>,
    ) -> Result<(), StoreError> {
        let mut map = self.scores.write().await;
        let scores = map
            .get_mut(&round_id)
            .ok_or_else(|| StoreError::new(format!("round {round_id} not found")))?;
        scores
            .set_gross(player_id, hole, gross)
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn get_trip_rounds(&self, trip_id: i64) -> Result<Vec<i64>, StoreError> {
        self.trips
            .get(&trip_id)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("trip {trip_id} not found")))
    }
}

pub fn round_setup(
    round_id: i64,
    players: Vec<Player>,
    match_setup: Option<MatchSetup>,
    formats: Vec<FormatSetup>,
) -> RoundSetup {
    RoundSetup {
        round_id,
        course: standard_course(),
        players,
        match_setup,
        formats,
    }
}
