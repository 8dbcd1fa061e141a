use crate::model::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One player's signed money total across a trip's closed wagers, in cents.
/// Positive means the trip owes them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerBalance {
    pub player_id: PlayerId,
    pub name: String,
    pub net_cents: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SettlementTransaction {
    pub payer: PlayerId,
    pub payee: PlayerId,
    pub amount_cents: i64,
}
