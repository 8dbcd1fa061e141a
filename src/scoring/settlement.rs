use crate::error::EngineError;
use crate::model::{PlayerBalance, SettlementTransaction};

/// Merge per-match balances into one signed total per player.
#[must_use]
pub fn merge_balances(per_match: &[Vec<PlayerBalance>]) -> Vec<PlayerBalance> {
    let mut merged: Vec<PlayerBalance> = Vec::new();
    for balances in per_match {
        for balance in balances {
            match merged.iter_mut().find(|b| b.player_id == balance.player_id) {
                Some(existing) => existing.net_cents += balance.net_cents,
                None => merged.push(balance.clone()),
            }
        }
    }
    merged
}

/// Greedy debt simplification: largest outstanding debtor pays the largest
/// outstanding creditor until both lists drain. Not a global-minimum
/// transaction count, which is fine at trip sizes.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfig` when the balances do not sum to
/// zero — the match engine constructs zero-sum totals, so anything else is
/// a caller bug.
pub fn net_settlements(
    balances: &[PlayerBalance],
) -> Result<Vec<SettlementTransaction>, EngineError> {
    let sum: i64 = balances.iter().map(|b| b.net_cents).sum();
    if sum != 0 {
        return Err(EngineError::InvalidConfig(format!(
            "balances sum to {sum} cents, expected zero"
        )));
    }

    let mut creditors: Vec<(i64, i64)> = balances
        .iter()
        .filter(|b| b.net_cents > 0)
        .map(|b| (b.player_id, b.net_cents))
        .collect();
    let mut debtors: Vec<(i64, i64)> = balances
        .iter()
        .filter(|b| b.net_cents < 0)
        .map(|b| (b.player_id, -b.net_cents))
        .collect();

    // Largest amounts first; player id keeps equal amounts deterministic.
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut transactions = Vec::new();
    let (mut ci, mut di) = (0usize, 0usize);
    while ci < creditors.len() && di < debtors.len() {
        let amount = creditors[ci].1.min(debtors[di].1);
        transactions.push(SettlementTransaction {
            payer: debtors[di].0,
            payee: creditors[ci].0,
            amount_cents: amount,
        });
        creditors[ci].1 -= amount;
        debtors[di].1 -= amount;
        if creditors[ci].1 == 0 {
            ci += 1;
        }
        if debtors[di].1 == 0 {
            di += 1;
        }
    }

    Ok(transactions)
}
