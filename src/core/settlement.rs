//! Settlement engine
//!
//! Turns a `GameRound` into the ordered list of payments that settles it.
//!
//! The engine enforces:
//! - Every row has a name, a buy-in and a cash-out
//! - Player names are unique within the round
//! - Money is conserved (total buy-ins equal total cash-outs)
//!
//! Debts are then simplified with a greedy largest-first matching: the
//! biggest remaining loser pays the biggest remaining gainer as much as they
//! can, until nobody is owed anything. Equal amounts are ordered by the
//! players' position in the round, which makes the output reproducible.
//! The matching is not guaranteed to be minimal, but it never emits more than
//! `N - 1` transfers for `N` players with a non-zero balance.

use crate::types::{GameRound, NetAmount, NetBalance, SettlementError, TransferInstruction};

/// A player with money still to pay or to receive
#[derive(Debug, Clone)]
struct Party {
    name: String,
    /// Remaining amount, always positive while the party is listed
    remaining: NetAmount,
    /// Position in the round, used to break ties
    order: usize,
}

/// Compute the transfers that settle a round
///
/// # Arguments
///
/// * `round` - The round to settle
///
/// # Returns
///
/// * `Ok(Vec<TransferInstruction>)` - Transfers in the order they were generated
/// * `Err(SettlementError)` - If the round is incomplete or imbalanced
///
/// # Errors
///
/// Returns an error if:
/// - A row is missing a field (`MissingField`)
/// - A player is listed twice (`DuplicatePlayer`)
/// - Buy-ins and cash-outs do not sum to the same total (`ImbalancedRound`)
/// - The matching loop left a party unmatched (`InternalInvariantViolation`)
pub fn compute_settlement(round: &GameRound) -> Result<Vec<TransferInstruction>, SettlementError> {
    let balances = round.net_balances()?;
    check_conservation(&balances)?;

    let (gainers, losers) = partition(balances);
    match_greedily(gainers, losers)
}

/// Fail with `ImbalancedRound` unless the balances sum to zero
pub fn check_conservation(balances: &[NetBalance]) -> Result<(), SettlementError> {
    let net_sum: NetAmount = balances.iter().map(|balance| balance.amount).sum();
    if net_sum != 0 {
        return Err(SettlementError::imbalanced(net_sum));
    }
    Ok(())
}

/// Split balances into gainers and losers, largest first
///
/// Losers carry the absolute value of what they owe. Players who broke even
/// are dropped.
fn partition(balances: Vec<NetBalance>) -> (Vec<Party>, Vec<Party>) {
    let mut gainers = Vec::new();
    let mut losers = Vec::new();

    for (order, balance) in balances.into_iter().enumerate() {
        let party = Party {
            name: balance.name,
            remaining: balance.amount.abs(),
            order,
        };
        match balance.amount {
            amount if amount > 0 => gainers.push(party),
            amount if amount < 0 => losers.push(party),
            _ => {}
        }
    }

    sort_largest_first(&mut gainers);
    sort_largest_first(&mut losers);
    (gainers, losers)
}

/// Order parties by remaining amount descending, then by round position
fn sort_largest_first(parties: &mut [Party]) {
    parties.sort_by(|a, b| {
        b.remaining
            .cmp(&a.remaining)
            .then_with(|| a.order.cmp(&b.order))
    });
}

/// Run the greedy matching loop over two largest-first lists
fn match_greedily(
    mut gainers: Vec<Party>,
    mut losers: Vec<Party>,
) -> Result<Vec<TransferInstruction>, SettlementError> {
    let mut transfers = Vec::with_capacity((gainers.len() + losers.len()).saturating_sub(1));

    while !gainers.is_empty() && !losers.is_empty() {
        let amount = gainers[0].remaining.min(losers[0].remaining);
        transfers.push(TransferInstruction::new(
            losers[0].name.clone(),
            gainers[0].name.clone(),
            amount,
        ));

        settle_head(&mut gainers, amount);
        settle_head(&mut losers, amount);
    }

    if !gainers.is_empty() || !losers.is_empty() {
        return Err(SettlementError::InternalInvariantViolation {
            gainers_left: gainers.len(),
            losers_left: losers.len(),
        });
    }

    Ok(transfers)
}

/// Reduce the head party by `amount`, dropping it once it reaches zero and
/// restoring largest-first order otherwise
fn settle_head(parties: &mut Vec<Party>, amount: NetAmount) {
    parties[0].remaining -= amount;
    if parties[0].remaining == 0 {
        parties.remove(0);
    } else {
        sort_largest_first(parties);
    }
}
