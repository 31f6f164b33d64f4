//! Stake-proportional payout computation.
//!
//! Pure arithmetic, no state. Given the placed bets and the result:
//!
//! ```text
//! losers_pool   = Σ stake of incorrect predictions
//! winners_stake = Σ stake of correct predictions
//! share(w)      = floor(stake(w) * losers_pool / winners_stake)
//! credited(w)   = stake(w) + share(w)
//! credited(l)   = 0
//! ```
//!
//! Truncation leaves `losers_pool - Σ share` units over. They go to the
//! winner with the largest stake (lowest slot on ties) so that
//! `Σ credited == Σ stake` exactly. With no winners every stake is
//! credited back.

use matchbet_types::{Amount, Bet, MatchbetError, Outcome, Payout, Result, Slot};

/// Result of [`compute_payouts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutPlan {
    /// The result the plan was computed against.
    pub outcome: Outcome,
    /// Total stake of incorrect predictions.
    pub losers_pool: Amount,
    /// Total stake of correct predictions.
    pub winners_stake: Amount,
    /// Units left after truncating shares.
    pub remainder: Amount,
    /// Who received the remainder.
    pub remainder_slot: Option<Slot>,
    /// One line per bet, in slot order.
    pub payouts: Vec<Payout>,
}

impl PayoutPlan {
    #[must_use]
    pub fn has_winners(&self) -> bool {
        self.winners_stake > 0
    }

    #[must_use]
    pub fn total_credited(&self) -> u128 {
        self.payouts.iter().map(|p| u128::from(p.credited)).sum()
    }

    #[must_use]
    pub fn total_staked(&self) -> u128 {
        self.payouts.iter().map(|p| u128::from(p.stake)).sum()
    }
}

fn to_amount(value: u128) -> Result<Amount> {
    Amount::try_from(value).map_err(|_| MatchbetError::BalanceOverflow)
}

/// Compute every bettor's payout for `outcome`.
///
/// Bets with a zero stake are not bets and produce no payout line.
///
/// # Errors
/// Returns `BalanceOverflow` if the stakes are too large to divide exactly
/// in 128-bit arithmetic or a credit does not fit in [`Amount`].
pub fn compute_payouts(bets: &[(Slot, Bet)], outcome: Outcome) -> Result<PayoutPlan> {
    let mut bets: Vec<(Slot, Bet)> = bets.iter().copied().filter(|(_, b)| b.stake > 0).collect();
    bets.sort_by_key(|(slot, _)| *slot);

    let winners_stake: u128 = bets
        .iter()
        .filter(|(_, b)| b.prediction == outcome)
        .map(|(_, b)| u128::from(b.stake))
        .sum();
    let losers_pool: u128 = bets
        .iter()
        .filter(|(_, b)| b.prediction != outcome)
        .map(|(_, b)| u128::from(b.stake))
        .sum();

    // Nobody was right: release every reservation.
    if winners_stake == 0 {
        let payouts = bets
            .iter()
            .map(|&(slot, bet)| Payout {
                slot,
                prediction: bet.prediction,
                stake: bet.stake,
                won: false,
                credited: bet.stake,
            })
            .collect();
        return Ok(PayoutPlan {
            outcome,
            losers_pool: to_amount(losers_pool)?,
            winners_stake: 0,
            remainder: 0,
            remainder_slot: None,
            payouts,
        });
    }

    let mut payouts = Vec::with_capacity(bets.len());
    let mut distributed: u128 = 0;
    // (slot, stake, index into payouts) of the largest winning stake so far
    let mut largest: Option<(Slot, Amount, usize)> = None;

    for &(slot, bet) in &bets {
        if bet.prediction != outcome {
            payouts.push(Payout {
                slot,
                prediction: bet.prediction,
                stake: bet.stake,
                won: false,
                credited: 0,
            });
            continue;
        }

        let share = u128::from(bet.stake)
            .checked_mul(losers_pool)
            .ok_or(MatchbetError::BalanceOverflow)?
            / winners_stake;
        distributed += share;

        // Strictly greater: on ties the earlier (lower) slot is kept.
        if largest.is_none_or(|(_, best, _)| bet.stake > best) {
            largest = Some((slot, bet.stake, payouts.len()));
        }

        payouts.push(Payout {
            slot,
            prediction: bet.prediction,
            stake: bet.stake,
            won: true,
            credited: to_amount(u128::from(bet.stake) + share)?,
        });
    }

    let remainder = losers_pool - distributed;
    let mut remainder_slot = None;
    if remainder > 0 {
        if let Some((slot, _, idx)) = largest {
            let line = &mut payouts[idx];
            line.credited = to_amount(u128::from(line.credited) + remainder)?;
            remainder_slot = Some(slot);
        }
    }

    Ok(PayoutPlan {
        outcome,
        losers_pool: to_amount(losers_pool)?,
        winners_stake: to_amount(winners_stake)?,
        remainder: to_amount(remainder)?,
        remainder_slot,
        payouts,
    })
}
