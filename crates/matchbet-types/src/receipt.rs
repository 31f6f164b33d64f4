//! Settlement receipt types.
//!
//! Settling a match produces one immutable [`SettlementReceipt`]. Its
//! `digest` commits to every payout line so two engines fed the same bets
//! and result can be compared by hash alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, MatchId, Outcome, Slot};

/// What settlement did for one slot that placed a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// The seat this line applies to.
    pub slot: Slot,
    /// The prediction the seat made.
    pub prediction: Outcome,
    /// The stake that was reserved.
    pub stake: Amount,
    /// Whether the prediction matched the result.
    pub won: bool,
    /// Amount moved from the reservation back to the available balance.
    /// Winners: stake + share (+ remainder). Losers: zero. Refunds: stake.
    pub credited: Amount,
}

impl Payout {
    /// Signed balance change caused by settlement.
    #[must_use]
    pub fn net_change(&self) -> i128 {
        i128::from(self.credited) - i128::from(self.stake)
    }
}

/// Immutable record of a completed settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// The match that was settled.
    pub match_id: MatchId,
    /// The authoritative result.
    pub outcome: Outcome,
    /// Total stake forfeited by incorrect predictions.
    pub losers_pool: Amount,
    /// Total stake of correct predictions.
    pub winners_stake: Amount,
    /// Units left over after truncating each winner's share.
    pub remainder: Amount,
    /// Who received the remainder, when there was one.
    pub remainder_slot: Option<Slot>,
    /// One line per slot that placed a bet, in slot order.
    pub payouts: Vec<Payout>,
    /// SHA-256 over match id, outcome and payout lines.
    pub digest: [u8; 32],
    /// When settlement completed.
    pub settled_at: DateTime<Utc>,
}

impl SettlementReceipt {
    /// Whether anybody predicted correctly.
    #[must_use]
    pub fn has_winners(&self) -> bool {
        self.payouts.iter().any(|p| p.won)
    }

    /// The payout line for a slot, if that slot bet.
    #[must_use]
    pub fn payout_for(&self, slot: Slot) -> Option<&Payout> {
        self.payouts.iter().find(|p| p.slot == slot)
    }

    #[must_use]
    pub fn total_staked(&self) -> u128 {
        self.payouts.iter().map(|p| u128::from(p.stake)).sum()
    }

    #[must_use]
    pub fn total_credited(&self) -> u128 {
        self.payouts.iter().map(|p| u128::from(p.credited)).sum()
    }

    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> SettlementReceipt {
        SettlementReceipt {
            match_id: MatchId::from_bytes([7; 16]),
            outcome: Outcome::Team1Win,
            losers_pool: 40,
            winners_stake: 40,
            remainder: 0,
            remainder_slot: None,
            payouts: vec![
                Payout {
                    slot: Slot(0),
                    prediction: Outcome::Team1Win,
                    stake: 40,
                    won: true,
                    credited: 80,
                },
                Payout {
                    slot: Slot(1),
                    prediction: Outcome::Draw,
                    stake: 40,
                    won: false,
                    credited: 0,
                },
            ],
            digest: [0xCD; 32],
            settled_at: Utc::now(),
        }
    }

    #[test]
    fn net_change_signs() {
        let r = receipt();
        assert_eq!(r.payout_for(Slot(0)).unwrap().net_change(), 40);
        assert_eq!(r.payout_for(Slot(1)).unwrap().net_change(), -40);
        assert!(r.payout_for(Slot(2)).is_none());
    }

    #[test]
    fn totals_balance() {
        let r = receipt();
        assert!(r.has_winners());
        assert_eq!(r.total_staked(), r.total_credited());
    }

    #[test]
    fn digest_hex_length() {
        assert_eq!(receipt().digest_hex().len(), 64);
    }

    #[test]
    fn receipt_serde_roundtrip() {
        let r = receipt();
        let json = serde_json::to_string(&r).unwrap();
        let back: SettlementReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
