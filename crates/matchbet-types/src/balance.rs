//! Balance tracking types for the reservation model.
//!
//! Every participant has an `available` balance and a `reserved` balance
//! (stake held against an open bet). Reserved stake still belongs to the
//! participant until settlement decides otherwise.

use serde::{Deserialize, Serialize};

/// Integer unit of value. Balances and stakes are never fractional.
pub type Amount = u64;

/// A single participant's ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BalanceEntry {
    /// Free to be staked.
    pub available: Amount,
    /// Held against an unsettled bet.
    pub reserved: Amount,
}

impl BalanceEntry {
    /// An entry with everything available.
    #[must_use]
    pub fn funded(amount: Amount) -> Self {
        Self {
            available: amount,
            reserved: 0,
        }
    }

    /// Total balance (available + reserved).
    ///
    /// Computed in `u128` so a corrupted entry cannot wrap silently.
    #[must_use]
    pub fn total(&self) -> u128 {
        u128::from(self.available) + u128::from(self.reserved)
    }

    /// Whether this entry holds nothing.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.available == 0 && self.reserved == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let entry = BalanceEntry::default();
        assert!(entry.is_zero());
        assert_eq!(entry.total(), 0);
    }

    #[test]
    fn total_includes_reserved() {
        let entry = BalanceEntry {
            available: 70,
            reserved: 30,
        };
        assert_eq!(entry.total(), 100);
        assert!(!entry.is_zero());
    }

    #[test]
    fn total_does_not_wrap() {
        let entry = BalanceEntry {
            available: Amount::MAX,
            reserved: 1,
        };
        assert_eq!(entry.total(), u128::from(Amount::MAX) + 1);
    }

    #[test]
    fn funded_has_nothing_reserved() {
        let entry = BalanceEntry::funded(500);
        assert_eq!(entry.available, 500);
        assert_eq!(entry.reserved, 0);
    }
}
