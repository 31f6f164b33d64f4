//! Per-slot balance ledger.
//!
//! Tracks available/reserved balances for each participant slot. All
//! mutations are atomic: either the full operation succeeds or the ledger
//! is unchanged. Settlement never mutates in place; it builds a staged
//! copy with [`SlotLedger::settled`] which the engine swaps in.

use matchbet_types::{Amount, BalanceEntry, MatchbetError, Payout, Result, Slot};

/// Balances for the two or three slots of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLedger {
    /// Indexed by `Slot::index()`.
    entries: Vec<BalanceEntry>,
}

impl SlotLedger {
    /// Create a ledger with every initial balance fully available.
    #[must_use]
    pub fn with_balances(balances: &[Amount]) -> Self {
        Self {
            entries: balances.iter().copied().map(BalanceEntry::funded).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw entry for a slot.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot does not exist.
    pub fn entry(&self, slot: Slot) -> Result<BalanceEntry> {
        self.entries
            .get(slot.index())
            .copied()
            .ok_or(MatchbetError::InvalidSlot(slot))
    }

    /// Total balance (available + reserved) for a slot.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot does not exist.
    pub fn balance(&self, slot: Slot) -> Result<Amount> {
        let entry = self.entry(slot)?;
        Amount::try_from(entry.total()).map_err(|_| MatchbetError::BalanceOverflow)
    }

    /// Reserve stake (available → reserved).
    ///
    /// # Errors
    /// Returns `InvalidSlot` or `InsufficientBalance` if available < amount.
    pub fn reserve(&mut self, slot: Slot, amount: Amount) -> Result<()> {
        let entry = self
            .entries
            .get_mut(slot.index())
            .ok_or(MatchbetError::InvalidSlot(slot))?;

        if entry.available < amount {
            return Err(MatchbetError::InsufficientBalance {
                needed: amount,
                available: entry.available,
            });
        }

        entry.available -= amount;
        entry.reserved += amount;
        Ok(())
    }

    /// Build the post-settlement ledger without touching `self`.
    ///
    /// For each payout line the slot's reservation shrinks by `stake` and
    /// its available balance grows by `credited`.
    ///
    /// # Errors
    /// - `InvalidSlot` if a payout names a missing slot
    /// - `Internal` if a slot has less reserved than the payout's stake
    /// - `BalanceOverflow` if a credit does not fit
    pub fn settled(&self, payouts: &[Payout]) -> Result<Self> {
        let mut staged = self.clone();
        for payout in payouts {
            let entry = staged
                .entries
                .get_mut(payout.slot.index())
                .ok_or(MatchbetError::InvalidSlot(payout.slot))?;
            entry.reserved = entry.reserved.checked_sub(payout.stake).ok_or_else(|| {
                MatchbetError::Internal(format!(
                    "{} reserved {} below stake {}",
                    payout.slot, entry.reserved, payout.stake
                ))
            })?;
            entry.available = entry
                .available
                .checked_add(payout.credited)
                .ok_or(MatchbetError::BalanceOverflow)?;
        }
        Ok(staged)
    }

    /// Sum of every slot's available + reserved.
    #[must_use]
    pub fn total_supply(&self) -> u128 {
        self.entries.iter().map(BalanceEntry::total).sum()
    }

    /// Total reserved across all slots.
    #[must_use]
    pub fn total_reserved(&self) -> u128 {
        self.entries.iter().map(|e| u128::from(e.reserved)).sum()
    }
}
