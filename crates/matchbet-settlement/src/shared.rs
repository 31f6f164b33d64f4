//! Lock-guarded engine handle.
//!
//! Every mutation holds the write lock for its whole duration, so a reader
//! sees either the pre-settlement ledger or the settled one, never a mix.
//! Reads share the lock.

use std::sync::Arc;

use matchbet_types::{Amount, MatchPhase, Outcome, Result, SettlementReceipt, Slot};
use parking_lot::RwLock;

use crate::engine::SettlementEngine;

/// Consistent point-in-time view of an engine, taken under one read lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub phase: MatchPhase,
    pub result: Option<Outcome>,
    /// Balance per slot, slot order.
    pub balances: Vec<Amount>,
}

impl EngineSnapshot {
    #[must_use]
    pub fn total(&self) -> u128 {
        self.balances.iter().map(|b| u128::from(*b)).sum()
    }
}

/// Cloneable handle to one match's engine.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<SettlementEngine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: SettlementEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn place_bet(&self, slot: Slot, prediction: Outcome, stake: Amount) -> Result<()> {
        self.inner.write().place_bet(slot, prediction, stake)
    }

    pub fn set_result(&self, outcome: Outcome) -> Result<SettlementReceipt> {
        self.inner.write().set_result(outcome)
    }

    pub fn balance_of(&self, slot: Slot) -> Result<Amount> {
        self.inner.read().balance_of(slot)
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.inner.read().phase()
    }

    #[must_use]
    pub fn settlement(&self) -> Option<SettlementReceipt> {
        self.inner.read().settlement().cloned()
    }

    /// Read phase, result and every balance under a single lock.
    ///
    /// # Errors
    /// Propagates the first balance read that fails; a snapshot always
    /// holds one balance per slot.
    pub fn snapshot(&self) -> Result<EngineSnapshot> {
        let engine = self.inner.read();
        let balances = engine
            .participants()
            .iter()
            .map(|p| engine.balance_of(p.slot))
            .collect::<Result<Vec<_>>>()?;
        Ok(EngineSnapshot {
            phase: engine.phase(),
            result: engine.result(),
            balances,
        })
    }

    /// Run `f` against the engine under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SettlementEngine) -> R) -> R {
        f(&*self.inner.read())
    }
}
