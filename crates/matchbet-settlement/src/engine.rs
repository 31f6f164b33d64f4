//! The settlement engine: one match's betting round from funding to payout.
//!
//! Lifecycle:
//! 1. `new` funds two or three slots
//! 2. `place_bet` reserves each participant's stake against a prediction
//! 3. `set_result` records the outcome and settles in the same call
//! 4. `balance_of` reads balances in any phase
//!
//! Stakes are *reserved*, not debited: `balance_of` before settlement
//! reports the same value as before the bet. Every rejected call returns an
//! error and leaves the engine exactly as it was.

use std::collections::HashSet;

use chrono::Utc;
use matchbet_types::{
    Amount, BalanceEntry, Bet, EngineConfig, MatchId, MatchPhase, MatchbetError, Outcome,
    Participant, ParticipantId, Result, SettlementReceipt, Slot, constants,
};

use crate::digest::compute_settlement_digest;
use crate::ledger::SlotLedger;
use crate::payout::compute_payouts;
use crate::supply_conservation::SupplyConservation;

/// Owns the full state of one match's betting round.
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    match_id: MatchId,
    config: EngineConfig,
    /// One per slot, slot order.
    participants: Vec<Participant>,
    ledger: SlotLedger,
    supply: SupplyConservation,
    phase: MatchPhase,
    result: Option<Outcome>,
    /// Set exactly once, when the match reaches SETTLED.
    receipt: Option<SettlementReceipt>,
}

impl SettlementEngine {
    /// Fund a new match with a fresh [`MatchId`].
    ///
    /// `participants` are `(identity, initial balance)` pairs assigned to
    /// slots 0, 1 and (optionally) 2 in the order given.
    ///
    /// # Errors
    /// - `Configuration` if `config` is invalid
    /// - `InvalidParticipantCount` unless two or three pairs are given
    /// - `Configuration` if `min_bettors` exceeds the number of pairs
    /// - `DuplicateParticipant` if an identity repeats
    /// - `BalanceOverflow` if the initial balances sum past `u64::MAX`
    pub fn new(participants: &[(ParticipantId, Amount)], config: EngineConfig) -> Result<Self> {
        Self::with_match_id(MatchId::new(), participants, config)
    }

    /// Like [`SettlementEngine::new`] with a caller-chosen match id.
    pub fn with_match_id(
        match_id: MatchId,
        participants: &[(ParticipantId, Amount)],
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let count = participants.len();
        if !(constants::MIN_PARTICIPANTS..=constants::MAX_PARTICIPANTS).contains(&count) {
            return Err(MatchbetError::InvalidParticipantCount { count });
        }
        if config.min_bettors > count {
            return Err(MatchbetError::Configuration(format!(
                "min_bettors {} exceeds {count} participant slots",
                config.min_bettors
            )));
        }

        let mut seen = HashSet::with_capacity(count);
        for (id, _) in participants {
            if !seen.insert(*id) {
                return Err(MatchbetError::DuplicateParticipant(*id));
            }
        }

        // Every later credit is bounded by this total, so it must fit.
        participants
            .iter()
            .try_fold(0u64, |acc, (_, balance)| acc.checked_add(*balance))
            .ok_or(MatchbetError::BalanceOverflow)?;

        let mut supply = SupplyConservation::new();
        let mut seats = Vec::with_capacity(count);
        let mut balances = Vec::with_capacity(count);
        for (index, &(id, balance)) in participants.iter().enumerate() {
            supply.record_funding(balance);
            seats.push(Participant::new(id, Slot(index), balance));
            balances.push(balance);

            tracing::debug!(
                match_id = %match_id,
                slot = index,
                participant = %id.short(),
                balance,
                "Participant funded"
            );
        }

        Ok(Self {
            match_id,
            config,
            participants: seats,
            ledger: SlotLedger::with_balances(&balances),
            supply,
            phase: MatchPhase::Funded,
            result: None,
            receipt: None,
        })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Record a prediction for `slot` and reserve `stake` from its balance.
    ///
    /// # Errors
    /// - `AlreadySettled` once the match is settled
    /// - `InvalidSlot` if the slot does not exist
    /// - `AlreadyBet` if the slot already holds a prediction
    /// - `ZeroStake` if `stake` is zero
    /// - `DuplicatePrediction` if distinct predictions are required and
    ///   another slot already backs `prediction`
    /// - `InsufficientBalance` if `stake` exceeds the slot's balance
    pub fn place_bet(&mut self, slot: Slot, prediction: Outcome, stake: Amount) -> Result<()> {
        if !self.phase.accepts_bets() {
            return Err(MatchbetError::AlreadySettled);
        }

        let seat = self
            .participants
            .get(slot.index())
            .ok_or(MatchbetError::InvalidSlot(slot))?;
        if seat.has_bet() {
            return Err(MatchbetError::AlreadyBet(slot));
        }
        if stake == 0 {
            return Err(MatchbetError::ZeroStake);
        }
        if self.config.require_distinct_predictions {
            if let Some(holder) = self
                .participants
                .iter()
                .find(|p| p.prediction() == Some(prediction))
            {
                return Err(MatchbetError::DuplicatePrediction {
                    outcome: prediction,
                    slot: holder.slot,
                });
            }
        }

        // Last fallible step: nothing has been touched if this fails.
        self.ledger.reserve(slot, stake)?;

        let seat = &mut self.participants[slot.index()];
        seat.bet = Some(Bet { prediction, stake });
        self.phase = MatchPhase::BetsOpen;

        tracing::debug!(
            match_id = %self.match_id,
            slot = slot.index(),
            participant = %seat.id.short(),
            prediction = %prediction,
            stake,
            "Bet placed"
        );
        Ok(())
    }

    /// Record the authoritative outcome and settle.
    ///
    /// With no bets at all this is a no-op settlement: the result is
    /// recorded and no balance moves.
    ///
    /// # Errors
    /// - `ResultAlreadySet` on any call after the first successful one
    /// - `IncompleteBets` if some, but fewer than `min_bettors`, bets exist
    /// - `SupplyInvariantViolation` if the computed settlement would not
    ///   conserve supply (nothing is applied)
    pub fn set_result(&mut self, outcome: Outcome) -> Result<SettlementReceipt> {
        if self.result.is_some() {
            return Err(MatchbetError::ResultAlreadySet);
        }

        let placed = self.bet_count();
        if placed > 0 && placed < self.config.min_bettors {
            return Err(MatchbetError::IncompleteBets {
                placed,
                required: self.config.min_bettors,
            });
        }

        self.settle(outcome)
    }

    /// Compute payouts, stage the new ledger, verify it, then commit.
    fn settle(&mut self, outcome: Outcome) -> Result<SettlementReceipt> {
        let plan = compute_payouts(&self.bets(), outcome)?;
        let staged = self.ledger.settled(&plan.payouts)?;
        self.supply.verify(staged.total_supply())?;
        if staged.total_reserved() != 0 {
            return Err(MatchbetError::Internal(format!(
                "{} left reserved after settlement",
                staged.total_reserved()
            )));
        }

        // Commit. Nothing below can fail.
        self.result = Some(outcome);
        self.phase = MatchPhase::Resolved;

        let digest = compute_settlement_digest(self.match_id, outcome, &plan.payouts);
        let receipt = SettlementReceipt {
            match_id: self.match_id,
            outcome,
            losers_pool: plan.losers_pool,
            winners_stake: plan.winners_stake,
            remainder: plan.remainder,
            remainder_slot: plan.remainder_slot,
            payouts: plan.payouts,
            digest,
            settled_at: Utc::now(),
        };
        self.ledger = staged;
        self.receipt = Some(receipt.clone());
        self.phase = MatchPhase::Settled;

        tracing::info!(
            match_id = %self.match_id,
            outcome = %outcome,
            bets = receipt.payouts.len(),
            losers_pool = receipt.losers_pool,
            winners_stake = receipt.winners_stake,
            remainder = receipt.remainder,
            digest = hex::encode(digest),
            "Match settled"
        );

        Ok(receipt)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current balance of a slot (available + reserved).
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot does not exist.
    pub fn balance_of(&self, slot: Slot) -> Result<Amount> {
        self.ledger.balance(slot)
    }

    /// Current balance of the slot held by `id`.
    ///
    /// # Errors
    /// Returns `UnknownParticipant` if no slot is held by `id`.
    pub fn balance_of_participant(&self, id: &ParticipantId) -> Result<Amount> {
        let slot = self
            .slot_of(id)
            .ok_or(MatchbetError::UnknownParticipant(*id))?;
        self.ledger.balance(slot)
    }

    /// Current balance minus the balance the slot was funded with.
    ///
    /// Zero for every slot before settlement and for every bettor after a
    /// round nobody predicted.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot does not exist.
    pub fn balance_change(&self, slot: Slot) -> Result<i128> {
        let seat = self
            .participants
            .get(slot.index())
            .ok_or(MatchbetError::InvalidSlot(slot))?;
        let current = self.ledger.balance(slot)?;
        Ok(i128::from(current) - i128::from(seat.initial_balance))
    }

    /// The slot held by `id`, if any.
    #[must_use]
    pub fn slot_of(&self, id: &ParticipantId) -> Option<Slot> {
        self.participants
            .iter()
            .find(|p| p.id == *id)
            .map(|p| p.slot)
    }

    /// Available/reserved split for a slot.
    ///
    /// # Errors
    /// Returns `InvalidSlot` if the slot does not exist.
    pub fn ledger_entry(&self, slot: Slot) -> Result<BalanceEntry> {
        self.ledger.entry(slot)
    }

    /// Sum of all slots' balances.
    #[must_use]
    pub fn total_balance(&self) -> u128 {
        self.ledger.total_supply()
    }

    #[must_use]
    pub fn participant(&self, slot: Slot) -> Option<&Participant> {
        self.participants.get(slot.index())
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Placed bets in slot order.
    #[must_use]
    pub fn bets(&self) -> Vec<(Slot, Bet)> {
        self.participants
            .iter()
            .filter_map(|p| p.bet.map(|bet| (p.slot, bet)))
            .collect()
    }

    #[must_use]
    pub fn bet_count(&self) -> usize {
        self.participants.iter().filter(|p| p.has_bet()).count()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// The settlement receipt once settled. Repeated calls return the same
    /// receipt; settlement never runs twice.
    #[must_use]
    pub fn settlement(&self) -> Option<&SettlementReceipt> {
        self.receipt.as_ref()
    }

    #[must_use]
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
