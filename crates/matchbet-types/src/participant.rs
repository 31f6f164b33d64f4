//! Participant and bet types.

use serde::{Deserialize, Serialize};

use crate::{Amount, Outcome, ParticipantId, Slot};

/// A prediction backed by a stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// The predicted outcome.
    pub prediction: Outcome,
    /// Amount reserved against the prediction. Always non-zero.
    pub stake: Amount,
}

/// One funded seat in a match.
///
/// Balances are held by the engine's ledger, keyed by [`Slot`]; the
/// participant record carries identity and the bet, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Caller-supplied identity, unique within the match.
    pub id: ParticipantId,
    /// Seat index within the match.
    pub slot: Slot,
    /// Balance supplied at construction.
    pub initial_balance: Amount,
    /// The bet placed from this seat, if any.
    pub bet: Option<Bet>,
}

impl Participant {
    #[must_use]
    pub fn new(id: ParticipantId, slot: Slot, initial_balance: Amount) -> Self {
        Self {
            id,
            slot,
            initial_balance,
            bet: None,
        }
    }

    #[must_use]
    pub fn prediction(&self) -> Option<Outcome> {
        self.bet.map(|b| b.prediction)
    }

    /// Staked amount; zero when the participant has not bet.
    #[must_use]
    pub fn stake(&self) -> Amount {
        self.bet.map_or(0, |b| b.stake)
    }

    #[must_use]
    pub fn has_bet(&self) -> bool {
        self.bet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_participant_has_no_stake() {
        let p = Participant::new(ParticipantId::new(), Slot(0), 100);
        assert!(!p.has_bet());
        assert_eq!(p.stake(), 0);
        assert_eq!(p.prediction(), None);
    }

    #[test]
    fn bet_exposes_prediction_and_stake() {
        let mut p = Participant::new(ParticipantId::new(), Slot(1), 100);
        p.bet = Some(Bet {
            prediction: Outcome::Draw,
            stake: 40,
        });
        assert!(p.has_bet());
        assert_eq!(p.stake(), 40);
        assert_eq!(p.prediction(), Some(Outcome::Draw));
    }
}
