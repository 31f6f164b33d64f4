//! Lifecycle phases of a single match's betting round.
//!
//! **FUNDED → BETS_OPEN → RESOLVED → SETTLED**
//!
//! RESOLVED is entered and left inside the same `set_result` call: a match
//! with a recorded result but unapplied payouts is never observable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The phase of a match's betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Participants funded, no predictions yet.
    Funded,
    /// At least one prediction recorded, no result yet.
    BetsOpen,
    /// Result recorded, payouts being computed.
    Resolved,
    /// Payouts applied. Terminal.
    Settled,
}

impl MatchPhase {
    /// Whether new bets may still be placed.
    #[must_use]
    pub fn accepts_bets(self) -> bool {
        matches!(self, Self::Funded | Self::BetsOpen)
    }

    /// Whether this is the terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Settled
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Funded => write!(f, "FUNDED"),
            Self::BetsOpen => write!(f, "BETS_OPEN"),
            Self::Resolved => write!(f, "RESOLVED"),
            Self::Settled => write!(f, "SETTLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_open_phases_accept_bets() {
        assert!(MatchPhase::Funded.accepts_bets());
        assert!(MatchPhase::BetsOpen.accepts_bets());
        assert!(!MatchPhase::Resolved.accepts_bets());
        assert!(!MatchPhase::Settled.accepts_bets());
    }

    #[test]
    fn settled_is_terminal() {
        assert!(MatchPhase::Settled.is_terminal());
        assert!(!MatchPhase::BetsOpen.is_terminal());
    }

    #[test]
    fn phase_display() {
        assert_eq!(format!("{}", MatchPhase::BetsOpen), "BETS_OPEN");
        assert_eq!(format!("{}", MatchPhase::Settled), "SETTLED");
    }

    #[test]
    fn phase_serde_roundtrip() {
        let phase = MatchPhase::BetsOpen;
        let json = serde_json::to_string(&phase).unwrap();
        let back: MatchPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, back);
    }
}
