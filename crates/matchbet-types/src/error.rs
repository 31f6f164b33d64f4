//! Error types for the MatchBet settlement engine.
//!
//! All errors use the `MB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant / slot errors
//! - 2xx: Balance errors
//! - 3xx: Bet errors
//! - 4xx: Lifecycle errors
//! - 8xx: Invariant errors
//! - 9xx: General / internal errors
//!
//! Every variant is recoverable by the caller. The engine leaves its state
//! untouched whenever it returns one of these.

use thiserror::Error;

use crate::{Amount, Outcome, ParticipantId, Slot};

/// Central error enum for all MatchBet operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchbetError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// The slot does not exist in this match.
    #[error("MB_ERR_100: Invalid slot: {0}")]
    InvalidSlot(Slot),

    /// A match needs two or three participants.
    #[error("MB_ERR_101: Invalid participant count: {count} (expected 2 or 3)")]
    InvalidParticipantCount { count: usize },

    /// The same identity was supplied for two slots.
    #[error("MB_ERR_102: Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    /// No slot is held by this identity.
    #[error("MB_ERR_103: Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// Stake exceeds what the participant can reserve.
    #[error("MB_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// Initial balances sum past the representable range.
    #[error("MB_ERR_201: Balance overflow")]
    BalanceOverflow,

    // =================================================================
    // Bet Errors (3xx)
    // =================================================================
    /// The slot already holds a prediction.
    #[error("MB_ERR_300: Bet already placed for {0}")]
    AlreadyBet(Slot),

    /// A bet must stake something.
    #[error("MB_ERR_301: Stake must be greater than zero")]
    ZeroStake,

    /// Another slot already predicted this outcome and the match requires
    /// distinct predictions.
    #[error("MB_ERR_302: Prediction {outcome} already taken by {slot}")]
    DuplicatePrediction { outcome: Outcome, slot: Slot },

    /// A numeric outcome code outside 0..=2.
    #[error("MB_ERR_303: Invalid outcome code: {0}")]
    InvalidOutcomeCode(u8),

    // =================================================================
    // Lifecycle Errors (4xx)
    // =================================================================
    /// Not enough bets to resolve the match.
    #[error("MB_ERR_400: Incomplete bets: {placed} placed, {required} required")]
    IncompleteBets { placed: usize, required: usize },

    /// The result has already been recorded.
    #[error("MB_ERR_401: Result already set")]
    ResultAlreadySet,

    /// The match has been settled and accepts no further bets.
    #[error("MB_ERR_402: Match already settled")]
    AlreadySettled,

    // =================================================================
    // Invariant Errors (8xx)
    // =================================================================
    /// Supply conservation invariant violated. Settlement is not applied.
    #[error("MB_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("MB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Configuration error (malformed or out-of-range config).
    #[error("MB_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MatchbetError>;

impl From<serde_json::Error> for MatchbetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = MatchbetError::InvalidSlot(Slot(2));
        let msg = format!("{err}");
        assert!(msg.starts_with("MB_ERR_100"), "Got: {msg}");
        assert!(msg.contains("slot:2"));
    }

    #[test]
    fn insufficient_balance_display() {
        let err = MatchbetError::InsufficientBalance {
            needed: 100,
            available: 50,
        };
        let msg = format!("{err}");
        assert!(msg.contains("MB_ERR_200"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn duplicate_prediction_display() {
        let err = MatchbetError::DuplicatePrediction {
            outcome: Outcome::Draw,
            slot: Slot(0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("DRAW"));
        assert!(msg.contains("slot:0"));
    }

    #[test]
    fn all_errors_have_mb_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(MatchbetError::AlreadyBet(Slot(1))),
            Box::new(MatchbetError::ZeroStake),
            Box::new(MatchbetError::ResultAlreadySet),
            Box::new(MatchbetError::AlreadySettled),
            Box::new(MatchbetError::IncompleteBets {
                placed: 1,
                required: 2,
            }),
            Box::new(MatchbetError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("MB_ERR_"),
                "Error missing MB_ERR_ prefix: {msg}"
            );
        }
    }
}
