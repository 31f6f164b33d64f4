//! # matchbet-types
//!
//! Shared types, errors, and configuration for the **MatchBet** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`MatchId`], [`ParticipantId`], [`Slot`]
//! - **Outcome model**: [`Outcome`]
//! - **Lifecycle**: [`MatchPhase`]
//! - **Participant model**: [`Participant`], [`Bet`]
//! - **Balance model**: [`BalanceEntry`], [`Amount`]
//! - **Receipt model**: [`SettlementReceipt`], [`Payout`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`MatchbetError`] with `MB_ERR_` prefix codes
//! - **Constants**: participant limits and defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod participant;
pub mod phase;
pub mod receipt;

// Re-export all primary types at crate root:
//   use matchbet_types::{Outcome, Slot, MatchbetError, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use outcome::*;
pub use participant::*;
pub use phase::*;
pub use receipt::*;

// Constants are accessed via `matchbet_types::constants::FOO`.
