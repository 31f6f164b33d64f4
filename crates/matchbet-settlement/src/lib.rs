//! # matchbet-settlement
//!
//! **Settlement engine** for a single match's betting round: stake
//! reservation, outcome resolution, stake-proportional payouts, and
//! supply conservation checks.
//!
//! ## Architecture
//!
//! 1. **SlotLedger**: available/reserved balance per participant slot
//! 2. **compute_payouts**: pure payout arithmetic over placed bets
//! 3. **SupplyConservation**: funded total vs. actual total, checked
//!    before any settlement is committed
//! 4. **Settlement digest**: SHA-256 commitment over payout lines
//! 5. **SettlementEngine**: the lifecycle state machine tying it together
//! 6. **SharedEngine**: lock-guarded handle for callers on several threads
//!
//! ## Lifecycle
//!
//! ```text
//! new() → FUNDED → place_bet() → BETS_OPEN → set_result()
//!       → RESOLVED → settle → SETTLED
//! ```
//!
//! `set_result` stages the new ledger, verifies conservation, and commits
//! in one step. On any error nothing changes.

pub mod digest;
pub mod engine;
pub mod ledger;
pub mod payout;
pub mod shared;
pub mod supply_conservation;

pub use digest::{compute_settlement_digest, verify_settlement_digest};
pub use engine::SettlementEngine;
pub use ledger::SlotLedger;
pub use payout::{PayoutPlan, compute_payouts};
pub use shared::{EngineSnapshot, SharedEngine};
pub use supply_conservation::SupplyConservation;
