//! Supply conservation invariant checker.
//!
//! Invariant enforced before every settlement is committed:
//! ```text
//! Σ(available + reserved) == Σ(initial balances)
//! ```
//!
//! Funding is the only transition allowed to change the total. If the
//! check ever fails the staged settlement is discarded.

use matchbet_types::{MatchbetError, Result};

/// Tracks the funded total of one match and validates the actual total
/// against it.
#[derive(Debug, Clone, Default)]
pub struct SupplyConservation {
    /// Total funded at construction.
    funded: u128,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record initial funding for a slot.
    pub fn record_funding(&mut self, amount: u64) {
        self.funded += u128::from(amount);
    }

    /// Expected total supply: everything ever funded.
    #[must_use]
    pub fn expected_supply(&self) -> u128 {
        self.funded
    }

    /// Verify that the actual supply matches the funded total.
    ///
    /// # Errors
    /// Returns [`MatchbetError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, actual_supply: u128) -> Result<()> {
        if actual_supply != self.funded {
            return Err(MatchbetError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != funded {}",
                    self.funded
                ),
            });
        }
        Ok(())
    }
}
