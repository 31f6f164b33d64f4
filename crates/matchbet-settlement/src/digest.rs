//! Settlement digests.
//!
//! Two engines settling the same bets against the same result must agree
//! on every payout line. The digest is a SHA-256 over the deterministic
//! parts of a settlement so that agreement can be checked by hash.

use matchbet_types::{MatchId, Outcome, Payout, SettlementReceipt, constants};
use sha2::{Digest, Sha256};

/// Compute the settlement digest.
///
/// Depends on:
/// - Match id
/// - Outcome code
/// - Every payout line (slot, prediction, stake, won, credited), in order
///
/// The settlement timestamp is deliberately excluded.
#[must_use]
pub fn compute_settlement_digest(
    match_id: MatchId,
    outcome: Outcome,
    payouts: &[Payout],
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::SETTLEMENT_DIGEST_DOMAIN);
    hasher.update(match_id.0.as_bytes());
    hasher.update([outcome.code()]);
    hasher.update((payouts.len() as u64).to_le_bytes());

    for payout in payouts {
        hasher.update((payout.slot.index() as u64).to_le_bytes());
        hasher.update([payout.prediction.code()]);
        hasher.update(payout.stake.to_le_bytes());
        hasher.update([u8::from(payout.won)]);
        hasher.update(payout.credited.to_le_bytes());
    }

    hasher.finalize().into()
}

/// Recompute a receipt's digest and compare.
#[must_use]
pub fn verify_settlement_digest(receipt: &SettlementReceipt) -> bool {
    compute_settlement_digest(receipt.match_id, receipt.outcome, &receipt.payouts)
        == receipt.digest
}
