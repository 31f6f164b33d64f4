//! System-wide constants for the MatchBet settlement engine.

/// Fewest participant slots a match can be created with (slots 0 and 1).
pub const MIN_PARTICIPANTS: usize = 2;

/// Most participant slots a match can be created with (slots 0, 1 and 2).
pub const MAX_PARTICIPANTS: usize = 3;

/// Default number of placed bets required before a result is accepted.
pub const DEFAULT_MIN_BETTORS: usize = 2;

/// Domain prefix mixed into every settlement digest.
pub const SETTLEMENT_DIGEST_DOMAIN: &[u8] = b"matchbet:settlement:v1:";
