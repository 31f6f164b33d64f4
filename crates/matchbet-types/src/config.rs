//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::{MatchbetError, Result, constants};

/// Rules a single match is run under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject a bet whose prediction another slot already holds.
    pub require_distinct_predictions: bool,
    /// Bets required before a result is accepted. Never below 2.
    pub min_bettors: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            require_distinct_predictions: false,
            min_bettors: constants::DEFAULT_MIN_BETTORS,
        }
    }
}

impl EngineConfig {
    /// Config for head-to-head style rounds where each participant must
    /// back a different outcome.
    #[must_use]
    pub fn distinct_predictions() -> Self {
        Self {
            require_distinct_predictions: true,
            ..Self::default()
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the config can be satisfied by some match.
    pub fn validate(&self) -> Result<()> {
        if self.min_bettors < constants::DEFAULT_MIN_BETTORS {
            return Err(MatchbetError::Configuration(format!(
                "min_bettors must be at least {}, got {}",
                constants::DEFAULT_MIN_BETTORS,
                self.min_bettors
            )));
        }
        if self.min_bettors > constants::MAX_PARTICIPANTS {
            return Err(MatchbetError::Configuration(format!(
                "min_bettors must be at most {}, got {}",
                constants::MAX_PARTICIPANTS,
                self.min_bettors
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert!(!cfg.require_distinct_predictions);
        assert_eq!(cfg.min_bettors, 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let cfg = EngineConfig::from_json(r#"{"require_distinct_predictions": true}"#).unwrap();
        assert!(cfg.require_distinct_predictions);
        assert_eq!(cfg.min_bettors, 2);
    }

    #[test]
    fn from_json_rejects_out_of_range() {
        let err = EngineConfig::from_json(r#"{"min_bettors": 1}"#).unwrap_err();
        assert!(matches!(err, MatchbetError::Configuration(_)));
        let err = EngineConfig::from_json(r#"{"min_bettors": 4}"#).unwrap_err();
        assert!(matches!(err, MatchbetError::Configuration(_)));
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, MatchbetError::Configuration(_)));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = EngineConfig::distinct_predictions();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
