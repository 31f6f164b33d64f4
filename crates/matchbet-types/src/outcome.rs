//! Match outcome model.
//!
//! An [`Outcome`] is what participants predict and what the result source
//! reports. Callers translating raw scores or numeric codes use
//! [`Outcome::from_scores`] and [`Outcome::from_code`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{MatchbetError, Result};

/// The three possible results of a match.
///
/// Ordering exists for display and deterministic iteration only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Outcome {
    /// The first-listed team won.
    Team1Win,
    /// Level scores.
    Draw,
    /// The second-listed team won.
    Team2Win,
}

impl Outcome {
    /// All outcomes in code order.
    pub const ALL: [Self; 3] = [Self::Team1Win, Self::Draw, Self::Team2Win];

    /// Derive the outcome from a final score line.
    #[must_use]
    pub fn from_scores(score1: u32, score2: u32) -> Self {
        match score1.cmp(&score2) {
            std::cmp::Ordering::Greater => Self::Team1Win,
            std::cmp::Ordering::Equal => Self::Draw,
            std::cmp::Ordering::Less => Self::Team2Win,
        }
    }

    /// Parse the numeric code used by result feeds and prompts
    /// (`0` = team 1 win, `1` = draw, `2` = team 2 win).
    ///
    /// # Errors
    /// Returns [`MatchbetError::InvalidOutcomeCode`] for any other value.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Team1Win),
            1 => Ok(Self::Draw),
            2 => Ok(Self::Team2Win),
            other => Err(MatchbetError::InvalidOutcomeCode(other)),
        }
    }

    /// Numeric code, inverse of [`Outcome::from_code`].
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Team1Win => 0,
            Self::Draw => 1,
            Self::Team2Win => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team1Win => write!(f, "TEAM1_WIN"),
            Self::Draw => write!(f, "DRAW"),
            Self::Team2Win => write!(f, "TEAM2_WIN"),
        }
    }
}
