//! Fraud-risk scoring
//!
//! The score assigned at submission is a placeholder risk indicator, not a
//! model: the default scorer draws uniformly from [0, 1). What matters to the
//! rest of the system is the range invariant and the banding thresholds the
//! analytics views bucket by.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::ClaimSubmission;
use crate::error::ClaimError;

/// A fraud-risk score in [0, 1], assigned once at claim submission
///
/// Deserialization goes through the same range check as construction, so a
/// claim read back from JSON can never carry an out-of-range score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FraudScore(f64);

impl FraudScore {
    /// Creates a score, rejecting values outside [0, 1]
    pub fn new(value: f64) -> Result<Self, ClaimError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(ClaimError::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the risk band this score falls into
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.0)
    }
}

impl TryFrom<f64> for FraudScore {
    type Error = ClaimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FraudScore> for f64 {
    fn from(score: FraudScore) -> f64 {
        score.0
    }
}

impl fmt::Display for FraudScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Risk classification derived from a fraud score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    /// Banding thresholds: > 0.5 high, > 0.3 medium, otherwise low
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            RiskBand::High
        } else if score > 0.3 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    /// Bands an optional score; a claim without a score reads as 0 (low risk)
    pub fn from_optional(score: Option<FraudScore>) -> Self {
        Self::from_score(score.map(|s| s.value()).unwrap_or(0.0))
    }
}

/// Seam for the scoring strategy applied at submission
///
/// The store calls this exactly once per submitted claim; the score is never
/// recomputed afterwards.
pub trait FraudScorer: Send + Sync {
    fn assess(&self, submission: &ClaimSubmission) -> FraudScore;
}

/// Default scorer: uniform random in [0, 1)
///
/// Reproducibility is explicitly not required of the placeholder score.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScorer;

impl FraudScorer for RandomScorer {
    fn assess(&self, _submission: &ClaimSubmission) -> FraudScore {
        // gen::<f64>() samples [0, 1), always inside the score range
        FraudScore(rand::thread_rng().gen::<f64>())
    }
}

/// Scorer returning a constant value, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub FraudScore);

impl FixedScorer {
    pub fn new(value: f64) -> Result<Self, ClaimError> {
        Ok(Self(FraudScore::new(value)?))
    }
}

impl FraudScorer for FixedScorer {
    fn assess(&self, _submission: &ClaimSubmission) -> FraudScore {
        self.0
    }
}
