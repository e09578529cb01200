// ABOUTME: Risk score and risk level types shared by simulators, planners and the session
// ABOUTME: RiskScore is a checked probability, RiskLevel is its three-way banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::risk_bands::{HIGH_THRESHOLD, MODERATE_THRESHOLD};
use crate::errors::{AppError, AppResult};

/// A probability in `[0, 1]`
///
/// A missing score is modelled as `Option<RiskScore>::None` by callers and is
/// never treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    /// Validate a caller-supplied probability
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the value is non-finite or outside `[0, 1]`.
    pub fn new(value: f64) -> AppResult<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::value_out_of_range("risk", value, 0.0, 1.0))
        }
    }

    /// Wrap the output of a logistic function, saturating into `[0, 1]`
    ///
    /// NaN (only reachable from NaN inputs) maps to 0.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability.is_nan() {
            Self(0.0)
        } else {
            Self(probability.clamp(0.0, 1.0))
        }
    }

    /// Raw probability
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Probability as a percentage
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Strictly above the given threshold
    #[must_use]
    pub fn exceeds(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl TryFrom<f64> for RiskScore {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl FromStr for RiskScore {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_format(format!("'{s}' is not a number")))?;
        Self::new(value)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}

/// Three-way banding of a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// At or below the moderate threshold
    Low,
    /// Above the moderate threshold, at or below the high threshold
    Moderate,
    /// Above the high threshold
    High,
}

impl RiskLevel {
    /// Band a score with explicit thresholds (both exclusive lower bounds)
    #[must_use]
    pub fn from_thresholds(score: RiskScore, moderate: f64, high: f64) -> Self {
        if score.exceeds(high) {
            Self::High
        } else if score.exceeds(moderate) {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Band a score with the default 0.4 / 0.7 thresholds
    #[must_use]
    pub fn classify(score: RiskScore) -> Self {
        Self::from_thresholds(score, MODERATE_THRESHOLD, HIGH_THRESHOLD)
    }

    /// Short label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Label used in the overview summary
    #[must_use]
    pub const fn summary_label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: f64) -> RiskScore {
        RiskScore::new(value).unwrap()
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        assert_eq!(RiskLevel::classify(score(0.4)), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(score(0.41)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(score(0.7)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(score(0.71)), RiskLevel::High);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(RiskScore::new(1.2).is_err());
        assert!(RiskScore::new(-0.01).is_err());
        assert!(RiskScore::new(f64::INFINITY).is_err());
        assert!("abc".parse::<RiskScore>().is_err());
        assert!("0.35".parse::<RiskScore>().is_ok());
    }

    #[test]
    fn test_from_probability_saturates() {
        assert!((RiskScore::from_probability(1.5).value() - 1.0).abs() < f64::EPSILON);
        assert!(RiskScore::from_probability(f64::NAN).value().abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_is_transparent_and_checked() {
        assert_eq!(serde_json::to_string(&score(0.25)).unwrap(), "0.25");
        assert!(serde_json::from_str::<RiskScore>("1.5").is_err());
    }
}
