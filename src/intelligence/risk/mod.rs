// ABOUTME: Shared machinery for the logistic risk simulators
// ABOUTME: Sigmoid, per-feature contribution ranking and the RiskAssessment result type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Risk Simulation
//!
//! Both simulators are fixed linear models passed through a logistic
//! function. They accept any numeric input; range checks belong to the
//! clinical forms.
//!
//! Feature importance is the absolute per-term contribution `|w_i * x_i|`,
//! ranked in descending order and normalized by the largest term.

/// Diabetes-risk simulator
pub mod diabetes;
/// Heart-disease risk simulator
pub mod heart;

use std::cmp::Ordering;

use serde::Serialize;
use vitalsense_core::models::{RiskLevel, RiskScore};

use crate::config::RiskBandsConfig;

/// Logistic function `1 / (1 + e^-z)`
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// One term of a linear risk model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    /// Display name
    pub name: &'static str,
    /// Coefficient used for the importance view
    pub weight: f64,
    /// Input value
    pub value: f64,
    /// `|weight * value|`
    pub importance: f64,
    /// Importance divided by the largest importance, in `[0, 1]`
    pub normalized: f64,
}

impl FeatureContribution {
    /// Build an unranked contribution
    #[must_use]
    pub fn new(name: &'static str, weight: f64, value: f64) -> Self {
        Self {
            name,
            weight,
            value,
            importance: (weight * value).abs(),
            normalized: 0.0,
        }
    }
}

/// Sort contributions by importance (descending, stable) and normalize by the maximum
///
/// When the largest importance is zero the divisor is 1, so every entry
/// normalizes to 0.
#[must_use]
pub fn rank_contributions(mut contributions: Vec<FeatureContribution>) -> Vec<FeatureContribution> {
    contributions.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });

    let max = contributions
        .first()
        .map(|top| top.importance)
        .filter(|&importance| importance > 0.0)
        .unwrap_or(1.0);

    for contribution in &mut contributions {
        contribution.normalized = contribution.importance / max;
    }
    contributions
}

/// Result of running a simulator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Which model produced the score (`heart` or `diabetes`)
    pub model: &'static str,
    /// Probability in `[0, 1]`
    pub score: RiskScore,
    /// Score as a percentage
    pub percent: f64,
    /// Banded level
    pub level: RiskLevel,
    /// Ranked feature importance
    pub contributions: Vec<FeatureContribution>,
}

impl RiskAssessment {
    /// Assemble an assessment, banding the score with the given thresholds
    #[must_use]
    pub fn new(
        model: &'static str,
        score: RiskScore,
        contributions: Vec<FeatureContribution>,
        bands: &RiskBandsConfig,
    ) -> Self {
        Self {
            model,
            score,
            percent: score.percent(),
            level: bands.level(score),
            contributions,
        }
    }

    /// The `n` most important features
    #[must_use]
    pub fn top_contributions(&self, n: usize) -> &[FeatureContribution] {
        &self.contributions[..n.min(self.contributions.len())]
    }
}
