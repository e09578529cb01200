// ABOUTME: Risk banding configuration shared by the heart and diabetes simulators
// ABOUTME: Moderate and high thresholds used to map a score to a RiskLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitalsense_core::constants::risk_bands::{HIGH_THRESHOLD, MODERATE_THRESHOLD};
use vitalsense_core::models::{RiskLevel, RiskScore};

/// Risk level thresholds (both exclusive lower bounds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBandsConfig {
    /// Scores strictly above this are at least moderate (0.4)
    pub moderate_threshold: f64,
    /// Scores strictly above this are high (0.7)
    pub high_threshold: f64,
}

impl RiskBandsConfig {
    /// Band a score using these thresholds
    #[must_use]
    pub fn level(&self, score: RiskScore) -> RiskLevel {
        RiskLevel::from_thresholds(score, self.moderate_threshold, self.high_threshold)
    }
}

impl Default for RiskBandsConfig {
    fn default() -> Self {
        Self {
            moderate_threshold: MODERATE_THRESHOLD,
            high_threshold: HIGH_THRESHOLD,
        }
    }
}
