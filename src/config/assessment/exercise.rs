// ABOUTME: Exercise-plan tier selection configuration
// ABOUTME: Heart-risk, age and BMI cut-offs that choose between the weekly templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitalsense_core::constants::bmi::OVERWEIGHT_UPPER;
use vitalsense_core::constants::risk_bands::MODERATE_THRESHOLD;

/// Tier selection thresholds, evaluated first match wins:
/// very gentle, then moderate, then high intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Heart risk strictly above this selects the very gentle plan (0.6)
    pub gentle_heart_risk_threshold: f64,
    /// Heart risk strictly above this selects the moderate plan (0.4)
    pub moderate_heart_risk_threshold: f64,
    /// Age strictly above this selects the moderate plan (50)
    pub senior_age: u32,
    /// BMI at or above this selects the moderate plan (30)
    pub obese_bmi: f64,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            gentle_heart_risk_threshold: 0.6,
            moderate_heart_risk_threshold: MODERATE_THRESHOLD,
            senior_age: 50,
            obese_bmi: OVERWEIGHT_UPPER,
        }
    }
}
