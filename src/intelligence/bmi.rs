// ABOUTME: Body-mass index calculation and WHO category banding
// ABOUTME: Computes BMI, its category with display range and the overview gauge position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use vitalsense_core::constants::bmi::{
    GAUGE_MIN, GAUGE_SPAN, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER,
};
use vitalsense_core::models::Profile;

/// Body-mass index in kg/m²
///
/// Inputs are range-checked upstream by [`Profile`]; a zero height yields
/// an infinite result rather than an error.
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Position of a BMI value on the overview gauge, as a percentage in `[0, 100]`
#[must_use]
pub fn gauge_position(bmi: f64) -> f64 {
    ((bmi - GAUGE_MIN) / GAUGE_SPAN * 100.0).clamp(0.0, 100.0)
}

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Display range
    #[must_use]
    pub const fn range_text(&self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5 - 24.9",
            Self::Overweight => "25 - 29.9",
            Self::Obese => "> 30",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI with its category and gauge position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiAssessment {
    /// Body-mass index, kg/m²
    pub bmi: f64,
    /// Category
    pub category: BmiCategory,
    /// Category display range
    pub range: &'static str,
    /// Overview gauge position, percent
    pub gauge_percent: f64,
}

impl BmiAssessment {
    /// Assess a raw BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        let category = BmiCategory::from_bmi(bmi);
        Self {
            bmi,
            category,
            range: category.range_text(),
            gauge_percent: gauge_position(bmi),
        }
    }

    /// Assess a profile
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self::from_bmi(compute_bmi(profile.weight_kg(), profile.height_cm()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_gauge_is_clamped() {
        assert!(gauge_position(5.0).abs() < f64::EPSILON);
        assert!((gauge_position(25.0) - 50.0).abs() < 1e-9);
        assert!((gauge_position(45.0) - 100.0).abs() < f64::EPSILON);
    }
}
