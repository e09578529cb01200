// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Profile limits, BMI bands, risk model coefficients and guidance text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Tunable thresholds live in the assessment configuration of the
//! main crate; the values here are either fixed model coefficients or the
//! defaults that configuration starts from.

/// Logistic model coefficients for the heart and diabetes simulators
pub mod risk_models;

/// Fixed advisory text attached to generated plans
pub mod guidance;

/// Accepted ranges and form defaults for the user profile
pub mod profile_limits {
    /// Minimum accepted age in years
    pub const MIN_AGE: u32 = 20;
    /// Maximum accepted age in years
    pub const MAX_AGE: u32 = 80;
    /// Minimum accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 140.0;
    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 200.0;
    /// Minimum accepted weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 40.0;
    /// Maximum accepted weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 120.0;

    /// Initial age shown on the profile form
    pub const DEFAULT_AGE: u32 = 30;
    /// Initial height shown on the profile form
    pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
    /// Initial weight shown on the profile form
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
}

/// BMI category boundaries (kg/m²)
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value (and at or above underweight) the category is normal
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value the category is overweight, at or above it obese
    pub const OVERWEIGHT_UPPER: f64 = 30.0;

    /// BMI mapped to the left edge of the overview gauge
    pub const GAUGE_MIN: f64 = 10.0;
    /// Width of the gauge scale in BMI units
    pub const GAUGE_SPAN: f64 = 30.0;
}

/// Default risk banding thresholds
pub mod risk_bands {
    /// Scores strictly above this are at least moderate
    pub const MODERATE_THRESHOLD: f64 = 0.4;
    /// Scores strictly above this are high
    pub const HIGH_THRESHOLD: f64 = 0.7;
}

/// Energy and macronutrient constants
pub mod nutrition {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Mifflin-St Jeor weight coefficient
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor constant for men
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor constant for women
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Moderate activity multiplier applied to BMR
    pub const MODERATE_ACTIVITY_FACTOR: f64 = 1.55;
}

/// Empty-state prompts shown on the overview
pub mod overview {
    /// Shown when no heart score has been predicted yet
    pub const HEART_PROMPT: &str = "Run heart prediction in the Heart tab to see results here.";
    /// Shown when no diabetes score has been predicted yet
    pub const DIABETES_PROMPT: &str =
        "Run diabetes prediction in the Diabetes tab to see results here.";
}
