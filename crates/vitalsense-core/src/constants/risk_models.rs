// ABOUTME: Fixed coefficients for the heart and diabetes logistic risk simulators
// ABOUTME: Feature order, display names, weights and biases used by the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The simulators are illustrative hand-tuned formulas, not trained models.

/// Heart-disease model, 13 features in order
/// `[age, isMale, cp, trestbps, chol, fbs, restecg, thalach, exang, oldpeak, slope, ca, thal]`
pub mod heart {
    /// Number of features in the heart feature vector
    pub const FEATURE_COUNT: usize = 13;

    /// Intercept of the logistic model
    pub const BIAS: f64 = -3.5;

    /// Coefficients used by the risk formula
    pub const WEIGHTS: [f64; FEATURE_COUNT] = [
        0.04, 0.15, 0.2, 0.01, 0.005, 0.1, 0.05, -0.03, 0.3, 0.15, 0.1, 0.25, 0.12,
    ];

    /// Coefficients used for feature importance.
    ///
    /// Identical to [`WEIGHTS`] except Max HR, which is +0.03 here and -0.03
    /// in the risk formula. Importance output has always used the positive
    /// value and callers compare against it.
    pub const IMPORTANCE_WEIGHTS: [f64; FEATURE_COUNT] = [
        0.04, 0.15, 0.2, 0.01, 0.005, 0.1, 0.05, 0.03, 0.3, 0.15, 0.1, 0.25, 0.12,
    ];

    /// Display names for importance output
    pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
        "Age",
        "Sex",
        "Chest Pain",
        "BP",
        "Cholesterol",
        "FBS",
        "ECG",
        "Max HR",
        "Angina",
        "Oldpeak",
        "Slope",
        "CA",
        "Thal",
    ];
}

/// Diabetes model
pub mod diabetes {
    /// Intercept of the logistic model
    pub const BIAS: f64 = -8.5;
    /// Age coefficient
    pub const AGE: f64 = 0.035;
    /// BMI coefficient
    pub const BMI: f64 = 0.09;
    /// Plasma glucose coefficient
    pub const GLUCOSE: f64 = 0.035;
    /// Diastolic blood pressure coefficient
    pub const BLOOD_PRESSURE: f64 = 0.008;
    /// Serum insulin coefficient
    pub const INSULIN: f64 = 0.001;
    /// Skinfold thickness coefficient
    pub const SKIN_THICKNESS: f64 = 0.01;
    /// Pedigree function coefficient
    pub const PEDIGREE: f64 = 1.2;
    /// Pregnancies coefficient
    pub const PREGNANCIES: f64 = 0.1;
    /// Extra pregnancies coefficient applied to female profiles only
    pub const FEMALE_PREGNANCY_BONUS: f64 = 0.05;
}
