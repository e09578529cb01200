// ABOUTME: Heart-disease risk simulator over a 13-feature logistic model
// ABOUTME: Builds the feature vector from profile and clinical inputs, scores it and ranks importance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use vitalsense_core::constants::risk_models::heart::{
    BIAS, FEATURE_COUNT, FEATURE_NAMES, IMPORTANCE_WEIGHTS, WEIGHTS,
};
use vitalsense_core::models::{HeartInputs, Profile, RiskScore};

use super::{rank_contributions, sigmoid, FeatureContribution, RiskAssessment};
use crate::config::RiskBandsConfig;

/// Ordered feature vector
/// `[age, isMale, cp, trestbps, chol, fbs, restecg, thalach, exang, oldpeak, slope, ca, thal]`
#[must_use]
pub fn heart_feature_vector(profile: &Profile, inputs: &HeartInputs) -> [f64; FEATURE_COUNT] {
    [
        f64::from(profile.age()),
        profile.gender().male_indicator(),
        inputs.cp,
        inputs.trestbps,
        inputs.chol,
        inputs.fbs,
        inputs.restecg,
        inputs.thalach,
        inputs.exang,
        inputs.oldpeak,
        inputs.slope,
        inputs.ca,
        inputs.thal,
    ]
}

/// Probability of heart disease for a feature vector
#[must_use]
pub fn simulate_heart_risk(features: &[f64; FEATURE_COUNT]) -> RiskScore {
    let z = WEIGHTS
        .iter()
        .zip(features)
        .fold(BIAS, |acc, (w, x)| w.mul_add(*x, acc));
    debug!(z, "heart logit");
    RiskScore::from_probability(sigmoid(z))
}

/// Ranked feature importance, using the importance weights (Max HR at +0.03)
#[must_use]
pub fn heart_feature_importance(features: &[f64; FEATURE_COUNT]) -> Vec<FeatureContribution> {
    let contributions = FEATURE_NAMES
        .iter()
        .zip(IMPORTANCE_WEIGHTS)
        .zip(features)
        .map(|((&name, weight), &value)| FeatureContribution::new(name, weight, value))
        .collect();
    rank_contributions(contributions)
}

/// Score a profile and clinical inputs
#[must_use]
pub fn assess_heart(
    profile: &Profile,
    inputs: &HeartInputs,
    bands: &RiskBandsConfig,
) -> RiskAssessment {
    let features = heart_feature_vector(profile, inputs);
    RiskAssessment::new(
        "heart",
        simulate_heart_risk(&features),
        heart_feature_importance(&features),
        bands,
    )
}
