// ABOUTME: Diabetes risk simulator over a nine-input logistic model
// ABOUTME: Combines profile-derived age, BMI and gender with the diabetes clinical inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::debug;
use vitalsense_core::constants::risk_models::diabetes::{
    AGE, BIAS, BLOOD_PRESSURE, BMI, FEMALE_PREGNANCY_BONUS, GLUCOSE, INSULIN, PEDIGREE,
    PREGNANCIES, SKIN_THICKNESS,
};
use vitalsense_core::models::{DiabetesInputs, Gender, Profile, RiskScore};

use super::{rank_contributions, sigmoid, FeatureContribution, RiskAssessment};
use crate::config::RiskBandsConfig;
use crate::intelligence::bmi::compute_bmi;

/// Inputs of the diabetes model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiabetesFeatures {
    /// Age in years
    pub age: f64,
    /// Body-mass index
    pub bmi: f64,
    /// Plasma glucose
    pub glucose: f64,
    /// Diastolic blood pressure
    pub blood_pressure: f64,
    /// Serum insulin
    pub insulin: f64,
    /// Skinfold thickness
    pub skin_thickness: f64,
    /// Pedigree function
    pub dpf: f64,
    /// Number of pregnancies
    pub pregnancies: f64,
    /// Gender, adds a pregnancy term for women
    pub gender: Gender,
}

impl DiabetesFeatures {
    /// Combine a profile with the diabetes form
    #[must_use]
    pub fn from_profile(profile: &Profile, inputs: &DiabetesInputs) -> Self {
        Self {
            age: f64::from(profile.age()),
            bmi: compute_bmi(profile.weight_kg(), profile.height_cm()),
            glucose: inputs.glucose,
            blood_pressure: inputs.blood_pressure,
            insulin: inputs.insulin,
            skin_thickness: inputs.skin_thickness,
            dpf: inputs.dpf,
            pregnancies: inputs.pregnancies,
            gender: profile.gender(),
        }
    }

    /// Model terms without the gender term, in importance display order
    fn terms(&self) -> [(&'static str, f64, f64); 8] {
        [
            ("Glucose", GLUCOSE, self.glucose),
            ("BMI", BMI, self.bmi),
            ("Age", AGE, self.age),
            ("Pedigree", PEDIGREE, self.dpf),
            ("Insulin", INSULIN, self.insulin),
            ("Blood Pressure", BLOOD_PRESSURE, self.blood_pressure),
            ("Skin Thickness", SKIN_THICKNESS, self.skin_thickness),
            ("Pregnancies", PREGNANCIES, self.pregnancies),
        ]
    }
}

/// Probability of diabetes
#[must_use]
pub fn simulate_diabetes_risk(features: &DiabetesFeatures) -> RiskScore {
    let gender_term = match features.gender {
        Gender::Female => FEMALE_PREGNANCY_BONUS * features.pregnancies,
        Gender::Male => 0.0,
    };
    let z = features
        .terms()
        .iter()
        .fold(BIAS + gender_term, |acc, (_, w, x)| w.mul_add(*x, acc));
    debug!(z, "diabetes logit");
    RiskScore::from_probability(sigmoid(z))
}

/// Ranked feature importance over the eight displayed terms
#[must_use]
pub fn diabetes_feature_importance(features: &DiabetesFeatures) -> Vec<FeatureContribution> {
    let contributions = features
        .terms()
        .into_iter()
        .map(|(name, weight, value)| FeatureContribution::new(name, weight, value))
        .collect();
    rank_contributions(contributions)
}

/// Score a profile and clinical inputs
#[must_use]
pub fn assess_diabetes(
    profile: &Profile,
    inputs: &DiabetesInputs,
    bands: &RiskBandsConfig,
) -> RiskAssessment {
    let features = DiabetesFeatures::from_profile(profile, inputs);
    RiskAssessment::new(
        "diabetes",
        simulate_diabetes_risk(&features),
        diabetes_feature_importance(&features),
        bands,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_term_only_for_women() {
        let male = Profile::new(40, Gender::Male, 170.0, 70.0).unwrap();
        let female = Profile::new(40, Gender::Female, 170.0, 70.0).unwrap();
        let inputs = DiabetesInputs {
            pregnancies: 4.0,
            ..DiabetesInputs::default()
        };

        let male_risk = simulate_diabetes_risk(&DiabetesFeatures::from_profile(&male, &inputs));
        let female_risk =
            simulate_diabetes_risk(&DiabetesFeatures::from_profile(&female, &inputs));
        assert!(female_risk.value() > male_risk.value());
    }

    #[test]
    fn test_importance_omits_gender_term() {
        let features = DiabetesFeatures::from_profile(&Profile::default(), &DiabetesInputs::default());
        let ranked = diabetes_feature_importance(&features);
        assert_eq!(ranked.len(), 8);
        // glucose 100 * 0.035 = 3.5 dominates the defaults
        assert_eq!(ranked[0].name, "Glucose");
    }
}
