// ABOUTME: Integration tests for the heart and diabetes logistic risk simulators
// ABOUTME: Covers known scores, monotonicity, banding and feature importance ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{default_profile, profile};
use vitalsense::config::RiskBandsConfig;
use vitalsense::constants::risk_models::heart::FEATURE_COUNT;
use vitalsense::intelligence::risk::diabetes::{assess_diabetes, diabetes_feature_importance};
use vitalsense::intelligence::risk::heart::{assess_heart, heart_feature_importance};
use vitalsense::intelligence::risk::sigmoid;
use vitalsense::intelligence::{
    heart_feature_vector, simulate_diabetes_risk, simulate_heart_risk, DiabetesFeatures,
};
use vitalsense::models::{
    ClinicalForm, DiabetesInputs, FieldSpec, Gender, HeartInputs, Profile, RiskLevel,
};

/// Form with every field at the bound picked from its spec
fn form_at<F: ClinicalForm + Default>(bound: fn(&FieldSpec) -> f64) -> F {
    let mut form = F::default();
    for spec in F::fields() {
        form.set(spec.key, bound(spec)).unwrap();
    }
    form
}

fn high_risk_heart_inputs() -> HeartInputs {
    HeartInputs {
        cp: 3.0,
        trestbps: 180.0,
        chol: 350.0,
        fbs: 1.0,
        restecg: 2.0,
        thalach: 90.0,
        exang: 1.0,
        oldpeak: 4.0,
        slope: 2.0,
        ca: 3.0,
        thal: 3.0,
    }
}

// ============================================================================
// Heart simulator
// ============================================================================

#[test]
fn test_heart_feature_vector_order() {
    let female = profile(52, Gender::Female, 160.0, 60.0);
    let features = heart_feature_vector(&female, &HeartInputs::default());

    assert_eq!(features.len(), FEATURE_COUNT);
    assert!((features[0] - 52.0).abs() < f64::EPSILON);
    assert!(features[1].abs() < f64::EPSILON, "female maps to 0");
    assert!((features[3] - 120.0).abs() < f64::EPSILON, "trestbps");
    assert!((features[7] - 150.0).abs() < f64::EPSILON, "thalach");
    assert!((features[12] - 2.0).abs() < f64::EPSILON, "thal");
}

#[test]
fn test_heart_default_inputs_score() {
    // z = -3.5 + 1.2 + 0.15 + 0.2 + 1.2 + 1.0 - 4.5 + 0.15 + 0.1 + 0.24 = -3.76
    let features = heart_feature_vector(&default_profile(), &HeartInputs::default());
    let risk = simulate_heart_risk(&features);

    assert!((risk.value() - sigmoid(-3.76)).abs() < 1e-9);
    assert!((risk.percent() - 2.275).abs() < 0.001);
}

#[test]
fn test_heart_high_risk_inputs() {
    let older = profile(70, Gender::Male, 175.0, 85.0);
    let assessment = assess_heart(&older, &high_risk_heart_inputs(), &RiskBandsConfig::default());

    assert!((assessment.score.value() - 0.9648).abs() < 1e-4);
    assert_eq!(assessment.level, RiskLevel::High);
    assert_eq!(assessment.model, "heart");
}

#[test]
fn test_heart_risk_falls_as_max_heart_rate_rises() {
    let profile = default_profile();
    let mut previous = 1.0;
    for thalach in [60.0, 100.0, 150.0, 200.0] {
        let inputs = HeartInputs {
            thalach,
            ..HeartInputs::default()
        };
        let risk = simulate_heart_risk(&heart_feature_vector(&profile, &inputs)).value();
        assert!(risk < previous, "thalach {thalach} should lower risk");
        previous = risk;
    }
}

#[test]
fn test_male_scores_higher_than_female() {
    let inputs = HeartInputs::default();
    let male = simulate_heart_risk(&heart_feature_vector(
        &profile(40, Gender::Male, 170.0, 70.0),
        &inputs,
    ));
    let female = simulate_heart_risk(&heart_feature_vector(
        &profile(40, Gender::Female, 170.0, 70.0),
        &inputs,
    ));
    assert!(male.value() > female.value());
}

#[test]
fn test_heart_importance_uses_positive_max_hr_weight() {
    let features = heart_feature_vector(&default_profile(), &HeartInputs::default());
    let ranked = heart_feature_importance(&features);

    let max_hr = ranked.iter().find(|c| c.name == "Max HR").unwrap();
    assert!((max_hr.weight - 0.03).abs() < f64::EPSILON);
    assert!((max_hr.importance - 4.5).abs() < 1e-9);

    // 0.03 * 150 = 4.5 is the largest term for the defaults
    assert_eq!(ranked[0].name, "Max HR");
    assert!((ranked[0].normalized - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_heart_importance_sorted_and_normalized() {
    let features = heart_feature_vector(&default_profile(), &high_risk_heart_inputs());
    let ranked = heart_feature_importance(&features);

    assert_eq!(ranked.len(), FEATURE_COUNT);
    for pair in ranked.windows(2) {
        assert!(pair[0].importance >= pair[1].importance);
    }
    assert!(ranked
        .iter()
        .all(|c| (0.0..=1.0).contains(&c.normalized)));
}

#[test]
fn test_all_zero_features_normalize_to_zero() {
    let ranked = heart_feature_importance(&[0.0; FEATURE_COUNT]);
    assert!(ranked.iter().all(|c| c.normalized.abs() < f64::EPSILON));
    // stable sort keeps declaration order on ties
    assert_eq!(ranked[0].name, "Age");
    assert_eq!(ranked[FEATURE_COUNT - 1].name, "Thal");
}

#[test]
fn test_simulator_accepts_unchecked_values() {
    let mut features = [0.0; FEATURE_COUNT];
    features[7] = f64::NAN;
    let risk = simulate_heart_risk(&features);
    assert!(risk.value().abs() < f64::EPSILON, "NaN maps to zero");

    features[7] = -1.0e6;
    let saturated = simulate_heart_risk(&features);
    assert!((saturated.value() - 1.0).abs() < 1e-9);
}

// ============================================================================
// Diabetes simulator
// ============================================================================

#[test]
fn test_diabetes_default_inputs_score() {
    let features = DiabetesFeatures::from_profile(&default_profile(), &DiabetesInputs::default());
    let risk = simulate_diabetes_risk(&features);

    assert!((risk.value() - 0.4344).abs() < 1e-4);
    assert_eq!(RiskLevel::classify(risk), RiskLevel::Moderate);
}

#[test]
fn test_diabetes_risk_rises_with_glucose() {
    let profile = default_profile();
    let risks: Vec<f64> = [100.0, 150.0, 180.0, 200.0]
        .into_iter()
        .map(|glucose| {
            let inputs = DiabetesInputs {
                glucose,
                ..DiabetesInputs::default()
            };
            simulate_diabetes_risk(&DiabetesFeatures::from_profile(&profile, &inputs)).value()
        })
        .collect();

    for pair in risks.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!((risks[1] - 0.8155).abs() < 1e-4);
}

#[test]
fn test_pregnancies_weigh_more_for_women() {
    let inputs = DiabetesInputs {
        pregnancies: 6.0,
        ..DiabetesInputs::default()
    };
    let male = DiabetesFeatures::from_profile(&profile(35, Gender::Male, 165.0, 65.0), &inputs);
    let female =
        DiabetesFeatures::from_profile(&profile(35, Gender::Female, 165.0, 65.0), &inputs);

    let gap = simulate_diabetes_risk(&female).value() - simulate_diabetes_risk(&male).value();
    assert!(gap > 0.0);
}

#[test]
fn test_diabetes_importance_has_eight_terms() {
    let features = DiabetesFeatures::from_profile(&default_profile(), &DiabetesInputs::default());
    let ranked = diabetes_feature_importance(&features);

    assert_eq!(ranked.len(), 8);
    assert!(ranked.iter().all(|c| c.name != "Gender"));
    assert_eq!(ranked[0].name, "Glucose");
    // BMI 24.22 * 0.09 = 2.18 follows glucose 3.5
    assert_eq!(ranked[1].name, "BMI");
}

#[test]
fn test_assess_diabetes_bands_with_config() {
    let bands = RiskBandsConfig {
        moderate_threshold: 0.5,
        high_threshold: 0.9,
    };
    let assessment = assess_diabetes(&default_profile(), &DiabetesInputs::default(), &bands);

    assert_eq!(assessment.model, "diabetes");
    assert_eq!(assessment.level, RiskLevel::Low);
    assert_eq!(assessment.top_contributions(3).len(), 3);
}

// ============================================================================
// Output range
// ============================================================================

#[test]
fn test_risks_stay_strictly_inside_unit_interval_at_form_bounds() {
    // (profile, form bound): youngest/lightest with minimum inputs, oldest/heaviest with maximum
    let corners: [(Profile, fn(&FieldSpec) -> f64); 4] = [
        (profile(20, Gender::Female, 200.0, 40.0), |spec| spec.min),
        (profile(20, Gender::Male, 200.0, 40.0), |spec| spec.min),
        (profile(80, Gender::Female, 140.0, 120.0), |spec| spec.max),
        (profile(80, Gender::Male, 140.0, 120.0), |spec| spec.max),
    ];

    for (profile, bound) in corners {
        let heart_inputs: HeartInputs = form_at(bound);
        let heart = simulate_heart_risk(&heart_feature_vector(&profile, &heart_inputs)).value();
        assert!(0.0 < heart && heart < 1.0, "heart risk {heart} for {profile:?}");

        let diabetes_inputs: DiabetesInputs = form_at(bound);
        let diabetes =
            simulate_diabetes_risk(&DiabetesFeatures::from_profile(&profile, &diabetes_inputs))
                .value();
        assert!(
            0.0 < diabetes && diabetes < 1.0,
            "diabetes risk {diabetes} for {profile:?}"
        );
    }
}
