// ABOUTME: Integration tests for assessment configuration defaults, validation and env overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vitalsense::config::{AssessmentConfig, ConfigError, MacroDistribution};
use vitalsense::errors::{AppError, ErrorCode};

const OVERRIDE_VARS: [&str; 11] = [
    "VITALSENSE_RISK_MODERATE_THRESHOLD",
    "VITALSENSE_RISK_HIGH_THRESHOLD",
    "VITALSENSE_ACTIVITY_FACTOR",
    "VITALSENSE_ELEVATED_RISK_THRESHOLD",
    "VITALSENSE_OBESE_CALORIE_FACTOR",
    "VITALSENSE_OVERWEIGHT_CALORIE_FACTOR",
    "VITALSENSE_UNDERWEIGHT_CALORIE_FACTOR",
    "VITALSENSE_GENTLE_HEART_RISK_THRESHOLD",
    "VITALSENSE_MODERATE_HEART_RISK_THRESHOLD",
    "VITALSENSE_SENIOR_AGE",
    "VITALSENSE_OBESE_BMI",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and validation
// ============================================================================

#[test]
fn test_defaults_match_built_in_constants() {
    let config = AssessmentConfig::default();

    assert!((config.risk.moderate_threshold - 0.4).abs() < f64::EPSILON);
    assert!((config.risk.high_threshold - 0.7).abs() < f64::EPSILON);
    assert!((config.nutrition.activity_factor - 1.55).abs() < f64::EPSILON);
    assert!((config.nutrition.elevated_risk_threshold - 0.4).abs() < f64::EPSILON);
    assert!((config.nutrition.calorie_adjustments.obese_factor - 0.75).abs() < f64::EPSILON);
    assert_eq!(
        config.nutrition.macro_ratios.standard,
        MacroDistribution::new(30, 45, 25)
    );
    assert!((config.exercise.gentle_heart_risk_threshold - 0.6).abs() < f64::EPSILON);
    assert_eq!(config.exercise.senior_age, 50);
    assert!((config.exercise.obese_bmi - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_config_is_valid() {
    assert!(AssessmentConfig::default().validate().is_ok());
}

#[test]
fn test_inverted_risk_thresholds_rejected() {
    let mut config = AssessmentConfig::default();
    config.risk.moderate_threshold = 0.8;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
fn test_activity_factor_range() {
    let mut config = AssessmentConfig::default();
    config.nutrition.activity_factor = 3.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    config.nutrition.activity_factor = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_macro_ratios_must_sum_to_100() {
    let mut config = AssessmentConfig::default();
    config.nutrition.macro_ratios.heart = MacroDistribution::new(40, 45, 20);

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));
    assert!(err.to_string().contains("heart"));
    assert!(err.to_string().contains("105"));
}

#[test]
fn test_meal_shares_must_sum_to_100() {
    let mut config = AssessmentConfig::default();
    config.nutrition.meal_shares.lunch_pct = 20;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("got 90"));
}

#[test]
fn test_exercise_thresholds_ordered() {
    let mut config = AssessmentConfig::default();
    config.exercise.moderate_heart_risk_threshold = 0.65;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_config_error_maps_to_app_error_codes() {
    let invalid: AppError = ConfigError::InvalidRange("x").into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);

    let parse: AppError = ConfigError::Parse("bad".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);
    assert_eq!(parse.code.exit_code(), 3);
}

#[test]
fn test_config_serializes_round_trip_fields() {
    let json = serde_json::to_value(AssessmentConfig::default()).unwrap();
    assert_eq!(json["exercise"]["senior_age"], 50);
    assert_eq!(json["nutrition"]["macro_ratios"]["diabetes"]["carbs_pct"], 35);
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_equals_defaults() {
    clear_overrides();

    let config = AssessmentConfig::load().unwrap();
    assert!((config.risk.high_threshold - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.exercise.senior_age, 50);
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_overrides();
    env::set_var("VITALSENSE_RISK_HIGH_THRESHOLD", "0.8");
    env::set_var("VITALSENSE_ACTIVITY_FACTOR", " 1.2 ");
    env::set_var("VITALSENSE_SENIOR_AGE", "60");

    let config = AssessmentConfig::load().unwrap();
    clear_overrides();

    assert!((config.risk.high_threshold - 0.8).abs() < f64::EPSILON);
    assert!((config.nutrition.activity_factor - 1.2).abs() < f64::EPSILON);
    assert_eq!(config.exercise.senior_age, 60);
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_overrides();
    env::set_var("VITALSENSE_OBESE_BMI", "thirty");

    let result = AssessmentConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("VITALSENSE_OBESE_BMI"));
}

#[test]
#[serial]
fn test_override_that_breaks_validation_rejected() {
    clear_overrides();
    env::set_var("VITALSENSE_RISK_MODERATE_THRESHOLD", "0.75");

    let result = AssessmentConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
