// ABOUTME: Integration tests for BMI calculation, categorization and gauge position
// ABOUTME: Covers category boundaries, gauge clamping and profile-derived assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, default_profile, profile};
use vitalsense::intelligence::{compute_bmi, gauge_position, BmiAssessment, BmiCategory};
use vitalsense::models::Gender;

// ============================================================================
// Calculation
// ============================================================================

#[test]
fn test_compute_bmi_formula() {
    assert_close(compute_bmi(70.0, 170.0), 70.0 / (1.7 * 1.7));
    assert_close(compute_bmi(81.0, 180.0), 25.0);
}

#[test]
fn test_bmi_for_extreme_valid_profiles() {
    let lightest = BmiAssessment::for_profile(&profile(20, Gender::Female, 200.0, 40.0));
    assert_close(lightest.bmi, 10.0);
    assert_eq!(lightest.category, BmiCategory::Underweight);

    let heaviest = BmiAssessment::for_profile(&profile(20, Gender::Male, 140.0, 120.0));
    assert!((heaviest.bmi - 61.22).abs() < 0.01);
    assert_eq!(heaviest.category, BmiCategory::Obese);
}

#[test]
fn test_bmi_rises_with_weight_and_falls_with_height() {
    let by_weight: Vec<f64> = [40.0, 55.0, 70.0, 95.0, 120.0]
        .into_iter()
        .map(|weight| compute_bmi(weight, 170.0))
        .collect();
    for pair in by_weight.windows(2) {
        assert!(pair[1] > pair[0], "{pair:?}");
    }

    let by_height: Vec<f64> = [140.0, 155.0, 170.0, 185.0, 200.0]
        .into_iter()
        .map(|height| compute_bmi(70.0, height))
        .collect();
    for pair in by_height.windows(2) {
        assert!(pair[1] < pair[0], "{pair:?}");
    }
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_category_boundaries_belong_to_upper_band() {
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_category_labels_and_ranges() {
    let expected = [
        (BmiCategory::Underweight, "Underweight", "< 18.5"),
        (BmiCategory::Normal, "Normal", "18.5 - 24.9"),
        (BmiCategory::Overweight, "Overweight", "25 - 29.9"),
        (BmiCategory::Obese, "Obese", "> 30"),
    ];
    for (category, label, range) in expected {
        assert_eq!(category.label(), label);
        assert_eq!(category.range_text(), range);
        assert_eq!(category.to_string(), label);
    }
}

// ============================================================================
// Gauge
// ============================================================================

#[test]
fn test_gauge_is_linear_between_10_and_40() {
    assert_close(gauge_position(10.0), 0.0);
    assert_close(gauge_position(25.0), 50.0);
    assert_close(gauge_position(40.0), 100.0);
}

#[test]
fn test_gauge_clamps_outside_scale() {
    assert_close(gauge_position(5.0), 0.0);
    assert_close(gauge_position(61.2), 100.0);
}

#[test]
fn test_default_profile_assessment() {
    let assessment = BmiAssessment::for_profile(&default_profile());

    assert!((assessment.bmi - 24.22).abs() < 0.01);
    assert_eq!(assessment.category, BmiCategory::Normal);
    assert_eq!(assessment.range, "18.5 - 24.9");
    assert!((assessment.gauge_percent - 47.4).abs() < 0.1);
}
