// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, profile builders and sessions with default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `vitalsense`
//!
//! Sessions built here use `AssessmentConfig::default()` so results do not
//! depend on `VITALSENSE_*` variables set by other tests.

use std::sync::Once;

use vitalsense::config::AssessmentConfig;
use vitalsense::models::{Gender, Profile, RiskScore};
use vitalsense::session::DashboardSession;

/// Absolute tolerance for floating-point comparisons
pub const EPSILON: f64 = 1e-9;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a profile that is known to be valid
pub fn profile(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Profile {
    Profile::new(age, gender, height_cm, weight_kg).expect("test profile should be valid")
}

/// 30-year-old male, 170 cm, 70 kg (BMI 24.2)
pub fn default_profile() -> Profile {
    Profile::default()
}

/// 45-year-old male, 170 cm, 95 kg (BMI 32.9)
pub fn obese_profile() -> Profile {
    profile(45, Gender::Male, 170.0, 95.0)
}

/// Session for a profile with default configuration
pub fn session_for(profile: Profile) -> DashboardSession {
    init_test_logging();
    DashboardSession::with_config(profile, AssessmentConfig::default())
}

/// Score from a literal probability
pub fn score(value: f64) -> RiskScore {
    RiskScore::new(value).expect("test score should be within [0, 1]")
}

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
