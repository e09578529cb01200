// ABOUTME: Configuration management module for assessment thresholds and planner parameters
// ABOUTME: Environment-driven configuration with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for VitalSense
//!
//! - **Assessment**: risk banding, meal-plan and exercise-plan parameters,
//!   loaded from `VITALSENSE_*` environment variables on top of defaults
//!
//! Logging configuration lives in [`crate::logging`].

/// Assessment configuration (risk bands, nutrition, exercise tiers)
pub mod assessment;

pub use assessment::{
    AssessmentConfig, BmrConfig, CalorieAdjustmentConfig, ConfigError, ExerciseConfig,
    MacroDistribution, MacroRatiosConfig, MealSharesConfig, NutritionConfig, RiskBandsConfig,
};
