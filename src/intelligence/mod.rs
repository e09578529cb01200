// ABOUTME: Health intelligence module with BMI, risk simulation and plan generation
// ABOUTME: Pure scoring functions consumed by the dashboard session and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Every function here is pure: the same profile, optional risk scores and
//! configuration always produce the same output, and recomputation returns a
//! whole new structure.
//!
//! - `bmi` - body-mass index, category and gauge position
//! - `risk` - heart and diabetes logistic simulators with feature importance
//! - `nutrition_calculator` - Mifflin-St Jeor BMR and TDEE
//! - `meal_plan` - daily calorie target, macros and template meals
//! - `exercise_plan` - weekly template selection by tier

/// Body-mass index calculation and categorization
pub mod bmi;
/// Weekly exercise plan generation
pub mod exercise_plan;
/// Daily meal plan generation
pub mod meal_plan;
/// BMR and TDEE calculations
pub mod nutrition_calculator;
/// Logistic risk simulators
pub mod risk;

pub use bmi::{compute_bmi, gauge_position, BmiAssessment, BmiCategory};
pub use exercise_plan::{
    generate_exercise_plan, DayPlan, Exercise, ExercisePlan, ExerciseTier, Intensity,
    TailoringContext,
};
pub use meal_plan::{
    generate_meal_plan, EnergySplit, Macros, Meal, MealPlan, MealTemplate, RiskInputs,
};
pub use nutrition_calculator::{calculate_mifflin_st_jeor, calculate_tdee};
pub use risk::{
    diabetes::{simulate_diabetes_risk, DiabetesFeatures},
    heart::{heart_feature_vector, simulate_heart_risk},
    FeatureContribution, RiskAssessment,
};
