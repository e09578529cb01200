// ABOUTME: Assessment configuration for risk banding, meal planning and exercise planning
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment Configuration Module
//!
//! Every tunable number the scoring and planning engines use, with defaults
//! equal to the built-in constants. Values can be overridden through
//! `VITALSENSE_*` environment variables; the result is validated before use.
//!
//! # Module Structure
//!
//! - `risk` - Risk level banding thresholds
//! - `nutrition` - BMR, activity factor, calorie adjustments, macros, meal split
//! - `exercise` - Exercise tier selection cut-offs

pub mod error;
pub mod exercise;
pub mod nutrition;
pub mod risk;

pub use error::ConfigError;
pub use exercise::ExerciseConfig;
pub use nutrition::{
    BmrConfig, CalorieAdjustmentConfig, MacroDistribution, MacroRatiosConfig, MealSharesConfig,
    NutritionConfig,
};
pub use risk::RiskBandsConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static ASSESSMENT_CONFIG: OnceLock<AssessmentConfig> = OnceLock::new();

/// Main assessment configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Risk level banding
    pub risk: RiskBandsConfig,
    /// Meal-plan generation
    pub nutrition: NutritionConfig,
    /// Exercise-plan tier selection
    pub exercise: ExerciseConfig,
}

impl AssessmentConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ASSESSMENT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load assessment config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            moderate = config.risk.moderate_threshold,
            high = config.risk.high_threshold,
            activity_factor = config.nutrition.activity_factor,
            "assessment configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_risk()?;
        self.validate_nutrition()?;
        self.validate_exercise()
    }

    fn validate_risk(&self) -> Result<(), ConfigError> {
        let risk = &self.risk;
        if !(risk.moderate_threshold > 0.0 && risk.high_threshold < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "risk thresholds must lie strictly between 0 and 1",
            ));
        }
        if risk.moderate_threshold >= risk.high_threshold {
            return Err(ConfigError::InvalidRange(
                "moderate_threshold must be < high_threshold",
            ));
        }
        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        if !(1.0..=2.5).contains(&nutr.activity_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factor must be between 1.0 and 2.5",
            ));
        }

        if !(nutr.elevated_risk_threshold > 0.0 && nutr.elevated_risk_threshold < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "elevated_risk_threshold must lie strictly between 0 and 1",
            ));
        }

        let adjust = &nutr.calorie_adjustments;
        if adjust.obese_factor <= 0.0
            || adjust.overweight_factor <= 0.0
            || adjust.underweight_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie adjustment factors must be positive",
            ));
        }

        nutr.macro_ratios.validate()?;
        nutr.meal_shares.validate()
    }

    fn validate_exercise(&self) -> Result<(), ConfigError> {
        let exercise = &self.exercise;
        if exercise.moderate_heart_risk_threshold > exercise.gentle_heart_risk_threshold {
            return Err(ConfigError::InvalidRange(
                "moderate_heart_risk_threshold must be <= gentle_heart_risk_threshold",
            ));
        }
        if exercise.obese_bmi <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("obese_bmi must be positive"));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Risk banding overrides
        Self::apply_env_var(
            "VITALSENSE_RISK_MODERATE_THRESHOLD",
            &mut self.risk.moderate_threshold,
        )?;
        Self::apply_env_var(
            "VITALSENSE_RISK_HIGH_THRESHOLD",
            &mut self.risk.high_threshold,
        )?;

        // Meal plan overrides
        Self::apply_env_var(
            "VITALSENSE_ACTIVITY_FACTOR",
            &mut self.nutrition.activity_factor,
        )?;
        Self::apply_env_var(
            "VITALSENSE_ELEVATED_RISK_THRESHOLD",
            &mut self.nutrition.elevated_risk_threshold,
        )?;
        Self::apply_env_var(
            "VITALSENSE_OBESE_CALORIE_FACTOR",
            &mut self.nutrition.calorie_adjustments.obese_factor,
        )?;
        Self::apply_env_var(
            "VITALSENSE_OVERWEIGHT_CALORIE_FACTOR",
            &mut self.nutrition.calorie_adjustments.overweight_factor,
        )?;
        Self::apply_env_var(
            "VITALSENSE_UNDERWEIGHT_CALORIE_FACTOR",
            &mut self.nutrition.calorie_adjustments.underweight_factor,
        )?;

        // Exercise tier overrides
        Self::apply_env_var(
            "VITALSENSE_GENTLE_HEART_RISK_THRESHOLD",
            &mut self.exercise.gentle_heart_risk_threshold,
        )?;
        Self::apply_env_var(
            "VITALSENSE_MODERATE_HEART_RISK_THRESHOLD",
            &mut self.exercise.moderate_heart_risk_threshold,
        )?;
        Self::apply_env_var("VITALSENSE_SENIOR_AGE", &mut self.exercise.senior_age)?;
        Self::apply_env_var("VITALSENSE_OBESE_BMI", &mut self.exercise.obese_bmi)?;

        Ok(self)
    }
}
