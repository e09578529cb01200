// ABOUTME: Meal-plan configuration for energy targets, macro ratios and meal shares
// ABOUTME: Configures BMR coefficients, activity factor, BMI calorie adjustments and meal split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factor: `McArdle`, Katch & Katch (2010) Exercise Physiology

use serde::{Deserialize, Serialize};
use vitalsense_core::constants::nutrition::{
    MODERATE_ACTIVITY_FACTOR, MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF,
    MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
};
use vitalsense_core::constants::risk_bands::MODERATE_THRESHOLD;

use super::error::ConfigError;

/// Meal-plan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Multiplier from BMR to TDEE (1.55, moderately active)
    pub activity_factor: f64,
    /// Risk strictly above this switches macros and meal template (0.4)
    pub elevated_risk_threshold: f64,
    /// Calorie multipliers by BMI band
    pub calorie_adjustments: CalorieAdjustmentConfig,
    /// Macro ratio sets
    pub macro_ratios: MacroRatiosConfig,
    /// Percentage of daily calories per meal
    pub meal_shares: MealSharesConfig,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factor: MODERATE_ACTIVITY_FACTOR,
            elevated_risk_threshold: MODERATE_THRESHOLD,
            calorie_adjustments: CalorieAdjustmentConfig::default(),
            macro_ratios: MacroRatiosConfig::default(),
            meal_shares: MealSharesConfig::default(),
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: MSJ_WEIGHT_COEF,
            msj_height_coef: MSJ_HEIGHT_COEF,
            msj_age_coef: MSJ_AGE_COEF,
            msj_male_constant: MSJ_MALE_CONSTANT,
            msj_female_constant: MSJ_FEMALE_CONSTANT,
        }
    }
}

/// Calorie multipliers applied to TDEE by BMI band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// BMI >= 30: 25% deficit
    pub obese_factor: f64,
    /// 25 <= BMI < 30: 15% deficit
    pub overweight_factor: f64,
    /// BMI < 18.5: 15% surplus
    pub underweight_factor: f64,
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            obese_factor: 0.75,
            overweight_factor: 0.85,
            underweight_factor: 1.15,
        }
    }
}

/// Macro distribution as whole percentages (protein, carbs, fat)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein_pct as u16 + self.carbs_pct as u16 + self.fat_pct as u16
    }
}

/// Macro ratio sets selected by risk profile
///
/// The heart set is applied after the diabetes set and wins when both risks
/// are elevated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// No elevated risk (30/45/25)
    pub standard: MacroDistribution,
    /// Elevated diabetes risk, lower carbs (35/35/30)
    pub diabetes: MacroDistribution,
    /// Elevated heart risk, lower fat (35/45/20)
    pub heart: MacroDistribution,
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            standard: MacroDistribution::new(30, 45, 25),
            diabetes: MacroDistribution::new(35, 35, 30),
            heart: MacroDistribution::new(35, 45, 20),
        }
    }
}

impl MacroRatiosConfig {
    /// Validate that all macro distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first set that does not
    /// sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sets = [
            ("standard", &self.standard),
            ("diabetes", &self.diabetes),
            ("heart", &self.heart),
        ];

        for (name, set) in sets {
            let sum = set.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

/// Daily calorie split across the five meals, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// 7:00 AM (25)
    pub breakfast_pct: u8,
    /// 10:00 AM (10)
    pub morning_snack_pct: u8,
    /// 1:00 PM (30)
    pub lunch_pct: u8,
    /// 4:00 PM (10)
    pub afternoon_snack_pct: u8,
    /// 7:00 PM (25)
    pub dinner_pct: u8,
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            morning_snack_pct: 10,
            lunch_pct: 30,
            afternoon_snack_pct: 10,
            dinner_pct: 25,
        }
    }
}

impl MealSharesConfig {
    /// Shares in serving order as fractions of one
    #[must_use]
    pub fn fractions(&self) -> [f64; 5] {
        [
            self.breakfast_pct,
            self.morning_snack_pct,
            self.lunch_pct,
            self.afternoon_snack_pct,
            self.dinner_pct,
        ]
        .map(|pct| f64::from(pct) / 100.0)
    }

    /// Validate that the shares sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` with the actual total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum: u16 = [
            self.breakfast_pct,
            self.morning_snack_pct,
            self.lunch_pct,
            self.afternoon_snack_pct,
            self.dinner_pct,
        ]
        .iter()
        .map(|&pct| u16::from(pct))
        .sum();

        if sum == 100 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeights(format!(
                "meal shares must sum to 100, got {sum}"
            )))
        }
    }
}
