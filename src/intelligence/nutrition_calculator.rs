// ABOUTME: Energy expenditure calculations for meal planning
// ABOUTME: Mifflin-St Jeor BMR and TDEE from a fixed activity factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use vitalsense_core::models::{Gender, Profile};

use crate::config::BmrConfig;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// No minimum is applied; [`Profile`] ranges keep the result positive.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &Profile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg();
    let height_component = config.msj_height_coef * profile.height_cm();
    let age_component = config.msj_age_coef * f64::from(profile.age());

    let gender_constant = match profile.gender() {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_bmr() {
        // 10*70 + 6.25*170 - 5*30 + 5 = 1617.5
        let bmr = calculate_mifflin_st_jeor(&Profile::default(), &BmrConfig::default());
        assert!((bmr - 1617.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_floor_for_small_profiles() {
        // 10*40 + 6.25*140 - 5*80 - 161 = 714
        let profile = Profile::new(80, Gender::Female, 140.0, 40.0).unwrap();
        let bmr = calculate_mifflin_st_jeor(&profile, &BmrConfig::default());
        assert!((bmr - 714.0).abs() < 1e-9);
    }
}
