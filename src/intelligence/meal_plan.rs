// ABOUTME: Daily meal plan generation from profile and optional risk scores
// ABOUTME: Calorie target by BMI band, macro ratios by risk, and five template meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Generator
//!
//! 1. BMR (Mifflin-St Jeor) and TDEE with the configured activity factor
//! 2. Calorie target adjusted by BMI band, first match wins
//! 3. Macro ratios: standard, replaced by the low-carb set when diabetes risk is
//!    elevated, then by the low-fat set when heart risk is elevated
//! 4. Gram targets from the ratios (4 kcal/g protein and carbs, 9 kcal/g fat)
//! 5. Template meals chosen by priority: diabetes, heart, obese, standard

use serde::Serialize;
use tracing::debug;
use vitalsense_core::constants::bmi::{NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use vitalsense_core::constants::guidance::diet::{
    LOW_CARB_NOTE, LOW_FAT_NOTE, OBESE_DEFICIT_NOTE, OVERWEIGHT_DEFICIT_NOTE, TIPS,
    UNDERWEIGHT_SURPLUS_NOTE,
};
use vitalsense_core::constants::nutrition::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use vitalsense_core::models::{Profile, RiskScore};

use super::bmi::compute_bmi;
use super::nutrition_calculator::{calculate_mifflin_st_jeor, calculate_tdee};
use crate::config::{MacroDistribution, NutritionConfig};

/// Optional risk scores feeding the plan generators
///
/// `None` means the prediction has not been run, which is different from a
/// score of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskInputs {
    /// Latest heart prediction
    pub heart: Option<RiskScore>,
    /// Latest diabetes prediction
    pub diabetes: Option<RiskScore>,
}

impl RiskInputs {
    /// Both scores
    #[must_use]
    pub const fn new(heart: Option<RiskScore>, diabetes: Option<RiskScore>) -> Self {
        Self { heart, diabetes }
    }

    /// Heart score present and strictly above `threshold`
    #[must_use]
    pub fn heart_exceeds(&self, threshold: f64) -> bool {
        self.heart.is_some_and(|score| score.exceeds(threshold))
    }

    /// Diabetes score present and strictly above `threshold`
    #[must_use]
    pub fn diabetes_exceeds(&self, threshold: f64) -> bool {
        self.diabetes.is_some_and(|score| score.exceeds(threshold))
    }
}

/// Which set of meal items a plan uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTemplate {
    /// Elevated diabetes risk
    Diabetes,
    /// Elevated heart risk
    Heart,
    /// BMI in the obese band
    Obese,
    /// Everyone else
    Standard,
}

impl MealTemplate {
    /// Display name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes-Friendly",
            Self::Heart => "Heart-Healthy",
            Self::Obese => "Weight Management",
            Self::Standard => "Balanced",
        }
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macros {
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fat_g: u32,
}

/// Share of calories actually delivered by each macro after rounding, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySplit {
    /// Protein percentage
    pub protein_pct: f64,
    /// Carbohydrate percentage
    pub carbs_pct: f64,
    /// Fat percentage
    pub fat_pct: f64,
}

/// One meal of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    /// Serving time, e.g. `7:00 AM`
    pub time: &'static str,
    /// Meal name
    pub name: &'static str,
    /// Suggested items
    pub items: &'static [&'static str],
    /// Calories for this meal
    pub calories: u32,
}

/// Complete daily meal plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,
    /// BMI the plan was derived from
    pub bmi: f64,
    /// Calorie target
    pub daily_calories: u32,
    /// Gram targets
    pub macros: Macros,
    /// Ratio set used for the gram targets
    pub macro_ratios: MacroDistribution,
    /// Realized energy split
    pub energy_split: EnergySplit,
    /// Item template
    pub template: MealTemplate,
    /// Five meals in serving order
    pub meals: Vec<Meal>,
    /// Adjustment notes in the order they were applied
    pub notes: Vec<&'static str>,
    /// General dietary tips
    pub tips: [&'static str; 4],
}

/// Generate a meal plan
///
/// Pure: identical inputs always produce an identical plan.
#[must_use]
pub fn generate_meal_plan(
    profile: &Profile,
    risks: RiskInputs,
    config: &NutritionConfig,
) -> MealPlan {
    let bmi = compute_bmi(profile.weight_kg(), profile.height_cm());
    let bmr = calculate_mifflin_st_jeor(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, config.activity_factor);

    let mut notes = Vec::new();
    let daily_calories = calorie_target(tdee, bmi, config, &mut notes);

    let diabetes_elevated = risks.diabetes_exceeds(config.elevated_risk_threshold);
    let heart_elevated = risks.heart_exceeds(config.elevated_risk_threshold);

    let mut macro_ratios = config.macro_ratios.standard;
    if diabetes_elevated {
        macro_ratios = config.macro_ratios.diabetes;
        notes.push(LOW_CARB_NOTE);
    }
    if heart_elevated {
        macro_ratios = config.macro_ratios.heart;
        notes.push(LOW_FAT_NOTE);
    }

    let macros = macro_grams(daily_calories, macro_ratios);

    let template = if diabetes_elevated {
        MealTemplate::Diabetes
    } else if heart_elevated {
        MealTemplate::Heart
    } else if bmi >= OVERWEIGHT_UPPER {
        MealTemplate::Obese
    } else {
        MealTemplate::Standard
    };
    debug!(?template, daily_calories, bmi, "meal template selected");

    let meals = MEAL_SLOTS
        .iter()
        .zip(config.meal_shares.fractions())
        .map(|(slot, share)| Meal {
            time: slot.time,
            name: slot.name,
            items: slot.items_for(template),
            calories: (f64::from(daily_calories) * share).round() as u32,
        })
        .collect();

    MealPlan {
        bmr,
        tdee,
        bmi,
        daily_calories,
        macros,
        macro_ratios,
        energy_split: energy_split(macros, daily_calories),
        template,
        meals,
        notes,
        tips: TIPS,
    }
}

fn calorie_target(
    tdee: f64,
    bmi: f64,
    config: &NutritionConfig,
    notes: &mut Vec<&'static str>,
) -> u32 {
    let adjust = &config.calorie_adjustments;
    let (factor, note) = if bmi >= OVERWEIGHT_UPPER {
        (adjust.obese_factor, Some(OBESE_DEFICIT_NOTE))
    } else if bmi >= NORMAL_UPPER {
        (adjust.overweight_factor, Some(OVERWEIGHT_DEFICIT_NOTE))
    } else if bmi < UNDERWEIGHT_UPPER {
        (adjust.underweight_factor, Some(UNDERWEIGHT_SURPLUS_NOTE))
    } else {
        (1.0, None)
    };
    notes.extend(note);
    (tdee * factor).round() as u32
}

fn macro_grams(calories: u32, ratios: MacroDistribution) -> Macros {
    // Ratio as a fraction first, so half-gram ties round the same way as `cal * 0.35 / 4`
    let grams = |pct: u8, kcal_per_gram: f64| {
        (f64::from(calories) * (f64::from(pct) / 100.0) / kcal_per_gram).round() as u32
    };
    Macros {
        protein_g: grams(ratios.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(ratios.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_g: grams(ratios.fat_pct, KCAL_PER_GRAM_FAT),
    }
}

fn energy_split(macros: Macros, calories: u32) -> EnergySplit {
    if calories == 0 {
        return EnergySplit {
            protein_pct: 0.0,
            carbs_pct: 0.0,
            fat_pct: 0.0,
        };
    }
    let total = f64::from(calories);
    let pct = |grams: u32, kcal_per_gram: f64| f64::from(grams) * kcal_per_gram / total * 100.0;
    EnergySplit {
        protein_pct: pct(macros.protein_g, KCAL_PER_GRAM_PROTEIN),
        carbs_pct: pct(macros.carbs_g, KCAL_PER_GRAM_CARBS),
        fat_pct: pct(macros.fat_g, KCAL_PER_GRAM_FAT),
    }
}

// ============================================================================
// Meal templates
// ============================================================================

struct MealSlot {
    time: &'static str,
    name: &'static str,
    diabetes: &'static [&'static str],
    heart: &'static [&'static str],
    /// Snacks have no weight-management list
    obese: Option<&'static [&'static str]>,
    standard: &'static [&'static str],
}

impl MealSlot {
    const fn items_for(&self, template: MealTemplate) -> &'static [&'static str] {
        match template {
            MealTemplate::Diabetes => self.diabetes,
            MealTemplate::Heart => self.heart,
            MealTemplate::Obese => match self.obese {
                Some(items) => items,
                None => self.standard,
            },
            MealTemplate::Standard => self.standard,
        }
    }
}

const MEAL_SLOTS: [MealSlot; 5] = [
    MealSlot {
        time: "7:00 AM",
        name: "Breakfast",
        diabetes: &[
            "Steel-cut oats with cinnamon (no sugar)",
            "2 boiled eggs",
            "Handful of almonds",
            "Green tea (unsweetened)",
        ],
        heart: &[
            "Overnight oats with flaxseed",
            "Fresh berries",
            "Low-fat Greek yogurt",
            "Green tea",
        ],
        obese: Some(&[
            "Egg white omelet with spinach",
            "1 slice whole grain toast",
            "Black coffee or green tea",
        ]),
        standard: &[
            "Whole grain toast with avocado",
            "2 scrambled eggs",
            "Fresh fruit bowl",
            "Coffee or tea",
        ],
    },
    MealSlot {
        time: "10:00 AM",
        name: "Mid-Morning Snack",
        diabetes: &["Small apple with peanut butter", "Herbal tea"],
        heart: &["Handful of walnuts", "1 small banana"],
        obese: None,
        standard: &["Mixed nuts (30g)", "Fresh fruit"],
    },
    MealSlot {
        time: "1:00 PM",
        name: "Lunch",
        diabetes: &[
            "Grilled chicken breast (150g)",
            "Quinoa (1/2 cup)",
            "Large mixed salad with olive oil",
            "Steamed broccoli",
        ],
        heart: &[
            "Grilled salmon fillet (150g)",
            "Brown rice (1/2 cup)",
            "Steamed vegetables",
            "Olive oil dressing salad",
        ],
        obese: Some(&[
            "Lean turkey wrap with lettuce",
            "Mixed vegetable soup",
            "Side salad with lemon dressing",
        ]),
        standard: &[
            "Grilled chicken with brown rice",
            "Mixed vegetables stir-fry",
            "Side salad",
            "Water with lemon",
        ],
    },
    MealSlot {
        time: "4:00 PM",
        name: "Afternoon Snack",
        diabetes: &["Celery sticks with hummus", "Small handful of pumpkin seeds"],
        heart: &["Carrot sticks with hummus", "Green tea"],
        obese: None,
        standard: &["Greek yogurt with berries", "A handful of trail mix"],
    },
    MealSlot {
        time: "7:00 PM",
        name: "Dinner",
        diabetes: &[
            "Baked fish (150g) with herbs",
            "Roasted sweet potato (small)",
            "Sauteed spinach and garlic",
            "Cucumber & tomato salad",
        ],
        heart: &[
            "Baked cod with lemon (150g)",
            "Steamed asparagus",
            "Small portion of whole wheat pasta",
            "Mixed green salad",
        ],
        obese: Some(&[
            "Grilled tofu or lean fish (150g)",
            "Large portion of roasted vegetables",
            "Small sweet potato",
            "Light vinaigrette salad",
        ]),
        standard: &[
            "Lean protein (chicken/fish 150g)",
            "Roasted vegetables",
            "Whole grain side",
            "Fresh green salad",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obese_snacks_fall_back_to_standard() {
        let snack = &MEAL_SLOTS[1];
        assert_eq!(snack.items_for(MealTemplate::Obese), snack.standard);
        let lunch = &MEAL_SLOTS[2];
        assert_ne!(lunch.items_for(MealTemplate::Obese), lunch.standard);
    }

    #[test]
    fn test_macro_grams_round_to_nearest() {
        // 2000 kcal at 30/45/25: 150 g, 225 g, 55.6 -> 56 g
        let macros = macro_grams(2000, MacroDistribution::new(30, 45, 25));
        assert_eq!(macros.protein_g, 150);
        assert_eq!(macros.carbs_g, 225);
        assert_eq!(macros.fat_g, 56);
    }
}
