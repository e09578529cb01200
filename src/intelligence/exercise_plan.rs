// ABOUTME: Weekly exercise plan selection from three fixed templates
// ABOUTME: Tier rule over heart risk, age and BMI plus the authored 7-day schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Plan Generator
//!
//! Tier selection, first match wins:
//!
//! | Condition                                        | Tier           |
//! |--------------------------------------------------|----------------|
//! | heart risk > 0.6                                 | Very gentle    |
//! | heart risk > 0.4, or age > 50, or BMI >= 30      | Moderate       |
//! | otherwise                                        | High intensity |
//!
//! Diabetes risk does not influence the tier; it is only echoed in the
//! tailoring context. Each day's `total_calories` is the authored value for
//! that day, not a sum over its exercises.

use std::fmt::Write;

use serde::Serialize;
use tracing::debug;
use vitalsense_core::constants::guidance::exercise::{
    GUIDELINES, REST_DAY_TEXT, TAILORING_SUFFIX,
};
use vitalsense_core::models::{Profile, RiskScore};

use super::bmi::compute_bmi;
use super::meal_plan::RiskInputs;
use crate::config::ExerciseConfig;

/// Plan intensity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseTier {
    /// High heart risk
    VeryGentle,
    /// Elevated heart risk, older or obese
    Moderate,
    /// No limiting factor
    HighIntensity,
}

impl ExerciseTier {
    /// Select the tier for a profile
    #[must_use]
    pub fn select(age: u32, bmi: f64, heart: Option<RiskScore>, config: &ExerciseConfig) -> Self {
        let heart_above = |threshold: f64| heart.is_some_and(|score| score.exceeds(threshold));

        if heart_above(config.gentle_heart_risk_threshold) {
            Self::VeryGentle
        } else if heart_above(config.moderate_heart_risk_threshold)
            || age > config.senior_age
            || bmi >= config.obese_bmi
        {
            Self::Moderate
        } else {
            Self::HighIntensity
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryGentle => "Light (Heart-Safe)",
            Self::Moderate => "Moderate",
            Self::HighIntensity => "High Intensity",
        }
    }

    /// The authored week for this tier
    #[must_use]
    pub fn template(&self) -> &'static [DayPlan; 7] {
        match self {
            Self::VeryGentle => &VERY_GENTLE_WEEK,
            Self::Moderate => &MODERATE_WEEK,
            Self::HighIntensity => &HIGH_INTENSITY_WEEK,
        }
    }
}

/// Exercise intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intensity {
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
}

/// A single exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Name
    pub name: &'static str,
    /// Minutes
    pub duration_minutes: u32,
    /// Intensity
    pub intensity: Intensity,
    /// Approximate kcal burned
    pub calories: u32,
    /// Coaching note
    pub notes: &'static str,
}

/// One day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    /// Weekday name
    pub day: &'static str,
    /// Focus of the session
    pub focus: &'static str,
    /// Rest day flag
    pub rest_day: bool,
    /// Authored kcal total for the day
    pub total_calories: u32,
    /// Exercises, empty on rest days
    pub exercises: &'static [Exercise],
}

/// Profile facts the plan was tailored to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TailoringContext {
    /// Age in years
    pub age: u32,
    /// Body-mass index
    pub bmi: f64,
    /// Heart risk, when predicted
    pub heart_risk: Option<RiskScore>,
    /// Diabetes risk, when predicted
    pub diabetes_risk: Option<RiskScore>,
}

impl TailoringContext {
    /// Sentence describing what the plan was tailored to
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = format!(
            "This exercise plan is tailored based on your profile: Age {}, BMI {:.1}",
            self.age, self.bmi
        );
        // Whole percents round half away from zero (12.5 -> 13)
        if let Some(heart) = self.heart_risk {
            let _ = write!(text, ", Heart Risk {:.0}%", heart.percent().round());
        }
        if let Some(diabetes) = self.diabetes_risk {
            let _ = write!(text, ", Diabetes Risk {:.0}%", diabetes.percent().round());
        }
        text.push_str(". ");
        text.push_str(TAILORING_SUFFIX);
        text
    }
}

/// A complete weekly plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExercisePlan {
    /// Selected tier
    pub tier: ExerciseTier,
    /// Tier display name
    pub tier_label: &'static str,
    /// Monday through Sunday
    pub days: &'static [DayPlan; 7],
    /// Sum of day totals
    pub weekly_calories: u32,
    /// Days with exercises
    pub active_days: usize,
    /// Rest days
    pub rest_days: usize,
    /// Profile facts used
    pub context: TailoringContext,
    /// Rendered tailoring sentence
    pub tailoring: String,
    /// Guidance for rest days
    pub rest_day_text: &'static str,
    /// General guidelines
    pub guidelines: [&'static str; 4],
}

/// Generate a weekly exercise plan
///
/// Pure: identical inputs always produce an identical plan.
#[must_use]
pub fn generate_exercise_plan(
    profile: &Profile,
    risks: RiskInputs,
    config: &ExerciseConfig,
) -> ExercisePlan {
    let bmi = compute_bmi(profile.weight_kg(), profile.height_cm());
    let tier = ExerciseTier::select(profile.age(), bmi, risks.heart, config);
    let days = tier.template();

    let weekly_calories = days.iter().map(|day| day.total_calories).sum();
    let active_days = days.iter().filter(|day| !day.rest_day).count();
    debug!(?tier, weekly_calories, active_days, "exercise tier selected");

    let context = TailoringContext {
        age: profile.age(),
        bmi,
        heart_risk: risks.heart,
        diabetes_risk: risks.diabetes,
    };

    ExercisePlan {
        tier,
        tier_label: tier.label(),
        days,
        weekly_calories,
        active_days,
        rest_days: days.len() - active_days,
        tailoring: context.summary(),
        context,
        rest_day_text: REST_DAY_TEXT,
        guidelines: GUIDELINES,
    }
}

// ============================================================================
// Weekly templates
// ============================================================================

macro_rules! exercise {
    ($name:literal, $minutes:literal, $intensity:ident, $calories:literal, $notes:literal) => {
        Exercise {
            name: $name,
            duration_minutes: $minutes,
            intensity: Intensity::$intensity,
            calories: $calories,
            notes: $notes,
        }
    };
}

const fn active(
    day: &'static str,
    focus: &'static str,
    total_calories: u32,
    exercises: &'static [Exercise],
) -> DayPlan {
    DayPlan {
        day,
        focus,
        rest_day: false,
        total_calories,
        exercises,
    }
}

const fn rest(day: &'static str, focus: &'static str) -> DayPlan {
    DayPlan {
        day,
        focus,
        rest_day: true,
        total_calories: 0,
        exercises: &[],
    }
}

const RECOVERY: &str = "Rest & Recovery";

static VERY_GENTLE_WEEK: [DayPlan; 7] = [
    active(
        "Monday",
        "Light Cardio",
        150,
        &[
            exercise!("Gentle Walking", 20, Low, 80, "Flat terrain, comfortable pace"),
            exercise!("Deep Breathing", 10, Low, 20, "Diaphragmatic breathing exercises"),
            exercise!("Seated Stretching", 15, Low, 50, "Gentle full body stretches"),
        ],
    ),
    rest("Tuesday", RECOVERY),
    active(
        "Wednesday",
        "Light Activity",
        120,
        &[
            exercise!("Chair Yoga", 20, Low, 60, "Gentle poses with chair support"),
            exercise!("Light Walking", 15, Low, 60, "Indoor or outdoor, slow pace"),
        ],
    ),
    rest("Thursday", RECOVERY),
    active(
        "Friday",
        "Gentle Movement",
        140,
        &[
            exercise!("Walking", 20, Low, 80, "Comfortable pace with breaks"),
            exercise!("Gentle Stretching", 15, Low, 40, "Focus on flexibility"),
            exercise!("Breathing Exercises", 5, Low, 20, "Relaxation and recovery"),
        ],
    ),
    rest("Saturday", RECOVERY),
    rest("Sunday", RECOVERY),
];

static MODERATE_WEEK: [DayPlan; 7] = [
    active(
        "Monday",
        "Cardio & Core",
        300,
        &[
            exercise!("Brisk Walking", 30, Moderate, 150, "Maintain steady pace"),
            exercise!("Bodyweight Core", 15, Moderate, 80, "Planks, crunches, leg raises"),
            exercise!("Stretching", 10, Low, 30, "Cool down stretches"),
        ],
    ),
    active(
        "Tuesday",
        "Light Strength",
        250,
        &[
            exercise!("Resistance Bands", 20, Moderate, 100, "Upper body focus"),
            exercise!("Bodyweight Squats", 15, Moderate, 100, "3 sets of 12 reps"),
            exercise!("Walking", 15, Low, 50, "Cool down walk"),
        ],
    ),
    rest("Wednesday", "Active Recovery"),
    active(
        "Thursday",
        "Cardio",
        320,
        &[
            exercise!("Cycling/Stationary Bike", 30, Moderate, 200, "Moderate resistance"),
            exercise!("Yoga Flow", 20, Low, 70, "Sun salutations sequence"),
            exercise!("Cool Down", 10, Low, 30, "Stretching and breathing"),
        ],
    ),
    active(
        "Friday",
        "Full Body Strength",
        280,
        &[
            exercise!("Dumbbell Exercises", 25, Moderate, 150, "Light weights, higher reps"),
            exercise!("Walking Lunges", 10, Moderate, 80, "3 sets of 10 each leg"),
            exercise!("Stretching", 10, Low, 30, "Full body cool down"),
        ],
    ),
    active(
        "Saturday",
        "Light Activity",
        180,
        &[
            exercise!("Swimming or Walking", 30, Low, 150, "Enjoy a leisure activity"),
            exercise!("Stretching", 10, Low, 30, "Gentle flexibility work"),
        ],
    ),
    rest("Sunday", RECOVERY),
];

static HIGH_INTENSITY_WEEK: [DayPlan; 7] = [
    active(
        "Monday",
        "Upper Body Strength",
        450,
        &[
            exercise!("Push-ups (varied)", 15, High, 120, "Standard, wide, diamond - 3x12 each"),
            exercise!("Dumbbell Press & Rows", 20, High, 150, "4 sets of 10 reps each"),
            exercise!("HIIT Cardio", 15, High, 180, "30s on / 15s off intervals"),
        ],
    ),
    active(
        "Tuesday",
        "Lower Body & Core",
        480,
        &[
            exercise!("Squats & Lunges", 20, High, 180, "4 sets of 12 each"),
            exercise!("Deadlifts", 15, High, 150, "4 sets of 8-10 reps"),
            exercise!("Core Circuit", 15, High, 120, "Planks, Russian twists, leg raises"),
        ],
    ),
    active(
        "Wednesday",
        "Cardio & Flexibility",
        400,
        &[
            exercise!("Running/Jogging", 30, High, 300, "Maintain 70-80% max heart rate"),
            exercise!("Yoga", 20, Low, 70, "Focus on recovery and flexibility"),
        ],
    ),
    rest("Thursday", "Active Recovery"),
    active(
        "Friday",
        "Full Body HIIT",
        500,
        &[
            exercise!("Burpees", 10, High, 150, "4 rounds of 15 reps"),
            exercise!("Kettlebell Swings", 15, High, 180, "4 sets of 15 reps"),
            exercise!("Mountain Climbers + Jumping Jacks", 15, High, 170, "Superset, 30s each, 4 rounds"),
        ],
    ),
    active(
        "Saturday",
        "Sports/Recreation",
        350,
        &[
            exercise!("Sport Activity", 45, Moderate, 300, "Basketball, swimming, cycling, or hiking"),
            exercise!("Stretching", 10, Low, 30, "Full body cool down"),
        ],
    ),
    rest("Sunday", RECOVERY),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_days_have_no_exercises() {
        for tier in [
            ExerciseTier::VeryGentle,
            ExerciseTier::Moderate,
            ExerciseTier::HighIntensity,
        ] {
            for day in tier.template() {
                assert_eq!(day.rest_day, day.exercises.is_empty(), "{}", day.day);
                if day.rest_day {
                    assert_eq!(day.total_calories, 0);
                }
            }
        }
    }

    #[test]
    fn test_tailoring_sentence_omits_missing_risks() {
        let context = TailoringContext {
            age: 30,
            bmi: 24.22,
            heart_risk: None,
            diabetes_risk: Some(RiskScore::new(0.25).unwrap()),
        };
        assert_eq!(
            context.summary(),
            "This exercise plan is tailored based on your profile: Age 30, BMI 24.2, \
             Diabetes Risk 25%. Intensity and volume have been adjusted accordingly for \
             safety and effectiveness."
        );
    }
}
