// ABOUTME: Advisory strings attached to meal and exercise plans
// ABOUTME: Calorie and macro notes, dietary tips, exercise guidelines and rest-day text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal-plan notes and tips
pub mod diet {
    /// Added when BMI is in the obese band
    pub const OBESE_DEFICIT_NOTE: &str =
        "Caloric deficit recommended for weight management (25% reduction)";
    /// Added when BMI is in the overweight band
    pub const OVERWEIGHT_DEFICIT_NOTE: &str =
        "Mild caloric deficit recommended for gradual weight loss (15% reduction)";
    /// Added when BMI is in the underweight band
    pub const UNDERWEIGHT_SURPLUS_NOTE: &str =
        "Caloric surplus recommended for healthy weight gain (15% increase)";
    /// Added when diabetes risk is elevated
    pub const LOW_CARB_NOTE: &str = "Lower carb ratio recommended due to elevated diabetes risk";
    /// Added when heart risk is elevated
    pub const LOW_FAT_NOTE: &str =
        "Lower fat intake recommended due to elevated heart disease risk";

    /// General dietary tips shown with every plan
    pub const TIPS: [&str; 4] = [
        "Drink 8-10 glasses of water daily. Stay hydrated throughout the day.",
        "Include 5 servings of fruits and vegetables daily for essential vitamins.",
        "Avoid processed foods, sugary drinks, and excessive sodium intake.",
        "Eat at consistent times and avoid heavy meals within 3 hours of bedtime.",
    ];
}

/// Exercise-plan text
pub mod exercise {
    /// Shown on rest days
    pub const REST_DAY_TEXT: &str = "Take this day to rest, hydrate, and allow your body to recover. Light stretching or a short walk is fine.";

    /// General guidelines shown with every plan
    pub const GUIDELINES: [&str; 4] = [
        "Always warm up for 5-10 minutes before exercise and cool down after.",
        "Drink water before, during, and after your workout. Stay hydrated.",
        "Listen to your body. Stop if you feel chest pain, dizziness, or unusual fatigue.",
        "Consistency matters more than intensity. Stick to your routine.",
    ];

    /// Closing clause of the tailoring sentence
    pub const TAILORING_SUFFIX: &str =
        "Intensity and volume have been adjusted accordingly for safety and effectiveness.";
}
