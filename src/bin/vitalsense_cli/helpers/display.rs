// ABOUTME: Text output helpers for vitalsense-cli
// ABOUTME: Renders BMI, risk assessments, overview and plans for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitalsense::intelligence::{BmiAssessment, ExercisePlan, MealPlan, RiskAssessment};
use vitalsense::models::Profile;
use vitalsense::session::{OverviewReport, RiskOverview};

/// Number of features listed under a risk prediction
const TOP_FEATURES: usize = 5;

fn display_profile(profile: &Profile) {
    println!(
        "   Profile: {} years, {}, {:.0} cm, {:.1} kg",
        profile.age(),
        profile.gender(),
        profile.height_cm(),
        profile.weight_kg()
    );
}

/// Display a BMI assessment
pub fn display_bmi(profile: &Profile, bmi: &BmiAssessment) {
    println!("\nBody Mass Index");
    println!("{}", "=".repeat(80));
    display_profile(profile);
    println!("   BMI: {:.1}", bmi.bmi);
    println!("   Category: {} ({})", bmi.category, bmi.range);
    println!("   Gauge: {:.0}%", bmi.gauge_percent);
}

/// Display a risk prediction with its most important features
pub fn display_risk(title: &str, profile: &Profile, assessment: &RiskAssessment) {
    println!("\n{title}");
    println!("{}", "=".repeat(80));
    display_profile(profile);
    println!(
        "   Risk: {:.1}% ({})",
        assessment.percent,
        assessment.level.summary_label()
    );

    println!("\nFeature importance:");
    for contribution in assessment.top_contributions(TOP_FEATURES) {
        println!(
            "   {:<16} {:>8.3}  {}",
            contribution.name,
            contribution.importance,
            "#".repeat((contribution.normalized * 20.0).round() as usize)
        );
    }
}

fn display_risk_card(title: &str, card: &RiskOverview) {
    match card {
        RiskOverview::Predicted(summary) => {
            println!("   {title}: {:.1}% ({})", summary.percent, summary.label);
        }
        RiskOverview::NotRun { prompt } => println!("   {title}: {prompt}"),
    }
}

/// Display the overview tab
pub fn display_overview(report: &OverviewReport) {
    println!("\nHealth Overview");
    println!("{}", "=".repeat(80));
    display_profile(&report.profile);
    println!(
        "   BMI: {:.1} - {} ({})",
        report.bmi.bmi, report.bmi.category, report.bmi.range
    );
    display_risk_card("Heart", &report.heart);
    display_risk_card("Diabetes", &report.diabetes);
}

/// Display a daily meal plan
pub fn display_meal_plan(plan: &MealPlan) {
    println!("\nDaily Meal Plan: {}", plan.template.label());
    println!("{}", "=".repeat(80));
    println!(
        "   BMR: {:.0} kcal   TDEE: {:.0} kcal   Target: {} kcal",
        plan.bmr, plan.tdee, plan.daily_calories
    );
    println!(
        "   Protein: {} g   Carbs: {} g   Fat: {} g",
        plan.macros.protein_g, plan.macros.carbs_g, plan.macros.fat_g
    );

    for meal in &plan.meals {
        println!("\n{} {} ({} kcal)", meal.time, meal.name, meal.calories);
        for item in meal.items {
            println!("   • {item}");
        }
    }

    if !plan.notes.is_empty() {
        println!("\nAdjustments:");
        for note in &plan.notes {
            println!("   • {note}");
        }
    }

    println!("\nTips:");
    for tip in plan.tips {
        println!("   • {tip}");
    }
}

/// Display a weekly exercise plan
pub fn display_exercise_plan(plan: &ExercisePlan) {
    println!("\nWeekly Exercise Plan: {}", plan.tier_label);
    println!("{}", "=".repeat(80));
    println!(
        "   {} active days, {} rest days, {} kcal per week",
        plan.active_days, plan.rest_days, plan.weekly_calories
    );
    println!("   {}", plan.tailoring);

    for day in plan.days {
        if day.rest_day {
            println!("\n{}: Rest", day.day);
            println!("   {}", plan.rest_day_text);
            continue;
        }
        println!("\n{}: {} ({} kcal)", day.day, day.focus, day.total_calories);
        for exercise in day.exercises {
            println!(
                "   • {} - {} min, {:?}, ~{} kcal",
                exercise.name, exercise.duration_minutes, exercise.intensity, exercise.calories
            );
            println!("     {}", exercise.notes);
        }
    }

    println!("\nGuidelines:");
    for guideline in plan.guidelines {
        println!("   • {guideline}");
    }
}
