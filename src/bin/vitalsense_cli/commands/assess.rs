// ABOUTME: Assessment commands for vitalsense-cli
// ABOUTME: BMI, heart and diabetes predictions, the overview and the full report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::info;
use vitalsense::errors::AppResult;
use vitalsense::intelligence::{BmiAssessment, ExercisePlan, MealPlan, RiskAssessment};
use vitalsense::session::{DashboardTab, OverviewReport};

use crate::args::{DiabetesArgs, HeartArgs, OutputArg, ProfileArgs, RiskArgs};
use crate::helpers::display::{
    display_bmi, display_exercise_plan, display_meal_plan, display_overview, display_risk,
};
use crate::helpers::output::emit;

/// Everything the dashboard shows for one profile
#[derive(Debug, Serialize)]
struct HealthReport {
    overview: OverviewReport,
    heart: RiskAssessment,
    diabetes: RiskAssessment,
    meal_plan: MealPlan,
    exercise_plan: ExercisePlan,
}

/// Compute BMI for a profile
pub fn bmi(profile: &ProfileArgs, output: OutputArg) -> AppResult<()> {
    let session = profile.session()?;
    let assessment = BmiAssessment::for_profile(session.profile());

    match output.serialized() {
        Some(format) => emit(&assessment, format),
        None => {
            display_bmi(session.profile(), &assessment);
            Ok(())
        }
    }
}

/// Run the heart-disease simulator
pub fn heart(profile: &ProfileArgs, inputs: &HeartArgs, output: OutputArg) -> AppResult<()> {
    let mut session = profile.session()?;
    session.select_tab(DashboardTab::Heart);
    inputs.apply(&mut session)?;
    let assessment = session.predict_heart()?;

    match output.serialized() {
        Some(format) => emit(&assessment, format),
        None => {
            display_risk("Heart Disease Risk", session.profile(), &assessment);
            println!(
                "\nPass --heart-risk {:.4} to diet, exercise or overview",
                assessment.score.value()
            );
            Ok(())
        }
    }
}

/// Run the diabetes simulator
pub fn diabetes(profile: &ProfileArgs, inputs: &DiabetesArgs, output: OutputArg) -> AppResult<()> {
    let mut session = profile.session()?;
    session.select_tab(DashboardTab::Diabetes);
    inputs.apply(&mut session)?;
    let assessment = session.predict_diabetes()?;

    match output.serialized() {
        Some(format) => emit(&assessment, format),
        None => {
            display_risk("Diabetes Risk", session.profile(), &assessment);
            println!(
                "\nPass --diabetes-risk {:.4} to diet, exercise or overview",
                assessment.score.value()
            );
            Ok(())
        }
    }
}

/// Show BMI and whichever risk scores are known
pub fn overview(profile: &ProfileArgs, risks: &RiskArgs, output: OutputArg) -> AppResult<()> {
    let mut session = profile.session()?;
    session.restore_risks(risks.risks());
    let report = session.overview();

    match output.serialized() {
        Some(format) => emit(&report, format),
        None => {
            display_overview(&report);
            Ok(())
        }
    }
}

/// Run both predictions and build every view
pub fn report(
    profile: &ProfileArgs,
    heart_inputs: &HeartArgs,
    diabetes_inputs: &DiabetesArgs,
    output: OutputArg,
) -> AppResult<()> {
    let mut session = profile.session()?;
    heart_inputs.apply(&mut session)?;
    diabetes_inputs.apply(&mut session)?;

    let heart = session.predict_heart()?;
    let diabetes = session.predict_diabetes()?;
    let report = HealthReport {
        overview: session.overview(),
        meal_plan: session.meal_plan(),
        exercise_plan: session.exercise_plan(),
        heart,
        diabetes,
    };
    info!(
        heart = %report.heart.level,
        diabetes = %report.diabetes.level,
        "Full report built"
    );

    match output.serialized() {
        Some(format) => emit(&report, format),
        None => {
            display_overview(&report.overview);
            display_risk("Heart Disease Risk", session.profile(), &report.heart);
            display_risk("Diabetes Risk", session.profile(), &report.diabetes);
            display_meal_plan(&report.meal_plan);
            display_exercise_plan(&report.exercise_plan);
            Ok(())
        }
    }
}
