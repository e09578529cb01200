// ABOUTME: Plan commands for vitalsense-cli
// ABOUTME: Daily meal plan and weekly exercise plan from a profile and known risk scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitalsense::errors::AppResult;
use vitalsense::session::DashboardTab;

use crate::args::{OutputArg, ProfileArgs, RiskArgs};
use crate::helpers::display::{display_exercise_plan, display_meal_plan};
use crate::helpers::output::emit;

/// Build the daily meal plan
pub fn diet(profile: &ProfileArgs, risks: &RiskArgs, output: OutputArg) -> AppResult<()> {
    let mut session = profile.session()?;
    session.restore_risks(risks.risks());
    session.select_tab(DashboardTab::Diet);
    let plan = session.meal_plan();

    match output.serialized() {
        Some(format) => emit(&plan, format),
        None => {
            display_meal_plan(&plan);
            Ok(())
        }
    }
}

/// Build the weekly exercise plan
pub fn exercise(profile: &ProfileArgs, risks: &RiskArgs, output: OutputArg) -> AppResult<()> {
    let mut session = profile.session()?;
    session.restore_risks(risks.risks());
    session.select_tab(DashboardTab::Exercise);
    let plan = session.exercise_plan();

    match output.serialized() {
        Some(format) => emit(&plan, format),
        None => {
            display_exercise_plan(&plan);
            Ok(())
        }
    }
}
