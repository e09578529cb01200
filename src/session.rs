// ABOUTME: Dashboard session owning the profile, active tab, clinical inputs and latest risk scores
// ABOUTME: Runs predictions and builds the overview, meal and exercise views from session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Session
//!
//! One session per submitted profile. Risk scores start out unset and are
//! only filled in by running the matching prediction; the diet and exercise
//! views read whatever scores are present at the time they are built.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use vitalsense_core::constants::overview::{DIABETES_PROMPT, HEART_PROMPT};
use vitalsense_core::errors::{AppError, AppResult};
use vitalsense_core::models::{
    ClinicalForm, DiabetesInputs, HeartInputs, Profile, RiskLevel, RiskScore,
};

use crate::config::AssessmentConfig;
use crate::intelligence::risk::diabetes::assess_diabetes;
use crate::intelligence::risk::heart::assess_heart;
use crate::intelligence::{
    generate_exercise_plan, generate_meal_plan, BmiAssessment, ExercisePlan, MealPlan,
    RiskAssessment, RiskInputs,
};
use crate::logging::AssessmentLogger;

/// Dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    /// BMI and risk summary
    #[default]
    Overview,
    /// Heart clinical form and prediction
    Heart,
    /// Diabetes clinical form and prediction
    Diabetes,
    /// Daily meal plan
    Diet,
    /// Weekly exercise plan
    Exercise,
}

impl DashboardTab {
    /// Every tab in navigation order
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Heart,
        Self::Diabetes,
        Self::Diet,
        Self::Exercise,
    ];

    /// Navigation label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Heart => "Heart",
            Self::Diabetes => "Diabetes",
            Self::Diet => "Diet Plan",
            Self::Exercise => "Exercise",
        }
    }

    /// Lowercase key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Heart => "heart",
            Self::Diabetes => "diabetes",
            Self::Diet => "diet",
            Self::Exercise => "exercise",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == key)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown tab '{s}', expected one of overview, heart, diabetes, diet, exercise"
                ))
            })
    }
}

/// Summary of one predicted risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Percentage rounded to one decimal
    pub percent: f64,
    /// Banded level
    pub level: RiskLevel,
    /// "Low Risk", "Moderate Risk" or "High Risk"
    pub label: &'static str,
}

impl RiskSummary {
    fn new(score: RiskScore, level: RiskLevel) -> Self {
        Self {
            percent: (score.percent() * 10.0).round() / 10.0,
            level,
            label: level.summary_label(),
        }
    }
}

/// Overview card state for one risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RiskOverview {
    /// Prediction has been run
    Predicted(RiskSummary),
    /// Prediction has not been run yet
    NotRun {
        /// Prompt pointing at the tab that runs the prediction
        prompt: &'static str,
    },
}

impl RiskOverview {
    /// Summary when predicted
    #[must_use]
    pub const fn summary(&self) -> Option<&RiskSummary> {
        match self {
            Self::Predicted(summary) => Some(summary),
            Self::NotRun { .. } => None,
        }
    }
}

/// Overview tab contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    /// Profile the report describes
    pub profile: Profile,
    /// BMI value, category and gauge position
    pub bmi: BmiAssessment,
    /// Heart risk card
    pub heart: RiskOverview,
    /// Diabetes risk card
    pub diabetes: RiskOverview,
}

/// Explicit dashboard state
#[derive(Debug, Clone)]
pub struct DashboardSession {
    profile: Profile,
    active_tab: DashboardTab,
    heart_inputs: HeartInputs,
    diabetes_inputs: DiabetesInputs,
    heart_risk: Option<RiskScore>,
    diabetes_risk: Option<RiskScore>,
    config: AssessmentConfig,
}

impl DashboardSession {
    /// New session using the global assessment configuration
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self::with_config(profile, AssessmentConfig::global().clone())
    }

    /// New session with an explicit configuration
    #[must_use]
    pub fn with_config(profile: Profile, config: AssessmentConfig) -> Self {
        Self {
            profile,
            active_tab: DashboardTab::default(),
            heart_inputs: HeartInputs::default(),
            diabetes_inputs: DiabetesInputs::default(),
            heart_risk: None,
            diabetes_risk: None,
            config,
        }
    }

    /// Submitted profile
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Currently selected tab
    #[must_use]
    pub const fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    /// Configuration the session scores with
    #[must_use]
    pub const fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Current heart form
    #[must_use]
    pub const fn heart_inputs(&self) -> &HeartInputs {
        &self.heart_inputs
    }

    /// Current diabetes form
    #[must_use]
    pub const fn diabetes_inputs(&self) -> &DiabetesInputs {
        &self.diabetes_inputs
    }

    /// Latest heart prediction
    #[must_use]
    pub const fn heart_risk(&self) -> Option<RiskScore> {
        self.heart_risk
    }

    /// Latest diabetes prediction
    #[must_use]
    pub const fn diabetes_risk(&self) -> Option<RiskScore> {
        self.diabetes_risk
    }

    /// Both scores as plan generator input
    #[must_use]
    pub const fn risks(&self) -> RiskInputs {
        RiskInputs::new(self.heart_risk, self.diabetes_risk)
    }

    /// Switch the active view
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Update one heart field; previously predicted scores are kept
    ///
    /// # Errors
    ///
    /// Unknown key or a value outside the field's range or step.
    pub fn set_heart_input(&mut self, key: &str, value: f64) -> AppResult<()> {
        self.heart_inputs.set(key, value)
    }

    /// Update one diabetes field; previously predicted scores are kept
    ///
    /// # Errors
    ///
    /// Unknown key or a value outside the field's range or step.
    pub fn set_diabetes_input(&mut self, key: &str, value: f64) -> AppResult<()> {
        self.diabetes_inputs.set(key, value)
    }

    /// Replace the whole heart form after validating it
    ///
    /// # Errors
    ///
    /// First invalid field; the session keeps its previous inputs.
    pub fn replace_heart_inputs(&mut self, inputs: HeartInputs) -> AppResult<()> {
        inputs.validate()?;
        self.heart_inputs = inputs;
        Ok(())
    }

    /// Replace the whole diabetes form after validating it
    ///
    /// # Errors
    ///
    /// First invalid field; the session keeps its previous inputs.
    pub fn replace_diabetes_inputs(&mut self, inputs: DiabetesInputs) -> AppResult<()> {
        inputs.validate()?;
        self.diabetes_inputs = inputs;
        Ok(())
    }

    /// Run the heart simulator on the current inputs and store the score
    ///
    /// # Errors
    ///
    /// The current inputs fail validation.
    pub fn predict_heart(&mut self) -> AppResult<RiskAssessment> {
        self.heart_inputs.validate()?;
        let assessment = assess_heart(&self.profile, &self.heart_inputs, &self.config.risk);
        AssessmentLogger::log_prediction(assessment.model, assessment.score, assessment.level);
        self.heart_risk = Some(assessment.score);
        Ok(assessment)
    }

    /// Run the diabetes simulator on the current inputs and store the score
    ///
    /// # Errors
    ///
    /// The current inputs fail validation.
    pub fn predict_diabetes(&mut self) -> AppResult<RiskAssessment> {
        self.diabetes_inputs.validate()?;
        let assessment =
            assess_diabetes(&self.profile, &self.diabetes_inputs, &self.config.risk);
        AssessmentLogger::log_prediction(assessment.model, assessment.score, assessment.level);
        self.diabetes_risk = Some(assessment.score);
        Ok(assessment)
    }

    /// Overview tab contents
    #[must_use]
    pub fn overview(&self) -> OverviewReport {
        let card = |risk: Option<RiskScore>, prompt| match risk {
            Some(score) => RiskOverview::Predicted(RiskSummary::new(
                score,
                self.config.risk.level(score),
            )),
            None => RiskOverview::NotRun { prompt },
        };

        OverviewReport {
            profile: self.profile,
            bmi: BmiAssessment::for_profile(&self.profile),
            heart: card(self.heart_risk, HEART_PROMPT),
            diabetes: card(self.diabetes_risk, DIABETES_PROMPT),
        }
    }

    /// Meal plan from the profile and whatever scores are present
    #[must_use]
    pub fn meal_plan(&self) -> MealPlan {
        let plan = generate_meal_plan(&self.profile, self.risks(), &self.config.nutrition);
        AssessmentLogger::log_plan_generated(
            "meal",
            plan.template.label(),
            i64::from(plan.daily_calories),
        );
        plan
    }

    /// Exercise plan from the profile and whatever scores are present
    #[must_use]
    pub fn exercise_plan(&self) -> ExercisePlan {
        let plan = generate_exercise_plan(&self.profile, self.risks(), &self.config.exercise);
        AssessmentLogger::log_plan_generated(
            "exercise",
            plan.tier_label,
            i64::from(plan.weekly_calories),
        );
        plan
    }

    /// Restore scores computed earlier, e.g. passed back in by a caller
    pub fn restore_risks(&mut self, risks: RiskInputs) {
        self.heart_risk = risks.heart;
        self.diabetes_risk = risks.diabetes;
    }

    /// Forget both predictions
    pub fn clear_risks(&mut self) {
        self.heart_risk = None;
        self.diabetes_risk = None;
    }

    /// Start over with a new profile
    ///
    /// Same as a fresh session: overview tab, default forms, no scores.
    pub fn replace_profile(&mut self, profile: Profile) {
        *self = Self::with_config(profile, self.config.clone());
    }
}
