// ABOUTME: Shared argument groups for vitalsense-cli subcommands
// ABOUTME: Profile, clinical form and known-risk flags, applied onto a dashboard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::{Args, ValueEnum};
use vitalsense::errors::AppResult;
use vitalsense::formatters::OutputFormat;
use vitalsense::intelligence::RiskInputs;
use vitalsense::models::{Gender, Profile, RiskScore};
use vitalsense::session::DashboardSession;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputArg {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document
    Json,
    /// TOON document
    Toon,
}

impl OutputArg {
    /// Serialization format, `None` for text
    pub const fn serialized(self) -> Option<OutputFormat> {
        match self {
            Self::Text => None,
            Self::Json => Some(OutputFormat::Json),
            Self::Toon => Some(OutputFormat::Toon),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    /// Age in years (20-80)
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Gender: male or female
    #[arg(long, default_value = "male")]
    pub gender: Gender,

    /// Height in centimetres (140-200)
    #[arg(long = "height", default_value_t = 170.0)]
    pub height_cm: f64,

    /// Weight in kilograms (40-120)
    #[arg(long = "weight", default_value_t = 70.0)]
    pub weight_kg: f64,
}

impl ProfileArgs {
    pub fn session(&self) -> AppResult<DashboardSession> {
        let profile = Profile::new(self.age, self.gender, self.height_cm, self.weight_kg)?;
        Ok(DashboardSession::new(profile))
    }
}

/// Heart form overrides; omitted flags keep the form defaults
#[derive(Debug, Clone, Args)]
pub struct HeartArgs {
    /// Chest pain type (0-3)
    #[arg(long)]
    pub cp: Option<f64>,
    /// Resting blood pressure, mm Hg (90-200)
    #[arg(long)]
    pub trestbps: Option<f64>,
    /// Serum cholesterol, mg/dl (100-400)
    #[arg(long)]
    pub chol: Option<f64>,
    /// Fasting blood sugar > 120 mg/dl (0 or 1)
    #[arg(long)]
    pub fbs: Option<f64>,
    /// Resting ECG result (0-2)
    #[arg(long)]
    pub restecg: Option<f64>,
    /// Maximum heart rate achieved (60-200)
    #[arg(long)]
    pub thalach: Option<f64>,
    /// Exercise induced angina (0 or 1)
    #[arg(long)]
    pub exang: Option<f64>,
    /// ST depression induced by exercise (0-6, step 0.1)
    #[arg(long)]
    pub oldpeak: Option<f64>,
    /// Slope of the peak exercise ST segment (0-2)
    #[arg(long)]
    pub slope: Option<f64>,
    /// Major vessels colored by fluoroscopy (0-4)
    #[arg(long)]
    pub ca: Option<f64>,
    /// Thalassemia (0-3)
    #[arg(long)]
    pub thal: Option<f64>,
}

impl HeartArgs {
    pub fn apply(&self, session: &mut DashboardSession) -> AppResult<()> {
        let fields = [
            ("cp", self.cp),
            ("trestbps", self.trestbps),
            ("chol", self.chol),
            ("fbs", self.fbs),
            ("restecg", self.restecg),
            ("thalach", self.thalach),
            ("exang", self.exang),
            ("oldpeak", self.oldpeak),
            ("slope", self.slope),
            ("ca", self.ca),
            ("thal", self.thal),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                session.set_heart_input(key, value)?;
            }
        }
        Ok(())
    }
}

/// Diabetes form overrides; omitted flags keep the form defaults
#[derive(Debug, Clone, Args)]
pub struct DiabetesArgs {
    /// Plasma glucose, mg/dl (0-200)
    #[arg(long)]
    pub glucose: Option<f64>,
    /// Diastolic blood pressure, mm Hg (0-150)
    #[arg(long)]
    pub blood_pressure: Option<f64>,
    /// Triceps skinfold thickness, mm (0-100)
    #[arg(long)]
    pub skin_thickness: Option<f64>,
    /// Two-hour serum insulin, mu U/ml (0-850)
    #[arg(long)]
    pub insulin: Option<f64>,
    /// Diabetes pedigree function (0-2.5, step 0.01)
    #[arg(long)]
    pub dpf: Option<f64>,
    /// Number of pregnancies (0-15)
    #[arg(long)]
    pub pregnancies: Option<f64>,
}

impl DiabetesArgs {
    pub fn apply(&self, session: &mut DashboardSession) -> AppResult<()> {
        let fields = [
            ("glucose", self.glucose),
            ("bloodPressure", self.blood_pressure),
            ("skinThickness", self.skin_thickness),
            ("insulin", self.insulin),
            ("dpf", self.dpf),
            ("pregnancies", self.pregnancies),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                session.set_diabetes_input(key, value)?;
            }
        }
        Ok(())
    }
}

/// Scores from earlier predictions, as probabilities in [0, 1]
#[derive(Debug, Clone, Args)]
pub struct RiskArgs {
    /// Heart risk from an earlier `heart` run
    #[arg(long)]
    pub heart_risk: Option<RiskScore>,

    /// Diabetes risk from an earlier `diabetes` run
    #[arg(long)]
    pub diabetes_risk: Option<RiskScore>,
}

impl RiskArgs {
    pub const fn risks(&self) -> RiskInputs {
        RiskInputs::new(self.heart_risk, self.diabetes_risk)
    }
}
