// ABOUTME: Clinical input forms for the heart and diabetes simulators
// ABOUTME: Static field tables with ranges, steps and defaults plus keyed get/set/validate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each form is a plain record of `f64` values described by a static table of
//! [`FieldSpec`]s. The table drives defaults, keyed access and validation, so
//! the CLI and the session never need to know individual field names.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Relative tolerance when checking that a value lands on the step grid
const STEP_TOLERANCE: f64 = 1e-9;

/// Description of one numeric form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Wire key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Help text
    pub description: &'static str,
    /// Inclusive minimum
    pub min: f64,
    /// Inclusive maximum
    pub max: f64,
    /// Granularity
    pub step: f64,
    /// Initial value
    pub default: f64,
}

impl FieldSpec {
    /// Check range and step granularity of a candidate value
    ///
    /// # Errors
    ///
    /// `InvalidInput` for non-finite or off-grid values, `ValueOutOfRange`
    /// for values outside `[min, max]`.
    pub fn check(&self, value: f64) -> AppResult<()> {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{} must be a finite number",
                self.key
            ))
            .with_details(json!({ "field": self.key })));
        }
        if !(self.min..=self.max).contains(&value) {
            return Err(AppError::value_out_of_range(
                self.key, value, self.min, self.max,
            ));
        }
        let steps = (value - self.min) / self.step;
        if (steps - steps.round()).abs() > STEP_TOLERANCE {
            return Err(AppError::invalid_input(format!(
                "{} must be a multiple of {} (got {value})",
                self.key, self.step
            ))
            .with_details(json!({ "field": self.key, "value": value, "step": self.step })));
        }
        Ok(())
    }
}

/// Keyed access and validation shared by the clinical forms
pub trait ClinicalForm: Sized {
    /// Form name used in log events and error messages
    const NAME: &'static str;

    /// Static field table in display order
    fn fields() -> &'static [FieldSpec];

    /// Read a field by key
    fn value(&self, key: &str) -> Option<f64>;

    /// Mutable access to a field by key
    fn value_mut(&mut self, key: &str) -> Option<&mut f64>;

    /// Look up a field description
    fn spec(key: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|field| field.key == key)
    }

    /// Read a field, failing on unknown keys
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the key is not part of this form.
    fn get(&self, key: &str) -> AppResult<f64> {
        self.value(key).ok_or_else(|| unknown_field::<Self>(key))
    }

    /// Update a single field after checking it against its range and step
    ///
    /// The form is left untouched when the value is rejected.
    ///
    /// # Errors
    ///
    /// Unknown key, non-finite, out-of-range or off-grid values.
    fn set(&mut self, key: &str, value: f64) -> AppResult<()> {
        let spec = Self::spec(key).ok_or_else(|| unknown_field::<Self>(key))?;
        spec.check(value)?;
        let slot = self
            .value_mut(key)
            .ok_or_else(|| unknown_field::<Self>(key))?;
        *slot = value;
        debug!(form = Self::NAME, field = key, value, "clinical input updated");
        Ok(())
    }

    /// Check every field against its range and step
    ///
    /// # Errors
    ///
    /// Returns the error for the first invalid field in table order.
    fn validate(&self) -> AppResult<()> {
        for spec in Self::fields() {
            let value = self.get(spec.key)?;
            spec.check(value)?;
        }
        Ok(())
    }

    /// Form populated with every field's default
    fn from_defaults() -> Self;
}

fn unknown_field<F: ClinicalForm>(key: &str) -> AppError {
    let known: Vec<&str> = F::fields().iter().map(|field| field.key).collect();
    AppError::invalid_input(format!("Unknown {} field '{key}'", F::NAME))
        .with_details(json!({ "field": key, "known_fields": known }))
}

// ============================================================================
// Heart form
// ============================================================================

const HEART_FIELDS: [FieldSpec; 11] = [
    FieldSpec {
        key: "cp",
        label: "Chest Pain Type",
        description: "0: Typical Angina, 1: Atypical Angina, 2: Non-anginal, 3: Asymptomatic",
        min: 0.0,
        max: 3.0,
        step: 1.0,
        default: 1.0,
    },
    FieldSpec {
        key: "trestbps",
        label: "Resting Blood Pressure",
        description: "Resting blood pressure in mm Hg on admission",
        min: 90.0,
        max: 200.0,
        step: 1.0,
        default: 120.0,
    },
    FieldSpec {
        key: "chol",
        label: "Cholesterol",
        description: "Serum cholesterol in mg/dl",
        min: 100.0,
        max: 400.0,
        step: 1.0,
        default: 200.0,
    },
    FieldSpec {
        key: "fbs",
        label: "Fasting Blood Sugar > 120",
        description: "0: No, 1: Yes (fasting blood sugar > 120 mg/dl)",
        min: 0.0,
        max: 1.0,
        step: 1.0,
        default: 0.0,
    },
    FieldSpec {
        key: "restecg",
        label: "Resting ECG",
        description: "0: Normal, 1: ST-T abnormality, 2: LV hypertrophy",
        min: 0.0,
        max: 2.0,
        step: 1.0,
        default: 0.0,
    },
    FieldSpec {
        key: "thalach",
        label: "Max Heart Rate",
        description: "Maximum heart rate achieved during exercise",
        min: 60.0,
        max: 200.0,
        step: 1.0,
        default: 150.0,
    },
    FieldSpec {
        key: "exang",
        label: "Exercise Induced Angina",
        description: "0: No, 1: Yes",
        min: 0.0,
        max: 1.0,
        step: 1.0,
        default: 0.0,
    },
    FieldSpec {
        key: "oldpeak",
        label: "ST Depression (Oldpeak)",
        description: "ST depression induced by exercise relative to rest",
        min: 0.0,
        max: 6.0,
        step: 0.1,
        default: 1.0,
    },
    FieldSpec {
        key: "slope",
        label: "Slope of Peak ST",
        description: "0: Upsloping, 1: Flat, 2: Downsloping",
        min: 0.0,
        max: 2.0,
        step: 1.0,
        default: 1.0,
    },
    FieldSpec {
        key: "ca",
        label: "Major Vessels (CA)",
        description: "Number of major vessels colored by fluoroscopy (0-4)",
        min: 0.0,
        max: 4.0,
        step: 1.0,
        default: 0.0,
    },
    FieldSpec {
        key: "thal",
        label: "Thalassemia",
        description: "0: Normal, 1: Fixed Defect, 2: Reversible Defect, 3: Other",
        min: 0.0,
        max: 3.0,
        step: 1.0,
        default: 2.0,
    },
];

/// Heart-disease clinical inputs
///
/// Age and sex come from the [`Profile`](super::Profile).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartInputs {
    /// Chest pain type (0-3)
    pub cp: f64,
    /// Resting blood pressure, mm Hg
    pub trestbps: f64,
    /// Serum cholesterol, mg/dl
    pub chol: f64,
    /// Fasting blood sugar above 120 mg/dl (0/1)
    pub fbs: f64,
    /// Resting ECG result (0-2)
    pub restecg: f64,
    /// Maximum heart rate achieved
    pub thalach: f64,
    /// Exercise induced angina (0/1)
    pub exang: f64,
    /// ST depression induced by exercise
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment (0-2)
    pub slope: f64,
    /// Major vessels colored by fluoroscopy (0-4)
    pub ca: f64,
    /// Thalassemia (0-3)
    pub thal: f64,
}

impl ClinicalForm for HeartInputs {
    const NAME: &'static str = "heart";

    fn fields() -> &'static [FieldSpec] {
        &HEART_FIELDS
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "cp" => Some(self.cp),
            "trestbps" => Some(self.trestbps),
            "chol" => Some(self.chol),
            "fbs" => Some(self.fbs),
            "restecg" => Some(self.restecg),
            "thalach" => Some(self.thalach),
            "exang" => Some(self.exang),
            "oldpeak" => Some(self.oldpeak),
            "slope" => Some(self.slope),
            "ca" => Some(self.ca),
            "thal" => Some(self.thal),
            _ => None,
        }
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "cp" => Some(&mut self.cp),
            "trestbps" => Some(&mut self.trestbps),
            "chol" => Some(&mut self.chol),
            "fbs" => Some(&mut self.fbs),
            "restecg" => Some(&mut self.restecg),
            "thalach" => Some(&mut self.thalach),
            "exang" => Some(&mut self.exang),
            "oldpeak" => Some(&mut self.oldpeak),
            "slope" => Some(&mut self.slope),
            "ca" => Some(&mut self.ca),
            "thal" => Some(&mut self.thal),
            _ => None,
        }
    }

    fn from_defaults() -> Self {
        let mut inputs = Self {
            cp: 0.0,
            trestbps: 0.0,
            chol: 0.0,
            fbs: 0.0,
            restecg: 0.0,
            thalach: 0.0,
            exang: 0.0,
            oldpeak: 0.0,
            slope: 0.0,
            ca: 0.0,
            thal: 0.0,
        };
        apply_defaults(&mut inputs);
        inputs
    }
}

impl Default for HeartInputs {
    fn default() -> Self {
        Self::from_defaults()
    }
}

// ============================================================================
// Diabetes form
// ============================================================================

const DIABETES_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        key: "glucose",
        label: "Glucose Level",
        description: "Plasma glucose concentration (2h oral glucose tolerance test, mg/dL)",
        min: 0.0,
        max: 200.0,
        step: 1.0,
        default: 100.0,
    },
    FieldSpec {
        key: "bloodPressure",
        label: "Blood Pressure",
        description: "Diastolic blood pressure (mm Hg)",
        min: 0.0,
        max: 150.0,
        step: 1.0,
        default: 72.0,
    },
    FieldSpec {
        key: "skinThickness",
        label: "Skin Thickness",
        description: "Triceps skinfold thickness (mm)",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default: 25.0,
    },
    FieldSpec {
        key: "insulin",
        label: "Insulin Level",
        description: "2-Hour serum insulin (mu U/ml)",
        min: 0.0,
        max: 850.0,
        step: 1.0,
        default: 80.0,
    },
    FieldSpec {
        key: "dpf",
        label: "Diabetes Pedigree",
        description: "Diabetes pedigree function - genetic influence score",
        min: 0.0,
        max: 2.5,
        step: 0.01,
        default: 0.5,
    },
    FieldSpec {
        key: "pregnancies",
        label: "Pregnancies",
        description: "Number of times pregnant",
        min: 0.0,
        max: 15.0,
        step: 1.0,
        default: 0.0,
    },
];

/// Diabetes clinical inputs
///
/// Age, BMI and gender come from the [`Profile`](super::Profile).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiabetesInputs {
    /// Plasma glucose, mg/dL
    pub glucose: f64,
    /// Diastolic blood pressure, mm Hg
    pub blood_pressure: f64,
    /// Triceps skinfold thickness, mm
    pub skin_thickness: f64,
    /// 2-hour serum insulin, mu U/ml
    pub insulin: f64,
    /// Diabetes pedigree function
    pub dpf: f64,
    /// Number of pregnancies
    pub pregnancies: f64,
}

impl ClinicalForm for DiabetesInputs {
    const NAME: &'static str = "diabetes";

    fn fields() -> &'static [FieldSpec] {
        &DIABETES_FIELDS
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "glucose" => Some(self.glucose),
            "bloodPressure" => Some(self.blood_pressure),
            "skinThickness" => Some(self.skin_thickness),
            "insulin" => Some(self.insulin),
            "dpf" => Some(self.dpf),
            "pregnancies" => Some(self.pregnancies),
            _ => None,
        }
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "glucose" => Some(&mut self.glucose),
            "bloodPressure" => Some(&mut self.blood_pressure),
            "skinThickness" => Some(&mut self.skin_thickness),
            "insulin" => Some(&mut self.insulin),
            "dpf" => Some(&mut self.dpf),
            "pregnancies" => Some(&mut self.pregnancies),
            _ => None,
        }
    }

    fn from_defaults() -> Self {
        let mut inputs = Self {
            glucose: 0.0,
            blood_pressure: 0.0,
            skin_thickness: 0.0,
            insulin: 0.0,
            dpf: 0.0,
            pregnancies: 0.0,
        };
        apply_defaults(&mut inputs);
        inputs
    }
}

impl Default for DiabetesInputs {
    fn default() -> Self {
        Self::from_defaults()
    }
}

fn apply_defaults<F: ClinicalForm>(form: &mut F) {
    for spec in F::fields() {
        if let Some(slot) = form.value_mut(spec.key) {
            *slot = spec.default;
        }
    }
}
