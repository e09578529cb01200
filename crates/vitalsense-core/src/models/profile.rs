// ABOUTME: User profile model with validated construction
// ABOUTME: Gender enum plus the Profile record every assessment is computed from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::profile_limits::{
    DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG,
    MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};

/// Biological sex used by the BMR and risk formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Indicator used by the heart feature vector (1 for male, 0 otherwise)
    #[must_use]
    pub const fn male_indicator(&self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// Unvalidated profile fields, as read from user input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    /// Age in whole years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// A validated user profile
///
/// Fields are private so a `Profile` can only exist with in-range values.
/// Deserialization runs the same checks as [`Profile::new`].
///
/// # Examples
///
/// ```rust
/// use vitalsense_core::models::{Gender, Profile};
///
/// let profile = Profile::new(45, Gender::Female, 162.0, 58.5)?;
/// assert_eq!(profile.age(), 45);
/// # Ok::<(), vitalsense_core::errors::AppError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileFields")]
pub struct Profile {
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
}

impl Profile {
    /// Build a profile, rejecting values outside the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field.
    pub fn new(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> AppResult<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::value_out_of_range(
                "age",
                f64::from(age),
                f64::from(MIN_AGE),
                f64::from(MAX_AGE),
            ));
        }
        check_range("height_cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
        check_range("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;

        Ok(Self {
            age,
            gender,
            height_cm,
            weight_kg,
        })
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Gender::Male,
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
        }
    }
}

impl TryFrom<ProfileFields> for Profile {
    type Error = AppError;

    fn try_from(fields: ProfileFields) -> Result<Self, Self::Error> {
        Self::new(fields.age, fields.gender, fields.height_cm, fields.weight_kg)
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}
