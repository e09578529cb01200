// ABOUTME: Core data models for the VitalSense health assessment engine
// ABOUTME: Re-exports Profile, clinical input forms, RiskScore and RiskLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The inputs every assessment is derived from.
//!
//! - `Profile`: validated age, gender, height and weight
//! - `HeartInputs` / `DiabetesInputs`: clinical forms described by a static
//!   field table (`FieldSpec`) and manipulated through `ClinicalForm`
//! - `RiskScore`: a probability in `[0, 1]` produced by a simulator or
//!   supplied by the caller
//! - `RiskLevel`: Low / Moderate / High banding of a score

mod clinical;
mod profile;
mod risk;

pub use clinical::{ClinicalForm, DiabetesInputs, FieldSpec, HeartInputs};
pub use profile::{Gender, Profile, ProfileFields};
pub use risk::{RiskLevel, RiskScore};
