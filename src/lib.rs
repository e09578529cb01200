// ABOUTME: Main library entry point for the VitalSense health assessment engine
// ABOUTME: BMI, heart and diabetes risk simulation, meal and exercise planning, dashboard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # VitalSense
//!
//! A deterministic health-scoring engine. Given a basic profile (age, gender,
//! height, weight) and optional clinical inputs it computes BMI, simulates
//! heart-disease and diabetes risk with fixed logistic models, and builds
//! rule-based meal and exercise plans tailored to whatever risk scores are
//! known.
//!
//! ## Architecture
//!
//! - **Core** (`vitalsense-core`): errors, constants, profile and clinical form models
//! - **Intelligence**: pure scoring and plan generation functions
//! - **Session**: explicit dashboard state tying the views together
//! - **Config**: tunable thresholds with environment overrides
//! - **Formatters**: JSON and TOON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitalsense::errors::AppResult;
//! use vitalsense::models::{Gender, Profile};
//! use vitalsense::session::DashboardSession;
//!
//! fn main() -> AppResult<()> {
//!     let profile = Profile::new(45, Gender::Female, 165.0, 82.0)?;
//!     let mut session = DashboardSession::new(profile);
//!
//!     let heart = session.predict_heart()?;
//!     println!("Heart risk {:.1}% ({})", heart.percent, heart.level);
//!
//!     let plan = session.meal_plan();
//!     println!("Daily target {} kcal", plan.daily_calories);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration tests (tests/).

pub use vitalsense_core::{constants, errors, models};

/// Assessment configuration with environment overrides
pub mod config;

/// Output format abstraction (JSON, TOON)
pub mod formatters;

/// BMI, risk simulation and plan generation
pub mod intelligence;

/// Structured logging setup and assessment events
pub mod logging;

/// Dashboard session state
pub mod session;
