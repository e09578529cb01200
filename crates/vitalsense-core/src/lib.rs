// ABOUTME: Core types and constants for the VitalSense health assessment engine
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VitalSense Core
//!
//! Foundation crate providing shared types and constants for the VitalSense
//! health assessment engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Clinical thresholds, form limits and display text
//! - **models**: User profile, clinical input forms and risk scores

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, clinical inputs, risk scores)
pub mod models;
