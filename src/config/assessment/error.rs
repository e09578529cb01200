// ABOUTME: Error types for assessment configuration loading and validation
// ABOUTME: ConfigError enum and its conversion into the application error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use thiserror::Error;
use vitalsense_core::errors::{AppError, ErrorCode};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related thresholds are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Percentages or weights do not add up
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A single value is outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) | ConfigError::MissingField(_) => {
                ErrorCode::ConfigError
            }
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
