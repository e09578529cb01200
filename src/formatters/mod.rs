// ABOUTME: Output format abstraction for serializing assessments and plans
// ABOUTME: Supports JSON (default) and TOON (token-efficient, behind the `toon` feature)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Every report the engine produces is `Serialize`; this module turns one into
//! a string in the requested format. TOON (Token-Oriented Object Notation)
//! collapses uniform arrays such as the weekly exercise days or the ranked
//! feature contributions into compact rows.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vitalsense::formatters::{format_output, OutputFormat};
//! use vitalsense::intelligence::BmiAssessment;
//!
//! let bmi = BmiAssessment::from_bmi(24.2);
//! if let Ok(output) = format_output(&bmi, OutputFormat::Json) {
//!     println!("{}", output.data);
//! }
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use vitalsense_core::errors::AppError;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "toon" => Self::Toon,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Format serializable data to the specified output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - Converting to JSON value fails (for TOON format)
/// - TOON encoding fails, or the `toon` feature is disabled (for TOON format)
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format serializable data to pretty-printed output (for terminal display)
///
/// # Errors
/// Same conditions as [`format_output`].
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // TOON is already human-readable
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
