// ABOUTME: Serialized output for vitalsense-cli
// ABOUTME: Writes reports and error envelopes as JSON or TOON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vitalsense::errors::{AppError, AppResult, ErrorResponse};
use vitalsense::formatters::{format_output_pretty, OutputFormat};

/// Print a serializable report to stdout
pub fn emit<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<()> {
    let output = format_output_pretty(data, format)?;
    println!("{}", output.data);
    Ok(())
}

/// Print an error to stderr, as an envelope when a serialized format was requested
pub fn emit_error(error: AppError, format: Option<OutputFormat>) {
    let Some(format) = format else {
        eprintln!("Error: {error}");
        return;
    };
    let response = ErrorResponse::from(error);
    match format_output_pretty(&response, format) {
        Ok(output) => eprintln!("{}", output.data),
        Err(e) => eprintln!("Error: {} ({e})", response.error.message),
    }
}
