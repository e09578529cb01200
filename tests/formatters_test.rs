// ABOUTME: Integration tests for the formatters module
// ABOUTME: Tests JSON and TOON output of assessments and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{default_profile, session_for};
use vitalsense::errors::{AppError, ErrorCode};
use vitalsense::formatters::{format_output, format_output_pretty, FormatError, OutputFormat};
use vitalsense::intelligence::BmiAssessment;

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("toon"), OutputFormat::Toon);
    assert_eq!(OutputFormat::from_str_param("Toon"), OutputFormat::Toon);
    // Unknown defaults to JSON
    assert_eq!(OutputFormat::from_str_param("xml"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param(""), OutputFormat::Json);
}

#[test]
fn test_output_format_content_type() {
    assert_eq!(OutputFormat::Json.content_type(), "application/json");
    assert_eq!(OutputFormat::Toon.content_type(), "application/vnd.toon");
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
}

#[test]
fn test_format_bmi_json() {
    let bmi = BmiAssessment::for_profile(&default_profile());

    let output = format_output(&bmi, OutputFormat::Json).expect("JSON format should succeed");
    assert_eq!(output.format, OutputFormat::Json);
    assert_eq!(output.content_type, "application/json");

    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["category"], "Normal");
    assert_eq!(value["range"], "18.5 - 24.9");
}

#[test]
fn test_overview_json_shape() {
    let mut session = session_for(default_profile());
    session.predict_heart().unwrap();

    let output = format_output(&session.overview(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(value["heart"]["status"], "predicted");
    assert_eq!(value["heart"]["label"], "Low Risk");
    assert_eq!(value["diabetes"]["status"], "not_run");
    assert!(value["diabetes"]["prompt"]
        .as_str()
        .unwrap()
        .contains("Diabetes tab"));
    assert_eq!(value["profile"]["gender"], "male");
}

#[test]
fn test_pretty_json_is_multiline() {
    let plan = session_for(default_profile()).exercise_plan();
    let output = format_output_pretty(&plan, OutputFormat::Json).unwrap();

    assert!(output.data.lines().count() > 10);
    assert!(output.data.contains("\"tier\": \"high_intensity\""));
}

#[cfg(feature = "toon")]
#[test]
fn test_format_meal_plan_toon() {
    let plan = session_for(default_profile()).meal_plan();

    let output = format_output(&plan, OutputFormat::Toon).expect("TOON format should succeed");

    assert_eq!(output.format, OutputFormat::Toon);
    assert_eq!(output.content_type, "application/vnd.toon");
    assert!(output.data.contains("Breakfast"));
    assert!(output.data.contains("standard"));
}

#[cfg(feature = "toon")]
#[test]
fn test_feature_importance_toon_is_smaller_than_json() {
    let mut session = session_for(default_profile());
    let assessment = session.predict_heart().unwrap();

    let json_output = format_output(&assessment.contributions, OutputFormat::Json).unwrap();
    let toon_output = format_output(&assessment.contributions, OutputFormat::Toon).unwrap();

    assert!(toon_output.data.contains("Max HR"));
    assert!(toon_output.data.contains("Cholesterol"));
    assert!(
        toon_output.data.len() < json_output.data.len(),
        "TOON ({} bytes) should be smaller than JSON ({} bytes)",
        toon_output.data.len(),
        json_output.data.len()
    );
}

#[test]
fn test_format_error_converts_to_serialization_error() {
    let error = FormatError {
        message: "boom".to_owned(),
        format: OutputFormat::Toon,
    };
    assert_eq!(error.to_string(), "Format error (toon): boom");

    let app: AppError = error.into();
    assert_eq!(app.code, ErrorCode::SerializationError);
    assert!(app.message.contains("boom"));
}
